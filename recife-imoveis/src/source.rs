//! Sources du CSV : HTTP (production) ou payload en mémoire

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use tracing::{debug, info};

use crate::error::LoadError;

/// Fournit le payload CSV brut
pub trait CsvSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Bytes, LoadError>> + Send;
}

/// Téléchargement de la ressource via HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CsvSource for HttpSource {
    async fn fetch(&self) -> Result<Bytes, LoadError> {
        info!(url = %self.url, "Downloading Recife real-estate CSV");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::http(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "CSV downloaded");
        Ok(body)
    }
}

/// Payload fixe en mémoire (jeu de données embarqué, tests)
#[derive(Debug)]
pub struct StaticSource {
    payload: Result<Bytes, u16>,
    fetches: AtomicUsize,
}

impl StaticSource {
    /// Source qui retourne toujours ce payload
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: Ok(payload.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source qui échoue toujours avec ce statut HTTP
    pub fn failing(status: u16) -> Self {
        Self {
            payload: Err(status),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Nombre d'appels à `fetch`
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CsvSource for StaticSource {
    async fn fetch(&self) -> Result<Bytes, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(LoadError::http(*status)),
        }
    }
}
