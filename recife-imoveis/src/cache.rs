//! Cache en mémoire du jeu de données
//!
//! Le premier chargement réussi est conservé jusqu'à `invalidate`. Les
//! échecs ne sont pas mis en cache : le `load` suivant retélécharge.
//! Des chargements concurrents avant le premier succès téléchargent
//! chacun de leur côté ; le dernier écrit un snapshot équivalent.

use std::sync::Arc;
use std::time::Instant;

use proprios::ParcelRecord;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::report::LoadReport;
use crate::source::CsvSource;

/// Snapshot immuable d'un chargement réussi
#[derive(Debug)]
pub struct Dataset {
    records: Vec<ParcelRecord>,
    report: LoadReport,
}

impl Dataset {
    pub fn new(records: Vec<ParcelRecord>, report: LoadReport) -> Self {
        Self { records, report }
    }

    /// Imóveis dans l'ordre du fichier source
    pub fn records(&self) -> &[ParcelRecord] {
        &self.records
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Résultat d'un `load`
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Snapshot avec au moins un imóvel
    Loaded(Arc<Dataset>),
    /// Téléchargement réussi mais aucun imóvel géolocalisé
    Empty(Arc<Dataset>),
    /// Échec du téléchargement ou payload vide (non mis en cache)
    Failed(Arc<LoadError>),
}

impl LoadOutcome {
    fn from_dataset(dataset: Arc<Dataset>) -> Self {
        if dataset.is_empty() {
            Self::Empty(dataset)
        } else {
            Self::Loaded(dataset)
        }
    }

    /// Imóveis disponibles ; vide en cas d'échec
    pub fn records(&self) -> &[ParcelRecord] {
        match self {
            Self::Loaded(dataset) | Self::Empty(dataset) => dataset.records(),
            Self::Failed(_) => &[],
        }
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            Self::Loaded(dataset) | Self::Empty(dataset) => Some(dataset),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Cache injectable du jeu de données
pub struct DatasetCache<S> {
    source: S,
    snapshot: RwLock<Option<Arc<Dataset>>>,
}

impl<S: CsvSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Retourne le snapshot, en le téléchargeant au premier appel
    pub async fn load(&self) -> LoadOutcome {
        if let Some(dataset) = self.snapshot().await {
            return LoadOutcome::from_dataset(dataset);
        }

        // Le verrou n'est pas tenu pendant le téléchargement
        match self.fetch_and_parse().await {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                dataset.report().log();
                *self.snapshot.write().await = Some(Arc::clone(&dataset));
                LoadOutcome::from_dataset(dataset)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load Recife real-estate CSV");
                LoadOutcome::Failed(Arc::new(e))
            }
        }
    }

    /// Snapshot courant sans déclencher de téléchargement
    pub async fn snapshot(&self) -> Option<Arc<Dataset>> {
        self.snapshot.read().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// Oublie le snapshot ; le prochain `load` retélécharge
    pub async fn invalidate(&self) {
        if self.snapshot.write().await.take().is_some() {
            debug!("Dataset cache invalidated");
        }
    }

    async fn fetch_and_parse(&self) -> Result<Dataset, LoadError> {
        let started = Instant::now();
        let payload = self.source.fetch().await?;
        let parsed = proprios::parse(&payload)?;

        let report = LoadReport::new(
            &payload,
            parsed.records.len(),
            parsed.stats,
            &parsed.errors,
            started.elapsed(),
        );

        for (i, record) in parsed.records.iter().take(3).enumerate() {
            debug!(
                sample = i + 1,
                id = %record.id,
                name = %record.name,
                lng = record.lng(),
                lat = record.lat(),
                area = record.area,
                "Parsed record"
            );
        }

        Ok(Dataset::new(parsed.records, report))
    }
}
