//! Photos de lieux via Google Places (best effort)
//!
//! Sans clé API ou en cas d'erreur, on retourne une liste vide : les
//! photos ne sont jamais nécessaires au fonctionnement.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
const PHOTO_MAX_WIDTH: u32 = 400;

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

/// Client du service de photos
#[derive(Debug, Clone)]
pub struct PlacePhotos {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl PlacePhotos {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, PLACES_BASE_URL)
    }

    /// Variante avec une URL de base explicite (serveur de test)
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.places_api_key.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// URLs des photos d'un lieu ; vide si non configuré ou en échec
    pub async fn place_photos(&self, place_id: &str) -> Vec<String> {
        let Some(key) = self.api_key.as_deref() else {
            warn!("Google Places API key not configured");
            return Vec::new();
        };

        match self.fetch_references(place_id, key).await {
            Ok(references) => {
                debug!(place_id, photos = references.len(), "Place photos fetched");
                references
                    .iter()
                    .map(|reference| self.photo_url(reference, key))
                    .collect()
            }
            Err(e) => {
                warn!(place_id, error = %format!("{e:#}"), "Error fetching place photos");
                Vec::new()
            }
        }
    }

    async fn fetch_references(&self, place_id: &str, key: &str) -> Result<Vec<String>> {
        // L'URL porte la clé API : elle est retirée des erreurs
        let url = format!("{}/details/json", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[("place_id", place_id), ("fields", "photos"), ("key", key)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Places details request failed")?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .context("Places details returned an error status")?
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read Places details body")?;

        parse_photo_references(&body)
    }

    fn photo_url(&self, reference: &str, key: &str) -> String {
        format!(
            "{}/photo?maxwidth={}&photoreference={}&key={}",
            self.base_url, PHOTO_MAX_WIDTH, reference, key
        )
    }
}

/// Extrait les `photo_reference` d'une réponse Place Details
fn parse_photo_references(body: &str) -> Result<Vec<String>> {
    let response: DetailsResponse =
        serde_json::from_str(body).context("Failed to parse Places details JSON")?;

    Ok(response
        .result
        .map(|r| r.photos.into_iter().map(|p| p.photo_reference).collect())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photo_references() {
        let body = r#"{"result":{"photos":[{"photo_reference":"abc","height":10},{"photo_reference":"def"}]},"status":"OK"}"#;
        assert_eq!(parse_photo_references(body).unwrap(), vec!["abc", "def"]);
    }

    #[test]
    fn test_parse_without_photos() {
        assert!(parse_photo_references(r#"{"result":{}}"#).unwrap().is_empty());
        assert!(parse_photo_references(r#"{"status":"NOT_FOUND"}"#).unwrap().is_empty());
        assert!(parse_photo_references("not json").is_err());
    }

    #[test]
    fn test_photo_url() {
        let photos = PlacePhotos::with_base_url(Some("k".into()), "http://localhost/place/");
        assert_eq!(
            photos.photo_url("ref1", "k"),
            "http://localhost/place/photo?maxwidth=400&photoreference=ref1&key=k"
        );
    }

    #[tokio::test]
    async fn test_errors_do_not_leak_api_key() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let photos =
            PlacePhotos::with_base_url(Some("SECRET_KEY_123".into()), format!("http://{addr}/place"));

        let err = photos
            .fetch_references("pid", "SECRET_KEY_123")
            .await
            .unwrap_err();
        let message = format!("{err:#} {err:?}");
        assert!(message.contains("Places details request failed"));
        assert!(!message.contains("SECRET_KEY_123"));
    }

    #[tokio::test]
    async fn test_unconfigured_returns_empty() {
        let photos = PlacePhotos::new(None);
        assert!(!photos.is_configured());
        assert!(photos.place_photos("ChIJ123").await.is_empty());
    }
}
