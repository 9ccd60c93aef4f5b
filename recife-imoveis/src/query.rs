//! Façade de requêtes sur le cache
//!
//! Chaque opération déclenche `load` si nécessaire. Un chargement en échec
//! est vu comme un jeu de données vide : l'absence n'est jamais une erreur.

use std::sync::Arc;

use proprios::spatial;
use proprios::ParcelRecord;
use tracing::debug;

use crate::cache::DatasetCache;
use crate::source::CsvSource;

/// Nombre maximal de résultats de la recherche texte
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Rayon par défaut de la recherche de proximité
pub const DEFAULT_RADIUS_KM: f64 = 1.0;

/// Requêtes par coordonnée, identifiant, texte et rayon
pub struct ParcelQuery<S> {
    cache: Arc<DatasetCache<S>>,
}

impl<S> Clone for ParcelQuery<S> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S: CsvSource> ParcelQuery<S> {
    pub fn new(cache: Arc<DatasetCache<S>>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<DatasetCache<S>> {
        &self.cache
    }

    /// Imóvel le plus proche de (lng, lat), sous le seuil de proximité
    pub async fn get_by_coordinates(&self, lng: f64, lat: f64) -> Option<ParcelRecord> {
        let outcome = self.cache.load().await;
        let found = spatial::find_nearest(outcome.records(), lng, lat);

        match found {
            Some((record, distance)) => {
                debug!(id = %record.id, distance, "Nearest record found");
                Some(record.clone())
            }
            None => {
                debug!(lng, lat, "No record within threshold");
                None
            }
        }
    }

    /// Recherche exacte par identifiant
    pub async fn get_by_identifier(&self, id: &str) -> Option<ParcelRecord> {
        let outcome = self.cache.load().await;
        outcome.records().iter().find(|r| r.id == id).cloned()
    }

    /// Recherche insensible à la casse dans le nom, l'adresse et les
    /// caractéristiques ; au plus [`MAX_SEARCH_RESULTS`] résultats
    pub async fn search_by_text(&self, query: &str) -> Vec<ParcelRecord> {
        let outcome = self.cache.load().await;
        let term = query.to_lowercase();

        outcome
            .records()
            .iter()
            .filter(|r| matches_text(r, &term))
            .take(MAX_SEARCH_RESULTS)
            .cloned()
            .collect()
    }

    /// Tous les imóveis dans un rayon en kilomètres
    pub async fn find_within_radius(&self, lng: f64, lat: f64, radius_km: f64) -> Vec<ParcelRecord> {
        let outcome = self.cache.load().await;
        spatial::find_within_radius(outcome.records(), lng, lat, radius_km)
            .into_iter()
            .cloned()
            .collect()
    }
}

fn matches_text(record: &ParcelRecord, term: &str) -> bool {
    record.name.to_lowercase().contains(term)
        || record.address.to_lowercase().contains(term)
        || record
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(term))
}
