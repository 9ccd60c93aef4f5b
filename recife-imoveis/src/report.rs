//! Rapport de chargement du jeu de données
//!
//! Décrit un snapshot réussi : volume, empreinte du payload, lignes
//! ignorées et premières erreurs de ligne.

use std::time::Duration;

use proprios::{ParseError, ParseStats};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Nombre d'erreurs de ligne conservées dans le rapport
const MAX_ERROR_SAMPLES: usize = 10;

/// Statut d'un chargement réussi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    /// Au moins un imóvel géolocalisé
    Loaded,
    /// Payload valide mais aucun imóvel géolocalisé
    Empty,
}

/// Rapport d'un chargement réussi
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub status: LoadStatus,
    /// Durée téléchargement + parsing
    pub duration_secs: f64,
    /// Taille du payload en octets
    pub bytes: usize,
    /// Empreinte BLAKE3 (hex) du payload
    pub digest: String,
    /// Nombre d'imóveis retenus
    pub records: usize,
    pub stats: ParseStats,
    /// Premières erreurs de ligne (non fatales)
    pub error_samples: Vec<String>,
}

impl LoadReport {
    pub fn new(
        payload: &[u8],
        records: usize,
        stats: ParseStats,
        errors: &[ParseError],
        duration: Duration,
    ) -> Self {
        Self {
            status: if records > 0 {
                LoadStatus::Loaded
            } else {
                LoadStatus::Empty
            },
            duration_secs: duration.as_secs_f64(),
            bytes: payload.len(),
            digest: payload_digest(payload),
            records,
            stats,
            error_samples: errors
                .iter()
                .take(MAX_ERROR_SAMPLES)
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Nombre total de lignes ignorées
    pub fn skipped(&self) -> usize {
        self.stats.malformed_rows + self.stats.rows_without_coordinates
    }

    /// Émet le rapport dans les logs
    pub fn log(&self) {
        match self.status {
            LoadStatus::Loaded => info!(
                records = self.records,
                rows = self.stats.rows_read,
                skipped = self.skipped(),
                duplicate_ids = self.stats.duplicate_ids,
                digest = %&self.digest[..12],
                duration_ms = (self.duration_secs * 1000.0) as u64,
                "Recife real-estate dataset loaded"
            ),
            LoadStatus::Empty => warn!(
                rows = self.stats.rows_read,
                skipped = self.skipped(),
                "Dataset loaded but no geolocated record found"
            ),
        }

        for sample in &self.error_samples {
            debug!(error = %sample, "Skipped row");
        }
    }
}

/// Empreinte hexadécimale du payload (identifie le snapshot)
pub fn payload_digest(payload: &[u8]) -> String {
    hex::encode(blake3::hash(payload).as_bytes())
}
