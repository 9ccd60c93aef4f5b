//! Erreurs du chargement du jeu de données

use proprios::ParseError;
use thiserror::Error;

/// Échec d'un chargement (jamais mis en cache)
#[derive(Debug, Error)]
pub enum LoadError {
    /// Réponse HTTP hors 2xx
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// Erreur réseau ou de lecture du corps
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Payload vide ou illisible
    #[error("Invalid payload: {0}")]
    Parse(#[from] ParseError),
}

impl LoadError {
    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }
}
