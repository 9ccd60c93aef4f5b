//! Types d'erreurs pour le crate proprios

use thiserror::Error;

/// Erreurs pouvant survenir lors du parsing du CSV des próprios
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Payload vide ou sans ligne de données (moins de 2 lignes non vides)
    #[error("Empty or malformed CSV payload: {lines} non-blank line(s)")]
    EmptyPayload { lines: usize },

    /// Nombre de champs différent de l'en-tête
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Latitude ou longitude absente, nulle ou non numérique
    #[error("Line {line}: missing or zero coordinates")]
    MissingCoordinates { line: usize },
}

impl ParseError {
    /// Crée une erreur de nombre de champs
    pub fn field_count(line: usize, expected: usize, found: usize) -> Self {
        Self::FieldCountMismatch {
            line,
            expected,
            found,
        }
    }

    /// Vrai si l'erreur ne concerne qu'une ligne (non fatale)
    pub fn is_row_level(&self) -> bool {
        !matches!(self, Self::EmptyPayload { .. })
    }
}
