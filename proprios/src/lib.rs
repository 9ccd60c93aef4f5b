//! # proprios
//!
//! Parser pour l'export CSV des imóveis municipaux de la Prefeitura do Recife
//! ("próprios").
//!
//! ## Features
//!
//! - Tokenisation SIMD des lignes avec `memchr` (champs entre guillemets)
//! - Décodage UTF-8 avec `simdutf8`, repli Windows-1252 via `encoding_rs`
//! - Normalisation par tables de règles (nom, adresse, description, type...)
//! - Recherche du plus proche voisin dans l'espace des degrés avec `geo`
//!
//! ## Usage
//!
//! ```rust,ignore
//! let result = proprios::parse(&bytes)?;
//! println!("{} imóveis", result.records.len());
//!
//! if let Some((record, _)) = proprios::spatial::find_nearest(&result.records, -34.88, -8.06) {
//!     println!("{}", record.name);
//! }
//! ```

pub mod error;
pub mod normalize;
pub mod parser;
pub mod spatial;
pub mod types;

pub use error::ParseError;
pub use types::{ParcelRecord, ParcelStatus, ParcelType, ParseResult, ParseStats};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::parser::{payload, Header, DEFAULT_DELIMITER};

/// Parse un payload CSV complet (en-tête + lignes).
///
/// Les lignes invalides (nombre de champs, coordonnées absentes) sont
/// ignorées et reportées dans `ParseResult::errors`.
///
/// # Errors
///
/// `ParseError::EmptyPayload` si le payload a moins de 2 lignes non vides.
pub fn parse(data: &[u8]) -> Result<ParseResult, ParseError> {
    let text = payload::decode(data);
    parse_str(&text, DEFAULT_DELIMITER)
}

/// Parse un texte déjà décodé avec un séparateur donné
pub fn parse_str(text: &str, delimiter: u8) -> Result<ParseResult, ParseError> {
    let lines: Vec<(usize, &str)> = payload::non_blank_lines(text).collect();
    if lines.len() < 2 {
        return Err(ParseError::EmptyPayload { lines: lines.len() });
    }

    let header = Header::parse(lines[0].1, delimiter);
    debug!(columns = header.len(), "CSV header parsed");

    let mut result = ParseResult {
        headers: header.names().to_vec(),
        ..Default::default()
    };
    let mut emitted_ids: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    for &(line_no, line) in &lines[1..] {
        result.stats.rows_read += 1;

        let row = match header.map_row(line_no, line) {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "Skipping malformed row");
                result.stats.malformed_rows += 1;
                result.errors.push(e);
                continue;
            }
        };

        let mut record = match normalize::normalize(&row, result.records.len()) {
            Ok(record) => record,
            Err(e) => {
                result.stats.rows_without_coordinates += 1;
                result.errors.push(e);
                continue;
            }
        };

        // L'identifiant doit rester unique dans un chargement, suffixes compris
        if !emitted_ids.insert(record.id.clone()) {
            result.stats.duplicate_ids += 1;
            let k = next_suffix.entry(record.id.clone()).or_insert(1);
            loop {
                *k += 1;
                let candidate = format!("{}#{}", record.id, k);
                if emitted_ids.insert(candidate.clone()) {
                    record.id = candidate;
                    break;
                }
            }
        }

        result.records.push(record);
    }

    Ok(result)
}
