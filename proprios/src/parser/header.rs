//! En-tête du CSV et association en-tête → valeur

use std::collections::HashMap;

use crate::parser::row::parse_row;
use crate::ParseError;

const BOM: char = '\u{feff}';

/// En-tête normalisé (minuscules, sans guillemets ni espaces)
#[derive(Debug, Clone)]
pub struct Header {
    names: Vec<String>,
    delimiter: u8,
}

impl Header {
    /// Parse la ligne d'en-tête avec le même tokeniseur que les données
    pub fn parse(line: &str, delimiter: u8) -> Self {
        let line = line.strip_prefix(BOM).unwrap_or(line);
        let names = parse_row(line, delimiter)
            .into_iter()
            .map(|name| fold_key(&name))
            .collect();

        Self { names, delimiter }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Associe les champs d'une ligne aux noms de l'en-tête.
    ///
    /// `line_no` est le numéro de ligne (1 = en-tête), utilisé pour les erreurs.
    pub fn map_row(&self, line_no: usize, line: &str) -> Result<Row, ParseError> {
        let values = parse_row(line, self.delimiter);
        if values.len() != self.names.len() {
            return Err(ParseError::field_count(
                line_no,
                self.names.len(),
                values.len(),
            ));
        }

        let values = self
            .names
            .iter()
            .cloned()
            .zip(values.into_iter().map(|v| v.trim().to_string()))
            .collect();

        Ok(Row { line: line_no, values })
    }
}

/// Une ligne de données indexée par nom de colonne normalisé
#[derive(Debug, Clone, Default)]
pub struct Row {
    line: usize,
    values: HashMap<String, String>,
}

impl Row {
    /// Construit une ligne à partir de paires (colonne, valeur)
    pub fn from_pairs<K, V>(line: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (fold_key(k.as_ref()), v.as_ref().trim().to_string()))
            .collect();
        Self { line, values }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Valeur d'une colonne, `None` si absente ou vide.
    /// Le nom est comparé sans tenir compte de la casse.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .get(&column.to_lowercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Première colonne renseignée parmi `columns`
    pub fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|c| self.get(c))
    }
}

/// Normalise un nom de colonne : sans guillemets, trim, minuscules
fn fold_key(name: &str) -> String {
    name.replace('"', "").trim().to_lowercase()
}
