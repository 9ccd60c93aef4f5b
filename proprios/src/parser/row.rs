//! Tokenisation d'une ligne CSV avec guillemets

use memchr::memchr2;

/// Séparateur du CSV de la Prefeitura
pub const DEFAULT_DELIMITER: u8 = b';';

const QUOTE: u8 = b'"';

/// Découpe une ligne en champs bruts.
///
/// Chaque `"` bascule le mode "entre guillemets" et n'est pas recopié ;
/// dans ce mode le séparateur est du texte. Les guillemets doublés ne sont
/// pas déséchappés (`"a""b"` donne `ab`). Un champ final vide après le
/// dernier séparateur est toujours émis.
///
/// Le séparateur doit être un caractère ASCII.
pub fn parse_row(line: &str, delimiter: u8) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pos = 0;

    // Recherche SIMD du prochain guillemet ou séparateur
    while let Some(offset) = memchr2(QUOTE, delimiter, &bytes[pos..]) {
        let idx = pos + offset;
        // Les octets ASCII sont toujours des frontières UTF-8 valides
        current.push_str(&line[pos..idx]);

        if bytes[idx] == QUOTE {
            in_quotes = !in_quotes;
        } else if in_quotes {
            current.push(delimiter as char);
        } else {
            values.push(std::mem::take(&mut current));
        }
        pos = idx + 1;
    }

    current.push_str(&line[pos..]);
    values.push(current);
    values
}
