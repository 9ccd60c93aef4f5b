//! Décodage du payload et découpage en lignes

use std::borrow::Cow;

use tracing::debug;

/// Décode le payload brut.
///
/// UTF-8 validé en SIMD ; si invalide, on retombe sur Windows-1252,
/// l'encodage habituel des exports des administrations brésiliennes.
pub fn decode(data: &[u8]) -> Cow<'_, str> {
    match simdutf8::basic::from_utf8(data) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!(bytes = data.len(), "Payload is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(data);
            decoded
        }
    }
}

/// Itère sur les lignes non vides avec leur numéro (à partir de 1).
///
/// Le numéro compte toutes les lignes physiques, vides comprises,
/// pour que les erreurs pointent la bonne ligne du fichier.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty())
}
