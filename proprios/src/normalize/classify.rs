//! Classification par mots-clés du type et de la situation

use crate::types::{ParcelStatus, ParcelType};

/// Mots-clés par catégorie, évalués dans l'ordre ; la première qui matche gagne
const TYPE_KEYWORDS: &[(ParcelType, &[&str])] = &[
    (ParcelType::Residential, &["casa", "residencial", "apartamento"]),
    (
        ParcelType::Commercial,
        &["comercial", "loja", "escritorio", "edificacao"],
    ),
    (ParcelType::Industrial, &["industrial", "galpao", "fabrica"]),
];

const STATUS_KEYWORDS: &[(ParcelStatus, &[&str])] = &[
    (ParcelStatus::Active, &["ativo"]),
    (ParcelStatus::Disposed, &["alienado", "vendido"]),
];

/// Classe un type d'empreendimento ; `Public` par défaut
pub fn classify_type(raw: Option<&str>) -> ParcelType {
    classify(raw, TYPE_KEYWORDS)
}

/// Classe une situation ; `Inactive` par défaut.
///
/// Simple recherche de sous-chaîne : "inativo" contient "ativo".
pub fn classify_status(raw: Option<&str>) -> ParcelStatus {
    classify(raw, STATUS_KEYWORDS)
}

fn classify<T: Copy + Default>(raw: Option<&str>, table: &[(T, &[&str])]) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    let text = raw.to_lowercase();

    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}
