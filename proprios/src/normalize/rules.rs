//! Tables de dérivation des champs synthétisés
//!
//! Chaque champ dérivé est une liste ordonnée de règles nommées ; la
//! première qui produit une valeur l'emporte.

use crate::normalize::columns as col;
use crate::normalize::number::{format_pt_br, parse_positive, parse_prefix};
use crate::parser::Row;
use crate::types::ParcelType;

/// Règle de dérivation : nom (pour les tests et le debug) + extracteur
pub struct Rule<T> {
    pub name: &'static str,
    pub apply: fn(&Row) -> Option<T>,
}

/// Évalue les règles dans l'ordre, retourne la première valeur et le nom de la règle
pub fn first_match<T>(rules: &[Rule<T>], row: &Row) -> Option<(&'static str, T)> {
    rules
        .iter()
        .find_map(|rule| (rule.apply)(row).map(|value| (rule.name, value)))
}

pub const PROVENANCE: &str = "Dados oficiais da Prefeitura do Recife.";
pub const DEFAULT_NAME: &str = "Imóvel Municipal";
const DEFAULT_STREET_IN_NAME: &str = "Centro";

pub const NAME_RULES: &[Rule<String>] = &[
    Rule {
        name: "building_name",
        apply: |row| row.get(col::NOME_EDIFICACAO).map(str::to_string),
    },
    Rule {
        name: "development_type_and_street",
        apply: |row| {
            let tipo = row.first_of(col::DEVELOPMENT_TYPE)?;
            let street = row.get(col::LOGRADOURO).unwrap_or(DEFAULT_STREET_IN_NAME);
            Some(format!("{tipo} - {street}"))
        },
    },
    Rule {
        name: "street",
        apply: |row| row.get(col::LOGRADOURO).map(|s| format!("Imóvel em {s}")),
    },
    Rule {
        name: "sequence",
        apply: |row| row.get(col::SEQUENCIAL).map(|s| format!("Imóvel {s}")),
    },
    Rule {
        name: "default",
        apply: |_| Some(DEFAULT_NAME.to_string()),
    },
];

pub const AREA_RULES: &[Rule<f64>] = &[
    Rule {
        name: "constructed_simple",
        apply: |row| row.get(col::AREA_CONSTRUIDA_SIMPLES).and_then(parse_positive),
    },
    Rule {
        name: "constructed_multiple",
        apply: |row| row.get(col::AREA_CONSTRUIDA_MULTIPLA).and_then(parse_positive),
    },
    Rule {
        name: "lot",
        apply: |row| row.get(col::AREA_LOTE).and_then(parse_positive),
    },
];

/// Clauses de la description, dans l'ordre ; la provenance est ajoutée à la fin
pub const DESCRIPTION_CLAUSES: &[Rule<String>] = &[
    Rule {
        name: "name",
        apply: |row| row.get(col::NOME_EDIFICACAO).map(|v| format!("Nome: {v}")),
    },
    Rule {
        name: "location",
        apply: |row| row.get(col::LOGRADOURO).map(|v| format!("Localizado em: {v}")),
    },
    Rule {
        name: "constructed_area",
        apply: |row| {
            row.first_of(col::CONSTRUCTED_AREA)
                .map(|v| format!("Área construída: {v} m²"))
        },
    },
    Rule {
        name: "development_type",
        apply: |row| row.first_of(col::DEVELOPMENT_TYPE).map(|v| format!("Tipo: {v}")),
    },
    Rule {
        name: "condition",
        apply: |row| {
            row.get(col::CONSERVACAO)
                .map(|v| format!("Estado de conservação: {v}"))
        },
    },
    Rule {
        name: "tax_regime",
        apply: |row| {
            row.get(col::REGIME_TRIBUTARIO)
                .map(|v| format!("Regime tributário: {v}"))
        },
    },
];

/// Caractéristiques issues des attributs, dans l'ordre
pub const FEATURE_RULES: &[Rule<String>] = &[
    Rule {
        name: "topography",
        apply: |row| row.get(col::TOPOGRAFIA).map(|v| format!("Topografia: {v}")),
    },
    Rule {
        name: "condition",
        apply: |row| row.get(col::CONSERVACAO).map(|v| format!("Conservação: {v}")),
    },
    Rule {
        name: "tax_regime",
        apply: |row| row.get(col::REGIME_TRIBUTARIO).map(|v| format!("Regime: {v}")),
    },
    Rule {
        name: "constructed_area",
        apply: |row| row.first_of(col::CONSTRUCTED_AREA).map(|v| format!("Área: {v}m²")),
    },
    Rule {
        name: "assessed_value",
        apply: |row| {
            row.get(col::VALOR_VENAL)
                .and_then(parse_prefix)
                .map(|v| format!("Valor venal: R$ {}", format_pt_br(v)))
        },
    },
    Rule {
        name: "construction_year",
        apply: |row| row.get(col::ANO_CONSTRUCAO).map(|v| format!("Ano construção: {v}")),
    },
];

/// Tags de localisation : (colonne, sous-chaîne, tag)
pub const LOCATION_TAGS: &[(&str, &str, &str)] = &[
    (col::BAIRRO, "centro", "Centro Histórico"),
    (col::LOGRADOURO, "porto", "Próximo ao Porto"),
    (col::LOGRADOURO, "mar", "Vista para o mar"),
];

/// Évalue toutes les règles (et non la première seulement)
pub fn all_matches(rules: &[Rule<String>], row: &Row) -> Vec<String> {
    rules.iter().filter_map(|rule| (rule.apply)(row)).collect()
}

pub fn location_tags(row: &Row) -> impl Iterator<Item = String> + '_ {
    LOCATION_TAGS.iter().filter_map(move |(column, needle, tag)| {
        row.get(column)
            .filter(|v| v.to_lowercase().contains(needle))
            .map(|_| tag.to_string())
    })
}

const IMAGE_RESIDENTIAL: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=400";
const IMAGE_COMMERCIAL: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400";
const IMAGE_INDUSTRIAL: &str = "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=400";
const IMAGE_PUBLIC: &str = "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400";
pub const IMAGE_LARGE: &str = "https://images.unsplash.com/photo-1497366216548-37526070297c?w=400";

/// Surface construite au-delà de laquelle une seconde image est ajoutée
pub const LARGE_AREA_M2: f64 = 500.0;

pub fn placeholder_image(parcel_type: ParcelType) -> &'static str {
    match parcel_type {
        ParcelType::Residential => IMAGE_RESIDENTIAL,
        ParcelType::Commercial => IMAGE_COMMERCIAL,
        ParcelType::Industrial => IMAGE_INDUSTRIAL,
        ParcelType::Public => IMAGE_PUBLIC,
    }
}

pub fn images(parcel_type: ParcelType, row: &Row) -> Vec<String> {
    let mut images = vec![placeholder_image(parcel_type).to_string()];

    let constructed = first_match(&AREA_RULES[..2], row).map(|(_, area)| area);
    if constructed.is_some_and(|area| area > LARGE_AREA_M2) {
        images.push(IMAGE_LARGE.to_string());
    }
    images
}
