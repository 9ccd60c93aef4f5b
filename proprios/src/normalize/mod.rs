//! Normalisation d'une ligne en [`ParcelRecord`]

pub mod classify;
pub mod columns;
pub mod number;
pub mod rules;

use crate::parser::Row;
use crate::types::{ParcelRecord, ADDRESS_NOT_INFORMED, NOT_INFORMED};
use crate::ParseError;

use self::columns as col;
use self::number::{parse_positive, parse_prefix};
use self::rules::{all_matches, first_match, location_tags, DEFAULT_NAME, PROVENANCE};

pub use classify::{classify_status, classify_type};

/// Normalise une ligne.
///
/// `sequence` est le nombre d'imóveis déjà retenus dans ce chargement ;
/// il sert à l'identifiant de repli `recife_<sequence>`.
///
/// Retourne `MissingCoordinates` si la ligne n'est pas géolocalisable.
pub fn normalize(row: &Row, sequence: usize) -> Result<ParcelRecord, ParseError> {
    let (lng, lat) = coordinates(row).ok_or(ParseError::MissingCoordinates { line: row.line() })?;

    let parcel_type = classify_type(row.first_of(col::DEVELOPMENT_TYPE));

    Ok(ParcelRecord {
        id: row
            .first_of(&[col::INSCRICAO, col::SEQUENCIAL])
            .map(str::to_string)
            .unwrap_or_else(|| format!("recife_{sequence}")),
        name: first_match(rules::NAME_RULES, row)
            .map(|(_, name)| name)
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        address: address(row),
        area: first_match(rules::AREA_RULES, row)
            .map(|(_, area)| area)
            .unwrap_or(0.0),
        price: row.get(col::VALOR_VENAL).and_then(parse_positive),
        description: description(row),
        coordinates: (lng, lat),
        parcel_type,
        status: classify_status(row.get(col::SITUACAO)),
        proprietario: or_not_informed(row.get(col::PROPRIETARIO)),
        topografia: or_not_informed(row.get(col::TOPOGRAFIA)),
        edificacao_tipo: or_not_informed(row.first_of(col::DEVELOPMENT_TYPE)),
        conservacao_estado: or_not_informed(row.get(col::CONSERVACAO)),
        tributario_regime: or_not_informed(row.get(col::REGIME_TRIBUTARIO)),
        images: rules::images(parcel_type, row),
        features: features(row),
    })
}

/// (longitude, latitude) si les deux sont des nombres finis non nuls.
/// La source stocke latitude puis longitude ; on réordonne ici.
fn coordinates(row: &Row) -> Option<(f64, f64)> {
    let parse = |column| {
        row.get(column)
            .and_then(parse_prefix)
            .filter(|v| *v != 0.0)
    };
    let lat = parse(col::LATITUDE)?;
    let lng = parse(col::LONGITUDE)?;
    Some((lng, lat))
}

fn address(row: &Row) -> String {
    let parts: Vec<&str> = col::ADDRESS_PARTS
        .iter()
        .filter_map(|c| row.get(c))
        .collect();

    if parts.is_empty() {
        ADDRESS_NOT_INFORMED.to_string()
    } else {
        parts.join(", ")
    }
}

fn description(row: &Row) -> String {
    let mut clauses = all_matches(rules::DESCRIPTION_CLAUSES, row);
    clauses.push(PROVENANCE.to_string());
    clauses.join(". ")
}

fn features(row: &Row) -> Vec<String> {
    let mut features = all_matches(rules::FEATURE_RULES, row);
    features.extend(location_tags(row));
    features
}

fn or_not_informed(value: Option<&str>) -> String {
    value.unwrap_or(NOT_INFORMED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParcelStatus, ParcelType};

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::from_pairs(7, pairs.iter().copied())
    }

    #[test]
    fn test_minimal_row() {
        let r = row(&[
            ("inscricaoImobiliaria", "12345"),
            ("latitude", "-8.06"),
            ("longitude", "-34.88"),
            ("tipoEmpreendimentoSimples", "Comercial"),
            ("situacao", "ativo"),
        ]);
        let record = normalize(&r, 0).unwrap();

        assert_eq!(record.id, "12345");
        assert_eq!(record.coordinates, (-34.88, -8.06));
        assert_eq!(record.parcel_type, ParcelType::Commercial);
        assert_eq!(record.status, ParcelStatus::Active);
        assert_eq!(record.name, "Comercial - Centro");
        assert_eq!(record.address, ADDRESS_NOT_INFORMED);
        assert_eq!(record.area, 0.0);
        assert_eq!(record.price, None);
        assert_eq!(record.proprietario, NOT_INFORMED);
        assert_eq!(record.edificacao_tipo, "Comercial");
        assert_eq!(
            record.description,
            "Tipo: Comercial. Dados oficiais da Prefeitura do Recife."
        );
        assert_eq!(record.images.len(), 1);
        assert!(record.features.is_empty());
    }

    #[test]
    fn test_full_row() {
        let r = row(&[
            ("sequencialImovel", "42"),
            ("latitude", "-8.0631"),
            ("longitude", "-34.8711"),
            ("nomeEdificacaoMultipla", "Mercado de São José"),
            ("enderecoImovelNomeLogradouro", "Praça Dom Vital"),
            ("enderecoImovelNumero", "S/N"),
            ("enderecoImovelBairro", "São José"),
            ("enderecoImovelMunicipio", "Recife"),
            ("enderecoImovelEstado", "PE"),
            ("areaTotalConstruidaSimples", "3541.2"),
            ("valorVenal", "2500000"),
            ("estadoConservacaoSimples", "Regular"),
            ("regimeTributacaoIPTU", "Imune"),
            ("proprietarioPrincipal", "Prefeitura do Recife"),
        ]);
        let record = normalize(&r, 3).unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.name, "Mercado de São José");
        assert_eq!(record.address, "Praça Dom Vital, S/N, São José, Recife, PE");
        assert_eq!(record.area, 3541.2);
        assert_eq!(record.price, Some(2_500_000.0));
        assert_eq!(record.proprietario, "Prefeitura do Recife");
        assert_eq!(record.parcel_type, ParcelType::Public);
        assert_eq!(record.status, ParcelStatus::Inactive);
        assert_eq!(
            record.description,
            "Nome: Mercado de São José. Localizado em: Praça Dom Vital. \
             Área construída: 3541.2 m². Estado de conservação: Regular. \
             Regime tributário: Imune. Dados oficiais da Prefeitura do Recife."
        );
        assert_eq!(record.images.len(), 2);
        assert_eq!(
            record.features,
            vec![
                "Conservação: Regular",
                "Regime: Imune",
                "Área: 3541.2m²",
                "Valor venal: R$ 2.500.000",
            ]
        );
    }

    #[test]
    fn test_fallback_id_uses_sequence() {
        let r = row(&[("latitude", "-8.06"), ("longitude", "-34.88")]);
        assert_eq!(normalize(&r, 9).unwrap().id, "recife_9");
    }

    #[test]
    fn test_missing_coordinates() {
        for (lat, lng) in [("0", "-34.88"), ("-8.06", ""), ("abc", "-34.88"), ("-8.06", "0.0")] {
            let r = row(&[("latitude", lat), ("longitude", lng)]);
            assert_eq!(
                normalize(&r, 0).unwrap_err(),
                ParseError::MissingCoordinates { line: 7 }
            );
        }
    }

    #[test]
    fn test_non_positive_price_is_absent() {
        let r = row(&[("latitude", "-8.06"), ("longitude", "-34.88"), ("valorVenal", "0")]);
        assert_eq!(normalize(&r, 0).unwrap().price, None);
    }
}
