//! Recherche spatiale dans l'espace des degrés
//!
//! Distance euclidienne plane sur (longitude, latitude) brutes, sans
//! correction géodésique : suffisant sur quelques kilomètres autour du
//! centre du Recife. Un index spatial (grille, R-tree) pourrait remplacer
//! le parcours linéaire derrière les mêmes fonctions.

use geo::{EuclideanDistance, Point};

use crate::types::ParcelRecord;

/// Seuil du plus proche voisin (~220 m à la latitude du Recife)
pub const NEAREST_THRESHOLD_DEG: f64 = 0.002;

/// Conversion approximative kilomètres → degrés
pub const KM_PER_DEGREE: f64 = 111.0;

/// Distance plane en degrés entre un imóvel et (lng, lat)
#[inline]
pub fn degree_distance(record: &ParcelRecord, lng: f64, lat: f64) -> f64 {
    record.point().euclidean_distance(&Point::new(lng, lat))
}

/// Imóvel le plus proche à moins de [`NEAREST_THRESHOLD_DEG`].
///
/// En cas d'égalité, le premier dans l'ordre du jeu de données gagne.
pub fn find_nearest(records: &[ParcelRecord], lng: f64, lat: f64) -> Option<(&ParcelRecord, f64)> {
    let mut nearest: Option<(&ParcelRecord, f64)> = None;

    for record in records {
        let distance = degree_distance(record, lng, lat);
        if distance < NEAREST_THRESHOLD_DEG && nearest.map_or(true, |(_, min)| distance < min) {
            nearest = Some((record, distance));
        }
    }

    nearest
}

/// Tous les imóveis à `radius_km` ou moins, dans l'ordre du jeu de données
pub fn find_within_radius(
    records: &[ParcelRecord],
    lng: f64,
    lat: f64,
    radius_km: f64,
) -> Vec<&ParcelRecord> {
    let radius_deg = radius_km / KM_PER_DEGREE;
    records
        .iter()
        .filter(|record| degree_distance(record, lng, lat) <= radius_deg)
        .collect()
}

/// Les `n` imóveis les plus proches, sans seuil (diagnostic)
pub fn closest(records: &[ParcelRecord], lng: f64, lat: f64, n: usize) -> Vec<(&ParcelRecord, f64)> {
    let mut by_distance: Vec<_> = records
        .iter()
        .map(|record| (record, degree_distance(record, lng, lat)))
        .collect();

    // tri stable : l'ordre du jeu de données départage les égalités
    by_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    by_distance.truncate(n);
    by_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParcelStatus, ParcelType};

    fn record(id: &str, lng: f64, lat: f64) -> ParcelRecord {
        ParcelRecord {
            id: id.to_string(),
            name: format!("Imóvel {id}"),
            address: String::new(),
            area: 0.0,
            price: None,
            description: String::new(),
            coordinates: (lng, lat),
            parcel_type: ParcelType::Public,
            status: ParcelStatus::Inactive,
            proprietario: String::new(),
            topografia: String::new(),
            edificacao_tipo: String::new(),
            conservacao_estado: String::new(),
            tributario_regime: String::new(),
            images: vec![],
            features: vec![],
        }
    }

    fn dataset() -> Vec<ParcelRecord> {
        vec![
            record("a", -34.8800, -8.0600),
            record("b", -34.8790, -8.0600),
            record("c", -34.8700, -8.0500),
        ]
    }

    #[test]
    fn test_find_nearest() {
        let records = dataset();
        let (found, distance) = find_nearest(&records, -34.8792, -8.0600).unwrap();
        assert_eq!(found.id, "b");
        assert!(distance < 0.0003);
    }

    #[test]
    fn test_find_nearest_outside_threshold() {
        let records = dataset();
        assert!(find_nearest(&records, -34.8850, -8.0600).is_none());
        assert!(find_nearest(&records, 0.0, 0.0).is_none());
        assert!(find_nearest(&[], -34.88, -8.06).is_none());
    }

    #[test]
    fn test_find_nearest_tie_keeps_first() {
        let records = vec![record("first", -34.8790, -8.06), record("second", -34.8790, -8.06)];
        let (found, _) = find_nearest(&records, -34.8800, -8.06).unwrap();
        assert_eq!(found.id, "first");
    }

    #[test]
    fn test_radius_contains_nearest() {
        let records = dataset();
        let radius_km = NEAREST_THRESHOLD_DEG * KM_PER_DEGREE;
        let (nearest, _) = find_nearest(&records, -34.8795, -8.0601).unwrap();
        let within = find_within_radius(&records, -34.8795, -8.0601, radius_km);
        assert!(within.iter().any(|r| r.id == nearest.id));
        assert_eq!(within.len(), 2);
    }

    #[test]
    fn test_radius_large_returns_all_in_order() {
        let records = dataset();
        let ids: Vec<_> = find_within_radius(&records, -34.88, -8.06, 10.0)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_closest() {
        let records = dataset();
        let ids: Vec<_> = closest(&records, -34.8701, -8.0501, 2)
            .iter()
            .map(|(r, _)| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b"]);
    }
}
