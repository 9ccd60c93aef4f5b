//! Gestion des clics sur la carte
//!
//! La couche bâtiments du fond de carte et le CSV sont deux sources
//! indépendantes : un clic est résolu par le plus proche voisin de sa
//! coordonnée, l'identifiant de feature n'est pas utilisé pour la jointure.

use std::sync::Arc;

use proprios::normalize::number::{format_currency_pt_br, format_pt_br};
use proprios::spatial;
use proprios::ParcelRecord;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::cache::{DatasetCache, LoadOutcome};
use crate::source::CsvSource;

/// Couche interactive des bâtiments 3D
pub const BUILDING_LAYER: &str = "3d-buildings";

/// Message affiché à l'utilisateur en cas d'échec, quelle que soit la cause
pub const USER_ERROR_MESSAGE: &str = "Erro ao carregar dados do imóvel";

/// Libellé du prix quand la valeur vénale est absente
pub const PRICE_ON_REQUEST: &str = "Sob consulta";

/// Nombre de voisins journalisés quand aucun imóvel n'est trouvé
const DEBUG_NEIGHBOURS: usize = 5;

/// Événement de clic émis par la carte
#[derive(Debug, Clone, PartialEq)]
pub struct MapClick {
    pub lng: f64,
    pub lat: f64,
    /// Couche de la première feature sous le curseur
    pub layer_id: Option<String>,
    /// Identifiant opaque de la feature (non utilisé pour la recherche)
    pub feature_id: Option<String>,
}

impl MapClick {
    pub fn on_building(lng: f64, lat: f64) -> Self {
        Self {
            lng,
            lat,
            layer_id: Some(BUILDING_LAYER.to_string()),
            feature_id: None,
        }
    }
}

/// Identifiant de sélection stable, basé sur la coordonnée arrondie à 1e-4°
pub fn selection_id(lng: f64, lat: f64) -> String {
    format!(
        "coord_{}_{}",
        round_half_up(lng * 10_000.0),
        round_half_up(lat * 10_000.0)
    )
}

/// Arrondi des demis vers +∞ (-2.5 donne -2), comme côté navigateur
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Vue du panneau de détail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub id: String,
    pub name: String,
    pub address: String,
    pub area: String,
    pub price: String,
    pub description: String,
    pub image: Option<String>,
    pub features: Vec<String>,
}

impl From<&ParcelRecord> for DetailPanel {
    fn from(record: &ParcelRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
            area: format!("{} m²", format_pt_br(record.area)),
            price: record
                .price
                .map(|p| format!("R$ {}", format_currency_pt_br(p)))
                .unwrap_or_else(|| PRICE_ON_REQUEST.to_string()),
            description: record.description.clone(),
            image: record.images.first().cloned(),
            features: record.features.clone(),
        }
    }
}

/// Sélection résultant d'un clic sur un bâtiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub selection_id: String,
    pub lng: f64,
    pub lat: f64,
    /// `None` si aucun imóvel sous le seuil de proximité
    pub panel: Option<DetailPanel>,
}

/// Résultat du traitement d'un clic
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Clic hors de la couche bâtiments
    Ignored,
    Selected(Selection),
    /// Données indisponibles ; seul le message générique est exposé
    Failed { message: &'static str },
}

/// Résout les clics de la carte en panneaux de détail
pub struct ClickHandler<S> {
    cache: Arc<DatasetCache<S>>,
}

impl<S: CsvSource> ClickHandler<S> {
    pub fn new(cache: Arc<DatasetCache<S>>) -> Self {
        Self { cache }
    }

    pub async fn handle(&self, click: &MapClick) -> ClickOutcome {
        if click.layer_id.as_deref() != Some(BUILDING_LAYER) {
            return ClickOutcome::Ignored;
        }

        let selection_id = selection_id(click.lng, click.lat);
        debug!(
            lng = click.lng,
            lat = click.lat,
            feature_id = ?click.feature_id,
            selection_id = %selection_id,
            "Building clicked"
        );

        let outcome = self.cache.load().await;
        if let LoadOutcome::Failed(cause) = &outcome {
            error!(error = %cause, selection_id = %selection_id, "Cannot resolve building click");
            return ClickOutcome::Failed {
                message: USER_ERROR_MESSAGE,
            };
        }

        let records = outcome.records();
        let panel = match spatial::find_nearest(records, click.lng, click.lat) {
            Some((record, distance)) => {
                info!(id = %record.id, name = %record.name, distance, "Record found for click");
                Some(DetailPanel::from(record))
            }
            None => {
                log_closest(records, click.lng, click.lat);
                None
            }
        };

        ClickOutcome::Selected(Selection {
            selection_id,
            lng: click.lng,
            lat: click.lat,
            panel,
        })
    }
}

fn log_closest(records: &[ParcelRecord], lng: f64, lat: f64) {
    debug!(lng, lat, total = records.len(), "No record near click");
    for (i, (record, distance)) in spatial::closest(records, lng, lat, DEBUG_NEIGHBOURS)
        .into_iter()
        .enumerate()
    {
        debug!(rank = i + 1, id = %record.id, name = %record.name, distance, "Closest record");
    }
}
