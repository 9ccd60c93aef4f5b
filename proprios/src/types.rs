//! Types de données pour le crate proprios

use geo::Point;
use serde::Serialize;

use crate::ParseError;

/// Valeur par défaut des champs texte absents de la source
pub const NOT_INFORMED: &str = "Não informado";

/// Valeur par défaut de l'adresse quand aucun composant n'est renseigné
pub const ADDRESS_NOT_INFORMED: &str = "Endereço não informado";

/// Un imóvel normalisé
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelRecord {
    /// Inscrição imobiliária, sequencial ou identifiant de repli (`recife_<n>`)
    pub id: String,
    pub name: String,
    pub address: String,

    /// Surface en m² (0 si non parsable)
    pub area: f64,

    /// Valeur vénale, absente si vide ou non numérique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    pub description: String,

    /// (longitude, latitude) en degrés WGS84
    pub coordinates: (f64, f64),

    #[serde(rename = "type")]
    pub parcel_type: ParcelType,
    pub status: ParcelStatus,
    pub proprietario: String,
    pub topografia: String,
    pub edificacao_tipo: String,
    pub conservacao_estado: String,
    pub tributario_regime: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
}

impl ParcelRecord {
    pub fn lng(&self) -> f64 {
        self.coordinates.0
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.1
    }

    /// Position en tant que point `geo` (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.coordinates.0, self.coordinates.1)
    }
}

/// Catégorie d'usage dérivée du type d'empreendimento
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelType {
    Residential,
    Commercial,
    Industrial,
    #[default]
    Public,
}

impl ParcelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Public => "public",
        }
    }
}

/// Situation administrative de l'imóvel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    Active,
    #[default]
    Inactive,
    Disposed,
}

impl ParcelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Disposed => "disposed",
        }
    }
}

/// Compteurs du parsing d'un payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lignes de données non vides (hors en-tête)
    pub rows_read: usize,
    /// Lignes ignorées pour nombre de champs incorrect
    pub malformed_rows: usize,
    /// Lignes ignorées faute de coordonnées
    pub rows_without_coordinates: usize,
    /// Identifiants dupliqués renommés avec un suffixe `#k`
    pub duplicate_ids: usize,
}

/// Résultat du parsing d'un payload complet
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Imóveis géolocalisés, dans l'ordre du fichier
    pub records: Vec<ParcelRecord>,

    /// En-têtes normalisés (minuscules, sans guillemets)
    pub headers: Vec<String>,

    pub stats: ParseStats,

    /// Erreurs non fatales rencontrées ligne par ligne
    pub errors: Vec<ParseError>,
}
