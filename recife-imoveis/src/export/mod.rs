//! Modules d'export

pub mod geojson;

pub use geojson::{export_to_geojson, write_feature_collection};
