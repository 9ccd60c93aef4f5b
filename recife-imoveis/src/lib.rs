//! # recife-imoveis
//!
//! Recherche en mémoire des imóveis municipaux du Recife, à partir de
//! l'export CSV publié sur le portail de données ouvertes.
//!
//! ## Features
//!
//! - Cache injectable du jeu de données (un téléchargement par processus,
//!   échecs non mis en cache)
//! - Recherche par coordonnée, identifiant, texte et rayon
//! - Résolution des clics de la carte en panneaux de détail
//! - Photos Google Places (optionnelles)
//! - Export GeoJSON
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use recife_imoveis::{Config, DatasetCache, HttpSource, ParcelQuery};
//!
//! recife_imoveis::config::load_env();
//! let config = Config::from_env();
//! let cache = Arc::new(DatasetCache::new(HttpSource::new(&config.csv_url)));
//! let query = ParcelQuery::new(cache);
//!
//! if let Some(imovel) = query.get_by_coordinates(-34.8711, -8.0631).await {
//!     println!("{} ({})", imovel.name, imovel.address);
//! }
//! ```

pub mod cache;
pub mod click;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod photos;
pub mod query;
pub mod report;
pub mod source;

pub use cache::{Dataset, DatasetCache, LoadOutcome};
pub use click::{ClickHandler, ClickOutcome, DetailPanel, MapClick, Selection};
pub use config::Config;
pub use error::LoadError;
pub use photos::PlacePhotos;
pub use query::ParcelQuery;
pub use report::{LoadReport, LoadStatus};
pub use source::{CsvSource, HttpSource, StaticSource};

pub use proprios::{ParcelRecord, ParcelStatus, ParcelType};
