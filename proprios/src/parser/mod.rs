//! Parsing du CSV : payload, en-tête, lignes

pub mod header;
pub mod payload;
pub mod row;

pub use header::{Header, Row};
pub use row::{parse_row, DEFAULT_DELIMITER};
