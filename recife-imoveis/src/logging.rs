//! Initialisation du logging pour les applications hôtes

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Niveau de log selon la verbosité (-v, -vv) et le mode silencieux
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    }
}

/// Installe le subscriber global ; sans effet s'il y en a déjà un
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level_for(verbose, quiet).into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
