//! Configuration du service (variables d'environnement, `.env`)

/// Export CSV des próprios municipaux publié par la Prefeitura do Recife
pub const DEFAULT_CSV_URL: &str = "http://dados.recife.pe.gov.br/dataset/c97d4314-e756-464a-ad86-38759d4c75b5/resource/8a85caee-af0f-4931-8ae0-ea1fa918696b/download/proprios.csv";

/// Variables lues par [`Config::from_env`]
pub const ENV_CSV_URL: &str = "RECIFE_CSV_URL";
pub const ENV_PLACES_KEY: &str = "GOOGLE_PLACES_API_KEY";
pub const ENV_PLACES_KEY_LEGACY: &str = "NEXT_PUBLIC_GOOGLE_PLACES_API_KEY";

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL de la ressource CSV
    pub csv_url: String,

    /// Clé Google Places (optionnelle : sans clé, pas de photos)
    pub places_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_CSV_URL.into(),
            places_api_key: None,
        }
    }
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Charge la configuration depuis une fonction de lecture (tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            csv_url: non_empty(ENV_CSV_URL).unwrap_or_else(|| DEFAULT_CSV_URL.into()),
            places_api_key: non_empty(ENV_PLACES_KEY).or_else(|| non_empty(ENV_PLACES_KEY_LEGACY)),
        }
    }
}

/// Charge `.env` depuis le répertoire courant, sinon depuis celui du binaire
pub fn load_env() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(config.csv_url.ends_with("proprios.csv"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_CSV_URL, "http://127.0.0.1:8080/proprios.csv"),
            (ENV_PLACES_KEY_LEGACY, "legacy-key"),
        ]));
        assert_eq!(config.csv_url, "http://127.0.0.1:8080/proprios.csv");
        assert_eq!(config.places_api_key.as_deref(), Some("legacy-key"));
    }

    #[test]
    fn test_primary_key_wins_and_blank_is_absent() {
        let config = Config::from_lookup(lookup(&[
            (ENV_PLACES_KEY, "primary"),
            (ENV_PLACES_KEY_LEGACY, "legacy"),
        ]));
        assert_eq!(config.places_api_key.as_deref(), Some("primary"));

        let config = Config::from_lookup(lookup(&[(ENV_PLACES_KEY, "  ")]));
        assert_eq!(config.places_api_key, None);
    }
}
