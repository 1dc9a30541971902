// src/config.rs

use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const ADMIN_PASSWORD: &str = "2025";

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub gemini_endpoint: String,
    /// Carpeta donde vive el fichero de registros (solo nativo).
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("gemini_endpoint", &self.gemini_endpoint)
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl AppConfig {
    /// Construye la configuración a partir de una función de búsqueda de variables.
    /// Los valores vacíos cuentan como no definidos.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).and_then(normalize);
        let defaults = Self::default();

        Self {
            api_key: get("API_KEY"),
            model: get("FRIENDSHIP_QUIZ_MODEL").unwrap_or(defaults.model),
            gemini_endpoint: get("FRIENDSHIP_QUIZ_GEMINI_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_endpoint),
            data_dir: get("FRIENDSHIP_QUIZ_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // En la web no hay entorno: la clave se inyecta al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_KEY" => option_env!("API_KEY").map(str::to_string),
            "FRIENDSHIP_QUIZ_MODEL" => option_env!("FRIENDSHIP_QUIZ_MODEL").map(str::to_string),
            "FRIENDSHIP_QUIZ_GEMINI_ENDPOINT" => {
                option_env!("FRIENDSHIP_QUIZ_GEMINI_ENDPOINT").map(str::to_string)
            }
            _ => None,
        })
    }
}
