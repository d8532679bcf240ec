// src/config/mod.rs
// All values load from the environment (and .env, if present).
// Constructed once in main and passed down; nothing here is global.

use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct VivaConfig {
    // ── OpenAI Configuration
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub openai_timeout: u64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub request_timeout: u64,

    // ── CORS Settings
    pub cors_origin: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Values sourced from a .env file may carry trailing comments and
// whitespace; strip both before parsing.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl VivaConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists; a missing file just means
        // the process environment is the only source.
        let _ = dotenvy::dotenv();

        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com/v1".to_string()),
            model: env_var_or("OPENAI_MODEL", "gpt-4o-mini".to_string()),
            openai_timeout: env_var_or("VIVA_OPENAI_TIMEOUT", 30),
            host: env_var_or("VIVA_HOST", "0.0.0.0".to_string()),
            port: env_var_or("PORT", 3000),
            static_dir: env_var_or("VIVA_STATIC_DIR", "public".to_string()),
            request_timeout: env_var_or("VIVA_REQUEST_TIMEOUT", 30),
            cors_origin: env_var_or("VIVA_CORS_ORIGIN", "*".to_string()),
            log_level: env_var_or("VIVA_LOG_LEVEL", "info".to_string()),
        }
    }

    // --- Convenience Methods for Common Operations ---

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Credential display safe for logs: first/last characters and length
    /// only, never the key itself.
    pub fn masked_api_key(&self) -> String {
        match &self.openai_api_key {
            Some(key) if key.chars().count() > 8 => {
                let head: String = key.chars().take(4).collect();
                let tail: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
                format!("{}…{} (len={})", head, tail, key.chars().count())
            }
            Some(key) => format!("set (len={})", key.chars().count()),
            None => "<missing>".to_string(),
        }
    }
}
