use anyhow::{bail, Result};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_PORT: u16 = 8080;

/// Process-wide settings, read once at startup.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    /// Reads the environment (and `.env`, if present).
    ///
    /// The credential is the platform secret `OPENAI`; `OPENAI_API_KEY` is
    /// accepted for local runs.
    pub fn from_env() -> Result<Self> {
        let api_key = dotenvy::var("OPENAI")
            .or_else(|_| dotenvy::var("OPENAI_API_KEY"))
            .unwrap_or_default();
        if api_key.trim().is_empty() {
            bail!("missing OpenAI credential: set OPENAI or OPENAI_API_KEY");
        }

        let api_url =
            dotenvy::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = dotenvy::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let host = dotenvy::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = dotenvy::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_key: api_key.trim().to_string(),
            api_url,
            model,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
