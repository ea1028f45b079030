use anyhow::Result;
use dotenvy::dotenv;
use secrecy::Secret;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub cors: CorsConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

/// Vertex AI connection settings, handed to the Gemini provider at
/// construction. The provider never reads the environment itself.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// When false the application wires the mock provider instead.
    pub enabled: bool,
    /// GCP project that hosts the Vertex AI endpoint.
    pub project_id: String,
    /// Vertex AI region. Defaults to "asia-south1".
    pub location: String,
    /// Model variant to call. Defaults to "gemini-1.5-flash".
    pub model: String,
    /// OAuth bearer token for the endpoint.
    pub access_token: Secret<String>,
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let port = env::var("SUGGEST_SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let gemini_enabled = env::var("SUGGEST_GEMINI_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);
        // Cloud Run sets GOOGLE_CLOUD_PROJECT automatically
        let project_id = env::var("GCP_PROJECT")
            .or_else(|_| env::var("GOOGLE_CLOUD_PROJECT"))
            .unwrap_or_default();
        let location = env::var("GCP_REGION").unwrap_or_else(|_| "asia-south1".to_string());
        let model =
            env::var("SUGGEST_GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let access_token = env::var("GCP_ACCESS_TOKEN").unwrap_or_default();

        if gemini_enabled && project_id.is_empty() {
            anyhow::bail!(
                "GCP_PROJECT or GOOGLE_CLOUD_PROJECT must be set when the Gemini provider is enabled"
            );
        }
        if gemini_enabled && access_token.is_empty() {
            anyhow::bail!("GCP_ACCESS_TOKEN must be set when the Gemini provider is enabled");
        }

        let allowed_origins = env::var("SUGGEST_CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        let allow_credentials = env::var("SUGGEST_CORS_ALLOW_CREDENTIALS")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Self {
            server: ServerConfig { port },
            gemini: GeminiConfig {
                enabled: gemini_enabled,
                project_id,
                location,
                model,
                access_token: Secret::new(access_token),
            },
            cors: CorsConfig {
                allowed_origins,
                allow_credentials,
            },
        })
    }
}
