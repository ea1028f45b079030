use secrecy::Secret;
use std::sync::Arc;
use suggest_service::config::{Config, CorsConfig, GeminiConfig, ServerConfig};
use suggest_service::services::TextProvider;
use suggest_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the application with the echo mock provider.
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        Self::launch(app).await
    }

    /// Spawn the application with an explicit text provider.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), provider)
            .await
            .expect("Failed to build test application");

        Self::launch(app).await
    }

    async fn launch(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

/// Test configuration: random port, Gemini disabled so the mock provider is
/// selected.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig { port: 0 },
        gemini: GeminiConfig {
            enabled: false,
            project_id: "test-project".to_string(),
            location: "asia-south1".to_string(),
            model: "gemini-1.5-flash".to_string(),
            access_token: Secret::new("test-token".to_string()),
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        },
    }
}
