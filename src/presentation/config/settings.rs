/// Process configuration, read from the environment once at startup.
///
/// Credentials are deliberately not validated here: a missing key surfaces
/// as a provider 401 when the route that needs it is first invoked.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub openai_api_key: String,
    pub openai_model: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            providers: ProviderSettings {
                openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                openai_model: std::env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4".to_string()),
                gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                gemini_model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
            },
        }
    }
}
