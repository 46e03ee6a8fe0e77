use std::env;

/// Shared credential the caller must present to reach any token operation.
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub api_key: String,
}

impl ApiKeyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("API_KEY")
                .unwrap_or_else(|_| "dev-api-key-change-in-production".to_string()),
        }
    }
}
