use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider_api_key: String,
    pub provider_model: Option<String>,
    pub provider_base_url: Option<String>,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from: String,
    pub history_db_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            provider_api_key: env::var("GROQ_API_KEY")
                .map_err(|e| format!("GROQ_API_KEY: {}", e))?,
            provider_model: env::var("GROQ_MODEL").ok(),
            provider_base_url: env::var("GROQ_BASE_URL").ok(),
            mail_api_url: env::var("MAIL_API_URL").map_err(|e| format!("MAIL_API_URL: {}", e))?,
            mail_api_key: env::var("MAIL_API_KEY").map_err(|e| format!("MAIL_API_KEY: {}", e))?,
            mail_from: env::var("MAIL_FROM").map_err(|e| format!("MAIL_FROM: {}", e))?,
            history_db_path: env::var("HISTORY_DB_PATH").ok(),
        })
    }
}
