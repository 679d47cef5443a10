use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub guide_api_url: String,
    pub guide_api_key: String,
    pub guide_model: String,
    pub listen_address: String,
}

static DEFAULT_GUIDE_MODEL: &str = "qwen-turbo";
static DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";

fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Err(ConfigError::MissingEnvVar(name.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: "value is not valid UTF-8".to_string(),
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            guide_api_url: required_var("GUIDE_API_URL")?,
            guide_api_key: required_var("GUIDE_API_KEY")?,
            guide_model: std::env::var("GUIDE_MODEL")
                .unwrap_or_else(|_| DEFAULT_GUIDE_MODEL.to_string()),
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string()),
        })
    }
}
