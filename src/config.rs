use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum: PracticumConfig,
    pub telegram: TelegramConfig,
    pub poll: PollConfig,
}

/// Status API access configuration
#[derive(Debug, Clone)]
pub struct PracticumConfig {
    pub token: String,
    pub endpoint: String,
}

/// Telegram delivery configuration
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
    pub api_base: String,
}

/// Poll loop timing configuration
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between poll cycles
    pub interval: Duration,
    /// Timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            practicum: PracticumConfig::from_env()?,
            telegram: TelegramConfig::from_env()?,
            poll: PollConfig::from_env(),
        })
    }
}

impl PracticumConfig {
    /// Load status API configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = required_var("PRACTICUM_TOKEN").ok_or(ConfigError::MissingPracticumToken)?;

        let endpoint = env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| {
            "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
        });

        if !is_http_url(&endpoint) {
            return Err(ConfigError::InvalidEndpoint);
        }

        Ok(Self { token, endpoint })
    }
}

impl TelegramConfig {
    /// Load Telegram configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = required_var("TELEGRAM_TOKEN").ok_or(ConfigError::MissingTelegramToken)?;
        let chat_id = required_var("TELEGRAM_CHAT_ID").ok_or(ConfigError::MissingChatId)?;

        let api_base =
            env::var("TELEGRAM_API_BASE").unwrap_or_else(|_| "https://api.telegram.org".to_string());

        if !is_http_url(&api_base) {
            return Err(ConfigError::InvalidTelegramApiBase);
        }

        Ok(Self {
            token,
            chat_id,
            api_base,
        })
    }
}

impl PollConfig {
    /// Load poll timing configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            interval: Duration::from_secs(
                env::var("POLL_INTERVAL_SECS")
                    .unwrap_or_else(|_| "600".to_string())
                    .parse()
                    .unwrap_or(600),
            ),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
        }
    }
}

/// Reads a required variable, treating an empty value as absent
fn required_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|parsed| parsed.scheme() == "http" || parsed.scheme() == "https")
        .unwrap_or(false)
}

#[derive(Debug)]
pub enum ConfigError {
    MissingPracticumToken,
    MissingTelegramToken,
    MissingChatId,
    InvalidEndpoint,
    InvalidTelegramApiBase,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingPracticumToken => {
                write!(f, "PRACTICUM_TOKEN environment variable is required")
            }
            ConfigError::MissingTelegramToken => {
                write!(f, "TELEGRAM_TOKEN environment variable is required")
            }
            ConfigError::MissingChatId => {
                write!(f, "TELEGRAM_CHAT_ID environment variable is required")
            }
            ConfigError::InvalidEndpoint => {
                write!(f, "PRACTICUM_ENDPOINT must be an HTTP(S) URL")
            }
            ConfigError::InvalidTelegramApiBase => {
                write!(f, "TELEGRAM_API_BASE must be an HTTP(S) URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
