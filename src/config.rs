use std::env;
use std::path::PathBuf;

use teloxide::types::ChatId;

/// Запасной идентификатор админа, если ADMIN_ID не задан.
const DEFAULT_ADMIN_ID: i64 = 191598071;
const DEFAULT_BOOKINGS_FILE: &str = "bookings.csv";

#[derive(Debug)]
pub enum ConfigError {
    MissingBotToken,
    InvalidAdminId(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingBotToken => write!(f, "BOT_TOKEN must be set"),
            ConfigError::InvalidAdminId(v) => write!(f, "ADMIN_ID is not a number: {}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub admin_chat: ChatId,
    pub bookings_file: PathBuf,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingBotToken)?;

        let admin_chat = match env::var("ADMIN_ID") {
            Ok(raw) => ChatId(
                raw.parse::<i64>()
                    .map_err(|_| ConfigError::InvalidAdminId(raw))?,
            ),
            Err(_) => ChatId(DEFAULT_ADMIN_ID),
        };

        let bookings_file = env::var("BOOKINGS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOKINGS_FILE));

        Ok(Self {
            bot_token,
            admin_chat,
            bookings_file,
        })
    }
}
