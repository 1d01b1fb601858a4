use std::collections::HashSet;

use chrono::NaiveTime;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    entities::{BotConfig, ChatId, UserId, DEFAULT_CURRENCIES},
    errors::InvalidConfig,
};

/// On-disk (RON) shape of the configuration.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct BotConfigModel {
    main_chat_id: i64,
    summary_chat_id: i64,
    #[serde(default)]
    admin_user_ids: Vec<i64>,
    #[serde(default = "default_currency_codes")]
    currencies: Vec<String>,
    database_path: String,
    #[serde(default)]
    daily_summary_at: Option<String>,
    #[serde(default)]
    bot_username: Option<String>,
}

fn default_currency_codes() -> Vec<String> {
    DEFAULT_CURRENCIES
        .iter()
        .map(|c| c.code().to_string())
        .collect()
}

impl BotConfigModel {
    pub(crate) fn into_config(self) -> Result<BotConfig, ServerError> {
        if self.currencies.is_empty() {
            return Err(InvalidConfig::new("at least one currency must be accepted"));
        }
        let mut currencies: Vec<Currency> = Vec::with_capacity(self.currencies.len());
        for code in &self.currencies {
            let currency = Currency::from_code(code.trim()).ok_or_else(|| {
                InvalidConfig::new(&format!("unknown currency code '{}'", code))
            })?;
            if !currencies.contains(&currency) {
                currencies.push(currency);
            }
        }

        if self.database_path.trim().is_empty() {
            return Err(InvalidConfig::new("database_path must not be empty"));
        }

        let daily_summary_at = self
            .daily_summary_at
            .as_deref()
            .map(|s| {
                NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| {
                    InvalidConfig::with_debug(
                        &format!("daily_summary_at '{}' is not HH:MM", s),
                        &e,
                    )
                })
            })
            .transpose()?;

        Ok(BotConfig {
            main_chat_id: ChatId(self.main_chat_id),
            summary_chat_id: ChatId(self.summary_chat_id),
            admin_user_ids: self.admin_user_ids.into_iter().map(UserId).collect::<HashSet<_>>(),
            currencies,
            database_path: self.database_path.into(),
            daily_summary_at,
            bot_username: self
                .bot_username
                .map(|u| u.trim().trim_start_matches('@').to_string())
                .filter(|u| !u.is_empty()),
        })
    }
}
