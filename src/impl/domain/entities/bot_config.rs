use std::{collections::HashSet, path::PathBuf};

use chrono::NaiveTime;
use iso_currency::Currency;

use super::chat::{ChatId, UserId};

/// Currencies recognized when no explicit set is configured.
pub const DEFAULT_CURRENCIES: [Currency; 2] = [Currency::USD, Currency::KHR];

/// Process-wide settings: the fixed source/sink topology, the administrative
/// allow-list and the closed set of accepted currencies.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Only messages from this chat are treated as payment notifications.
    pub main_chat_id: ChatId,
    /// Reports and administrative notices are published here.
    pub summary_chat_id: ChatId,
    pub admin_user_ids: HashSet<UserId>,
    pub currencies: Vec<Currency>,
    pub database_path: PathBuf,
    /// Local time at which the daily summary is published, if enabled.
    pub daily_summary_at: Option<NaiveTime>,
    /// Commands mentioning any other bot (`/clear@other_bot`) are ignored.
    pub bot_username: Option<String>,
}

// --

impl BotConfig {
    pub fn new(
        main_chat_id: ChatId,
        summary_chat_id: ChatId,
        database_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            main_chat_id,
            summary_chat_id,
            admin_user_ids: HashSet::new(),
            currencies: DEFAULT_CURRENCIES.to_vec(),
            database_path: database_path.into(),
            daily_summary_at: None,
            bot_username: None,
        }
    }

    pub fn with_admins(mut self, admins: impl IntoIterator<Item = UserId>) -> Self {
        self.admin_user_ids.extend(admins);
        self
    }

    pub fn with_currencies(mut self, currencies: impl IntoIterator<Item = Currency>) -> Self {
        self.currencies = currencies.into_iter().collect();
        self
    }

    pub fn with_daily_summary_at(mut self, at: NaiveTime) -> Self {
        self.daily_summary_at = Some(at);
        self
    }

    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.admin_user_ids.contains(&user_id)
    }
}
