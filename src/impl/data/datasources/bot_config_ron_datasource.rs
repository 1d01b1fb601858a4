use std::fs;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::bot_config_model::BotConfigModel,
    entities::BotConfig,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait BotConfigDatasource {
    fn from_string(&self, s: &str) -> Result<BotConfig, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<BotConfig, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct BotConfigRonDatasourceImpl;

impl BotConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl BotConfigDatasource for BotConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<BotConfig, ServerError> {
        let model: BotConfigModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("BotConfig", &e))?;
        model.into_config()
    }

    fn from_file<P>(&self, path: P) -> Result<BotConfig, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
