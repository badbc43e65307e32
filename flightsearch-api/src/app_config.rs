use chrono::NaiveDate;
use flightsearch_core::date::parse_travel_date;
use flightsearch_core::{Clock, CoreError, CoreResult, FixedClock, SystemClock};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    pub fixed_date: Option<String>, // DD/MM/YYYY
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FLIGHTSEARCH").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn fixed_date(&self) -> CoreResult<Option<NaiveDate>> {
        match self.search.fixed_date.as_deref() {
            None => Ok(None),
            Some(text) => parse_travel_date(Some(text))
                .map(Some)
                .ok_or_else(|| CoreError::Config(format!("search.fixed_date {:?} is not a DD/MM/YYYY date", text))),
        }
    }

    pub fn clock(&self) -> CoreResult<Box<dyn Clock>> {
        Ok(match self.fixed_date()? {
            Some(date) => {
                tracing::warn!("Search clock pinned to {}", date);
                Box::new(FixedClock(date))
            }
            None => Box::new(SystemClock),
        })
    }
}
