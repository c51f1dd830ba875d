use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayKind {
    Current,
    Average,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReadingKind {
    Temperature,
    Humidity,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReadingConfig {
    pub kind: ReadingKind,
    pub value: f64,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(range(max = 6))]
    pub precision: usize,
    pub displays: Vec<DisplayKind>,
    #[serde(default)]
    pub readings: Vec<ReadingConfig>,
}

impl AppConfig {
    /// Layers the embedded defaults, the optional TOML file, then `APP_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let config: AppConfig = builder
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
