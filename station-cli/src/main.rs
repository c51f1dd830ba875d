mod config;
mod replay;

use std::{env, io, path::PathBuf};

use anyhow::Context;
use common::subject_observer::ObserverError;
use log::info;
use thiserror::Error;

use crate::{config::app::AppConfig, replay::replay};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to read configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Broadcast aborted: {0}")]
    Broadcast(#[from] ObserverError),
}

fn main() -> anyhow::Result<()> {
    config::log::init().context("Unable to initialize logger")?;

    let path = env::args().nth(1).map(PathBuf::from);
    let settings = AppConfig::load(path.as_deref()).context("Unable to load configuration")?;
    info!(
        "Replaying {} readings through {} displays",
        settings.readings.len(),
        settings.displays.len()
    );

    let replay = replay(&settings, io::stdout)?;
    let reading = replay.station.reading();
    info!(
        "Replay done with {} current and {} average displays: temperature={}, humidity={}",
        replay.current_displays.len(),
        replay.average_displays.len(),
        reading.temperature,
        reading.humidity
    );
    for average in &replay.average_displays {
        info!("{}", average.render());
    }
    Ok(())
}
