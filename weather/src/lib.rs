pub mod displays;
mod station;

pub use station::{Reading, WeatherStation};

/// Field published by a station broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WeatherEvent {
    Temperature,
    Humidity,
}
