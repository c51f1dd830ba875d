use std::{io::Write, rc::Rc};

use common::subject_observer::Subject;
use log::debug;
use weather::{
    displays::{CurrentValueDisplay, RunningAverageDisplay},
    WeatherStation,
};

use crate::{
    config::app::{AppConfig, DisplayKind, ReadingKind},
    AppError,
};

pub struct Replay<W> {
    pub station: WeatherStation,
    pub current_displays: Vec<Rc<CurrentValueDisplay<W>>>,
    pub average_displays: Vec<Rc<RunningAverageDisplay<W>>>,
}

/// Registers the configured displays in order, each writing to a fresh sink,
/// then publishes every configured reading through the matching setter.
pub fn replay<W, F>(config: &AppConfig, mut new_sink: F) -> Result<Replay<W>, AppError>
where
    W: Write + 'static,
    F: FnMut() -> W,
{
    let mut station = WeatherStation::new();
    let mut current_displays = vec![];
    let mut average_displays = vec![];

    for &kind in &config.displays {
        match kind {
            DisplayKind::Current => {
                let display =
                    Rc::new(CurrentValueDisplay::new(new_sink()).with_precision(config.precision));
                station.register_observer(display.clone());
                current_displays.push(display);
            }
            DisplayKind::Average => {
                let display = Rc::new(
                    RunningAverageDisplay::new(new_sink()).with_precision(config.precision),
                );
                station.register_observer(display.clone());
                average_displays.push(display);
            }
        }
        debug!("Registered {kind} display");
    }

    for reading in &config.readings {
        debug!("Replaying {} reading {}", reading.kind, reading.value);
        match reading.kind {
            ReadingKind::Temperature => station.set_temperature(reading.value)?,
            ReadingKind::Humidity => station.set_humidity(reading.value)?,
        }
    }

    Ok(Replay {
        station,
        current_displays,
        average_displays,
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::replay;
    use crate::{
        config::app::{AppConfig, DisplayKind, ReadingConfig, ReadingKind},
        AppError,
    };

    fn settings(displays: Vec<DisplayKind>, readings: Vec<(ReadingKind, f64)>) -> AppConfig {
        AppConfig {
            precision: 1,
            displays,
            readings: readings
                .into_iter()
                .map(|(kind, value)| ReadingConfig { kind, value })
                .collect(),
        }
    }

    fn lines(output: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(output)
            .lines()
            .map(str::to_string)
            .collect()
    }

    struct ClosedSink;

    impl io::Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_replay_weather_readings() {
        // Given
        let config = settings(
            vec![DisplayKind::Current, DisplayKind::Average],
            vec![
                (ReadingKind::Temperature, 21.0),
                (ReadingKind::Humidity, 55.0),
                (ReadingKind::Temperature, 21.1),
                (ReadingKind::Temperature, 21.3),
            ],
        );

        // When
        let result = replay(&config, Vec::<u8>::new).unwrap();

        // Then
        assert_eq!(2, result.station.observer_count());
        let current = &result.current_displays[0];
        assert_eq!(
            vec![
                "Current temperature: 21.0, current humidity: 0.0%",
                "Current temperature: 21.0, current humidity: 55.0%",
                "Current temperature: 21.1, current humidity: 55.0%",
                "Current temperature: 21.3, current humidity: 55.0%",
            ],
            lines(&current.sink())
        );
        let average = &result.average_displays[0];
        assert_eq!(Some((21.0 + 21.1 + 21.3) / 3.0), average.temperature().mean());
        assert_eq!(Some(55.0), average.humidity().mean());
        assert_eq!(4, average.notifications());
    }

    #[test]
    fn test_replay_registers_displays_in_configured_order() {
        let config = settings(
            vec![DisplayKind::Average, DisplayKind::Average, DisplayKind::Current],
            vec![(ReadingKind::Humidity, 40.0)],
        );

        let result = replay(&config, Vec::<u8>::new).unwrap();

        assert_eq!(3, result.station.observer_count());
        assert_eq!(2, result.average_displays.len());
        assert!(result
            .average_displays
            .iter()
            .all(|display| display.notifications() == 1));
        assert_eq!(1, lines(&result.current_displays[0].sink()).len());
    }

    #[test]
    fn test_replay_stops_on_broadcast_failure() {
        let config = settings(
            vec![DisplayKind::Current],
            vec![(ReadingKind::Temperature, 1.0)],
        );

        let result = replay(&config, || ClosedSink);

        assert!(
            matches!(result, Err(AppError::Broadcast(_))),
            "Should report the failing display"
        );
    }
}
