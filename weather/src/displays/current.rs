use std::{
    cell::{Ref, RefCell},
    io::Write,
};

use common::subject_observer::{NotifyResult, Observer};
use log::trace;

use super::DEFAULT_PRECISION;
use crate::{Reading, WeatherEvent, WeatherStation};

/// Prints the station's latest values on every broadcast. Keeps nothing
/// between notifications besides its output sink.
pub struct CurrentValueDisplay<W> {
    sink: RefCell<W>,
    precision: usize,
}

impl<W: Write> CurrentValueDisplay<W> {
    pub fn new(sink: W) -> Self {
        CurrentValueDisplay {
            sink: RefCell::new(sink),
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn render(&self, reading: Reading) -> String {
        format!(
            "Current temperature: {:.*}, current humidity: {:.*}%",
            self.precision, reading.temperature, self.precision, reading.humidity
        )
    }

    pub fn sink(&self) -> Ref<'_, W> {
        self.sink.borrow()
    }
}

impl<W: Write> Observer<WeatherStation, WeatherEvent> for CurrentValueDisplay<W> {
    fn update(&self, source: &WeatherStation, event: WeatherEvent) -> NotifyResult {
        let line = self.render(source.reading());
        trace!("Displaying current values after {event} update");
        writeln!(self.sink.borrow_mut(), "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use common::subject_observer::{Observer, ObserverError};

    use super::CurrentValueDisplay;
    use crate::{Reading, WeatherEvent, WeatherStation};

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render() {
        let display = CurrentValueDisplay::new(Vec::<u8>::new()).with_precision(1);

        let result = display.render(Reading {
            temperature: 21.1,
            humidity: 55.0,
        });

        assert_eq!("Current temperature: 21.1, current humidity: 55.0%", result);
        assert_eq!(
            "Current temperature: 21, current humidity: 55%",
            CurrentValueDisplay::new(Vec::<u8>::new())
                .with_precision(0)
                .render(Reading {
                    temperature: 21.0,
                    humidity: 55.0
                })
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        // Given
        let mut station = WeatherStation::new();
        station.set_temperature(18.5).unwrap();
        let display = CurrentValueDisplay::new(Vec::<u8>::new());

        // When
        display.update(&station, WeatherEvent::Temperature).unwrap();
        display.update(&station, WeatherEvent::Temperature).unwrap();

        // Then
        let output = String::from_utf8(display.sink().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(2, lines.len());
        assert_eq!(lines[0], lines[1], "Should print the same line for the same state");
        assert_eq!("Current temperature: 18.50, current humidity: 0.00%", lines[0]);
    }

    #[test]
    fn test_update_reports_write_failure() {
        let station = WeatherStation::new();
        let display = CurrentValueDisplay::new(BrokenSink);

        let result = display.update(&station, WeatherEvent::Humidity);

        assert!(
            matches!(result, Err(ObserverError::Output(ref err)) if err.kind() == io::ErrorKind::BrokenPipe),
            "Should surface sink errors"
        );
    }
}
