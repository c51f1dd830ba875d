use std::{
    cell::{Cell, Ref, RefCell},
    io::Write,
};

use common::subject_observer::{NotifyResult, Observer};
use log::trace;

use super::{RunningMean, DEFAULT_PRECISION};
use crate::{WeatherEvent, WeatherStation};

/// Accumulates published values and prints their running means.
///
/// A temperature broadcast feeds the temperature mean only, a humidity
/// broadcast the humidity mean only. `notifications` counts every update
/// this display received.
pub struct RunningAverageDisplay<W> {
    sink: RefCell<W>,
    precision: usize,
    temperature: Cell<RunningMean>,
    humidity: Cell<RunningMean>,
    notifications: Cell<u64>,
}

impl<W: Write> RunningAverageDisplay<W> {
    pub fn new(sink: W) -> Self {
        RunningAverageDisplay {
            sink: RefCell::new(sink),
            precision: DEFAULT_PRECISION,
            temperature: Cell::default(),
            humidity: Cell::default(),
            notifications: Cell::new(0),
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn temperature(&self) -> RunningMean {
        self.temperature.get()
    }

    pub fn humidity(&self) -> RunningMean {
        self.humidity.get()
    }

    pub fn notifications(&self) -> u64 {
        self.notifications.get()
    }

    pub fn render(&self) -> String {
        format!(
            "Avg temperature: {}, avg humidity: {}%",
            self.format_mean(self.temperature()),
            self.format_mean(self.humidity())
        )
    }

    pub fn sink(&self) -> Ref<'_, W> {
        self.sink.borrow()
    }

    fn format_mean(&self, mean: RunningMean) -> String {
        match mean.mean() {
            Some(value) => format!("{:.*}", self.precision, value),
            None => "n/a".to_string(),
        }
    }
}

impl<W: Write> Observer<WeatherStation, WeatherEvent> for RunningAverageDisplay<W> {
    fn update(&self, source: &WeatherStation, event: WeatherEvent) -> NotifyResult {
        let (cell, value) = match event {
            WeatherEvent::Temperature => (&self.temperature, source.latest_temperature()),
            WeatherEvent::Humidity => (&self.humidity, source.latest_humidity()),
        };
        let mut mean = cell.get();
        mean.push(value);
        cell.set(mean);
        self.notifications.set(self.notifications.get() + 1);

        trace!("Averaging {event} sample #{}: {value}", mean.count());
        writeln!(self.sink.borrow_mut(), "{}", self.render())?;
        Ok(())
    }
}
