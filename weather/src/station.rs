use common::subject_observer::{NotifyResult, ObserverList, SharedObserver, Subject};
use log::debug;

use crate::WeatherEvent;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: f64,
}

/// Subject publishing the latest temperature and humidity.
///
/// Each setter stores its value then broadcasts once; values are published
/// as given, without range checks.
#[derive(Default)]
pub struct WeatherStation {
    observers: ObserverList<Self, WeatherEvent>,
    reading: Reading,
}

impl Subject<WeatherEvent> for WeatherStation {
    fn register_observer(&self, observer: SharedObserver<Self, WeatherEvent>) {
        self.observers.push(observer);
    }

    fn unregister_observer(&self, observer: &SharedObserver<Self, WeatherEvent>) {
        self.observers.remove_first(observer);
    }

    fn notify_observers(&self, event: WeatherEvent) -> NotifyResult {
        self.observers.notify(self, event)
    }
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_temperature(&mut self, temperature: f64) -> NotifyResult {
        self.reading.temperature = temperature;
        debug!("Publishing temperature {temperature}");
        self.notify_observers(WeatherEvent::Temperature)
    }

    pub fn set_humidity(&mut self, humidity: f64) -> NotifyResult {
        self.reading.humidity = humidity;
        debug!("Publishing humidity {humidity}");
        self.notify_observers(WeatherEvent::Humidity)
    }

    pub fn latest_temperature(&self) -> f64 {
        self.reading.temperature
    }

    pub fn latest_humidity(&self) -> f64 {
        self.reading.humidity
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
