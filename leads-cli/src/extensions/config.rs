//! Command line tool configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use leads_core::routing::TravelMode;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A tool configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies filter configuration.
    pub filter: Option<FilterConfig>,
    /// Specifies navigation configuration.
    pub navigation: Option<NavigationConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A filter configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// A radius in kilometers used when none is passed explicitly.
    pub radius: Option<f64>,
    /// Allowed radius values in kilometers.
    pub presets: Option<Vec<f64>>,
}

/// A navigation link configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig {
    /// Whether a directions url is added to the route.
    pub enabled: bool,
    /// A travel mode: driving, walking, bicycling or transit. Default is driving.
    pub travel_mode: Option<String>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Whether progress messages are printed.
    pub enabled: bool,
}

impl Config {
    /// Returns configured default radius.
    pub fn radius(&self) -> Option<f64> {
        self.filter.as_ref().and_then(|filter| filter.radius)
    }

    /// Checks that radius is one of configured presets. Any radius is accepted when presets are not set.
    pub fn check_radius(&self, radius: f64) -> Result<(), String> {
        match self.filter.as_ref().and_then(|filter| filter.presets.as_ref()) {
            Some(presets) if !presets.iter().any(|preset| (preset - radius).abs() < f64::EPSILON) => Err(format!(
                "radius {radius} is not one of presets: {}",
                presets.iter().map(|preset| preset.to_string()).collect::<Vec<_>>().join(", ")
            )),
            _ => Ok(()),
        }
    }

    /// Returns true if navigation url is requested.
    pub fn is_navigation_enabled(&self) -> bool {
        self.navigation.as_ref().is_some_and(|navigation| navigation.enabled)
    }

    /// Returns configured travel mode.
    pub fn travel_mode(&self) -> Result<Option<TravelMode>, String> {
        self.navigation
            .as_ref()
            .and_then(|navigation| navigation.travel_mode.as_ref())
            .map(|travel_mode| travel_mode.parse::<TravelMode>())
            .transpose()
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging.as_ref().is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
