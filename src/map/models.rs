use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateParseError {
    #[error("expected `<latitude>, <longitude>`, got `{0}`")]
    Malformed(String),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("latitude {0} is outside of [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside of [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Parses `"<lat>, <lng>"` (the comma may be replaced by whitespace).
impl FromStr for LatLng {
    type Err = CoordinateParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();
        let [raw_lat, raw_lng] = parts.as_slice() else {
            return Err(CoordinateParseError::Malformed(raw.trim().to_string()));
        };
        let lat = parse_component(raw_lat)?;
        let lng = parse_component(raw_lng)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateParseError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateParseError::LongitudeOutOfRange(lng));
        }
        Ok(LatLng { lat, lng })
    }
}

fn parse_component(raw: &str) -> Result<f64, CoordinateParseError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoordinateParseError::NotANumber(raw.to_string()))
}
