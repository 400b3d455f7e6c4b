use serde::{Deserialize, Serialize};
use std::fmt;

/// One timestamped forecast entry, as delivered by the weather API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// `YYYY-MM-DD HH:MM:SS`, kept verbatim from `dt_txt`.
    pub timestamp: String,
    pub temperature_celsius: f64,
    /// Empty when the upstream sample carried no `weather[0]`.
    pub condition_main: String,
    pub icon_id: String,
}

/// Chronologically ordered samples. Ordering is guaranteed upstream.
pub type ForecastSeries = Vec<ForecastSample>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub coord: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLabel {
    Outdoor,
    Indoor,
}

impl ActivityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLabel::Outdoor => "outdoor",
            ActivityLabel::Indoor => "indoor",
        }
    }
}

impl fmt::Display for ActivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLabel::Outdoor => f.write_str("Outdoor"),
            ActivityLabel::Indoor => f.write_str("Indoor"),
        }
    }
}
