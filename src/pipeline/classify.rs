use std::collections::HashSet;

use crate::types::forecast::{ActivityLabel, ForecastSample};

pub const DEFAULT_COLD_THRESHOLD_CELSIUS: f64 = 10.0;

/// Keyword sets and threshold driving [`classify`]. Keywords are stored
/// lower-cased; the condition is lower-cased before lookup.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    indoor_conditions: HashSet<String>,
    outdoor_conditions: HashSet<String>,
    cold_threshold_celsius: f64,
}

impl ClassifierRules {
    pub fn new<I, O, S>(indoor: I, outdoor: O, cold_threshold_celsius: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        O: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            indoor_conditions: indoor.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
            outdoor_conditions: outdoor.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
            cold_threshold_celsius,
        }
    }

    pub fn with_cold_threshold(mut self, cold_threshold_celsius: f64) -> Self {
        self.cold_threshold_celsius = cold_threshold_celsius;
        self
    }

    pub fn cold_threshold_celsius(&self) -> f64 {
        self.cold_threshold_celsius
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self::new(
            ["rain", "thunderstorm"],
            ["clear", "clouds", "sunny"],
            DEFAULT_COLD_THRESHOLD_CELSIUS,
        )
    }
}

/// Decides whether the sample favours outdoor activity.
///
/// First match wins: indoor keyword, outdoor keyword, below the cold
/// threshold (indoor), otherwise outdoor. An unrecognised condition that is
/// not cold is deliberately `Outdoor`.
pub fn classify(sample: &ForecastSample, rules: &ClassifierRules) -> ActivityLabel {
    let condition = sample.condition_main.to_lowercase();

    if rules.indoor_conditions.contains(&condition) {
        ActivityLabel::Indoor
    } else if rules.outdoor_conditions.contains(&condition) {
        ActivityLabel::Outdoor
    } else if sample.temperature_celsius < rules.cold_threshold_celsius {
        ActivityLabel::Indoor
    } else {
        ActivityLabel::Outdoor
    }
}

/// Classifies the first sample of a series. `None` means "no data available"
/// and is what callers render instead of a recommendation.
pub fn recommend(series: &[ForecastSample], rules: &ClassifierRules) -> Option<ActivityLabel> {
    series.first().map(|sample| classify(sample, rules))
}
