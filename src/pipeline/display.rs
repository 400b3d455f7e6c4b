use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::forecast::ForecastSample;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// A forecast sample with the labels the forecast cards show.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastCard {
    pub timestamp: String,
    pub time_label: String,
    pub temperature_celsius: f64,
    pub temperature_label: String,
    pub condition: String,
    pub description: String,
    pub icon_id: String,
    pub icon_url: Option<String>,
}

impl From<&ForecastSample> for ForecastCard {
    fn from(sample: &ForecastSample) -> Self {
        Self {
            timestamp: sample.timestamp.clone(),
            time_label: time_label(&sample.timestamp),
            temperature_celsius: sample.temperature_celsius,
            temperature_label: temperature_label(sample.temperature_celsius),
            condition: sample.condition_main.clone(),
            description: description(sample),
            icon_id: sample.icon_id.clone(),
            icon_url: icon_url(&sample.icon_id),
        }
    }
}

pub fn cards(samples: &[ForecastSample]) -> Vec<ForecastCard> {
    samples.iter().map(ForecastCard::from).collect()
}

/// `"Sat, 15:00"`; the raw timestamp when it does not parse.
pub fn time_label(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format("%a, %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

pub fn temperature_label(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

pub fn icon_url(icon_id: &str) -> Option<String> {
    if icon_id.is_empty() {
        return None;
    }
    Some(format!("{}/{}@4x.png", ICON_BASE_URL, icon_id))
}

pub fn description(sample: &ForecastSample) -> String {
    if sample.condition_main.is_empty() {
        "No description".to_string()
    } else {
        sample.condition_main.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_label_uses_weekday_and_clock() {
        assert_eq!(time_label("2026-10-18 15:00:00"), "Sun, 15:00");
        assert_eq!(time_label("2026-10-19 03:00:00"), "Mon, 03:00");
    }

    #[test]
    fn unparseable_timestamp_is_kept() {
        assert_eq!(time_label("tomorrow"), "tomorrow");
    }

    #[test]
    fn temperature_is_rounded() {
        assert_eq!(temperature_label(21.6), "22°C");
        assert_eq!(temperature_label(-0.4), "0°C");
        assert_eq!(temperature_label(-3.5), "-4°C");
    }

    #[test]
    fn card_without_condition() {
        let sample = ForecastSample {
            timestamp: "2026-10-18 12:00:00".to_string(),
            temperature_celsius: 12.2,
            condition_main: String::new(),
            icon_id: String::new(),
        };
        let card = ForecastCard::from(&sample);
        assert_eq!(card.description, "No description");
        assert_eq!(card.icon_url, None);
        assert_eq!(card.temperature_label, "12°C");
    }

    #[test]
    fn icon_url_points_at_large_icon() {
        assert_eq!(
            icon_url("10d").as_deref(),
            Some("https://openweathermap.org/img/wn/10d@4x.png")
        );
    }
}
