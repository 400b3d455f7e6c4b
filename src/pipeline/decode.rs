use serde_json::Value;

use crate::error::DecodeError;
use crate::types::forecast::{CityInfo, Coordinates, ForecastSample, ForecastSeries};

#[derive(Debug, Clone)]
pub struct DecodedForecast {
    pub city: CityInfo,
    pub series: ForecastSeries,
}

/// Maps a 5-day/3-hour forecast payload onto the domain types.
///
/// Only `dt_txt`, `main.temp` and `weather[0].{main,icon}` are read from each
/// entry. A missing or malformed `weather[0]` leaves the condition and icon
/// empty rather than failing the whole payload.
pub fn decode_forecast(payload: &Value) -> Result<DecodedForecast, DecodeError> {
    let list = payload
        .get("list")
        .and_then(Value::as_array)
        .ok_or(DecodeError::MissingField("list"))?;

    let mut series = Vec::with_capacity(list.len());
    for (index, entry) in list.iter().enumerate() {
        series.push(decode_sample(index, entry)?);
    }

    Ok(DecodedForecast {
        city: decode_city(payload.get("city")),
        series,
    })
}

fn decode_sample(index: usize, entry: &Value) -> Result<ForecastSample, DecodeError> {
    let timestamp = entry
        .get("dt_txt")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MalformedSample { index, field: "dt_txt" })?;
    let temperature_celsius = entry
        .get("main")
        .and_then(|main| main.get("temp"))
        .and_then(Value::as_f64)
        .ok_or(DecodeError::MalformedSample { index, field: "main.temp" })?;

    let weather = entry
        .get("weather")
        .and_then(Value::as_array)
        .and_then(|items| items.first());
    let condition_main = weather
        .and_then(|w| w.get("main"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let icon_id = weather
        .and_then(|w| w.get("icon"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(ForecastSample {
        timestamp: timestamp.to_string(),
        temperature_celsius,
        condition_main: condition_main.to_string(),
        icon_id: icon_id.to_string(),
    })
}

fn decode_city(city: Option<&Value>) -> CityInfo {
    let text = |key: &str| {
        city.and_then(|c| c.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let coord = city.and_then(|c| c.get("coord")).and_then(|coord| {
        Some(Coordinates {
            lat: coord.get("lat").and_then(Value::as_f64)?,
            lon: coord.get("lon").and_then(Value::as_f64)?,
        })
    });

    CityInfo {
        name: text("name"),
        country: text("country"),
        coord,
    }
}
