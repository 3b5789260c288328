use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::{AgroError, Result};
use crate::models::{ForecastPoint, WeatherForecast};

const API_BASE_URL: &str = "https://api.open-meteo.com/v1";

const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation_probability,wind_speed_10m";

/// Client for the keyless Open-Meteo hourly forecast API.
pub struct OpenMeteoClient {
    client: reqwest::Client,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    latitude: f64,
    longitude: f64,
    hourly: OmHourly,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
    precipitation_probability: Vec<f64>,
    wind_speed_10m: Vec<f64>,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the hourly forecast for a coordinate pair.
    pub async fn fetch_hourly(&self, latitude: f64, longitude: f64) -> Result<WeatherForecast> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}&forecast_days=2",
            API_BASE_URL, latitude, longitude, HOURLY_FIELDS
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgroError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgroError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let om_response: OmForecastResponse = response.json().await.map_err(|e| {
            AgroError::DataSourceUnavailable(format!("Failed to parse Open-Meteo response: {}", e))
        })?;

        convert_response(om_response)
    }

    /// Test connection to the Open-Meteo API.
    pub async fn test_connection(&self, latitude: f64, longitude: f64) -> Result<bool> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly=temperature_2m&forecast_days=1",
            API_BASE_URL, latitude, longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgroError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        Ok(response.status().is_success())
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_response(response: OmForecastResponse) -> Result<WeatherForecast> {
    let hourly = &response.hourly;
    let len = hourly.time.len();
    if hourly.temperature_2m.len() != len
        || hourly.relative_humidity_2m.len() != len
        || hourly.precipitation_probability.len() != len
        || hourly.wind_speed_10m.len() != len
    {
        return Err(AgroError::InvalidData(
            "Open-Meteo hourly arrays have mismatched lengths".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(len);
    for i in 0..len {
        let timestamp = parse_timestamp(&hourly.time[i])?;
        points.push(ForecastPoint {
            timestamp,
            temperature_c: hourly.temperature_2m[i],
            precipitation_probability: hourly.precipitation_probability[i],
            wind_speed_kmh: hourly.wind_speed_10m[i],
            humidity_percent: hourly.relative_humidity_2m[i],
        });
    }

    Ok(WeatherForecast {
        fetched_at: Utc::now(),
        latitude: response.latitude,
        longitude: response.longitude,
        hourly: points,
    })
}

// Open-Meteo returns local ISO-8601 timestamps without a zone suffix.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map_err(|e| AgroError::InvalidData(format!("bad Open-Meteo timestamp '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_meteo_timestamps() {
        let ts = parse_timestamp("2024-10-15T09:00").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-10-15 09:00");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn converts_well_formed_response() {
        let response = OmForecastResponse {
            latitude: 19.07,
            longitude: 72.88,
            hourly: OmHourly {
                time: vec!["2024-10-15T00:00".into(), "2024-10-15T01:00".into()],
                temperature_2m: vec![24.1, 23.8],
                relative_humidity_2m: vec![70.0, 72.0],
                precipitation_probability: vec![10.0, 35.0],
                wind_speed_10m: vec![8.0, 9.5],
            },
        };

        let forecast = convert_response(response).unwrap();
        assert_eq!(forecast.hourly.len(), 2);
        assert_eq!(forecast.hourly[1].condition(), "Light Rain");
    }

    #[test]
    fn rejects_mismatched_arrays() {
        let response = OmForecastResponse {
            latitude: 0.0,
            longitude: 0.0,
            hourly: OmHourly {
                time: vec!["2024-10-15T00:00".into()],
                temperature_2m: vec![],
                relative_humidity_2m: vec![70.0],
                precipitation_probability: vec![10.0],
                wind_speed_10m: vec![8.0],
            },
        };
        assert!(convert_response(response).is_err());
    }
}
