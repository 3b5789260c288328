use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hourly weather forecast from the Open-Meteo API.
///
/// Presentation data for the forecast view; never fed into the rule resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub fetched_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: Vec<ForecastPoint>,
}

impl WeatherForecast {
    /// Forecast points within the next N hours of the given reference time.
    pub fn next_hours(&self, now: NaiveDateTime, hours: u32) -> Vec<&ForecastPoint> {
        let cutoff = now + chrono::Duration::hours(hours as i64);
        self.hourly
            .iter()
            .filter(|p| p.timestamp >= now && p.timestamp <= cutoff)
            .collect()
    }

    /// One-line rainfall outlook used by the narrative report path.
    pub fn rainfall_outlook(&self) -> String {
        let max_prob = self
            .hourly
            .iter()
            .map(|p| p.precipitation_probability)
            .fold(0.0_f64, f64::max);

        if max_prob >= 70.0 {
            format!(
                "Heavy rain likely (up to {:.0}% precipitation probability)",
                max_prob
            )
        } else if max_prob >= 30.0 {
            format!(
                "Light rain possible (up to {:.0}% precipitation probability)",
                max_prob
            )
        } else {
            "Little to no rainfall expected".to_string()
        }
    }
}

/// A single hourly forecast point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub precipitation_probability: f64, // 0-100
    pub wind_speed_kmh: f64,
    pub humidity_percent: f64,
}

impl ForecastPoint {
    pub fn temperature_f(&self) -> f64 {
        self.temperature_c * 9.0 / 5.0 + 32.0
    }

    pub fn wind_speed_mph(&self) -> f64 {
        self.wind_speed_kmh / 1.609344
    }

    /// Coarse display condition derived from precipitation probability and
    /// local hour.
    pub fn condition(&self) -> &'static str {
        use chrono::Timelike;
        let hour = self.timestamp.hour();
        let is_night = hour < 6 || hour > 18;

        if self.precipitation_probability >= 70.0 {
            "Heavy Rain"
        } else if self.precipitation_probability >= 30.0 {
            "Light Rain"
        } else if self.precipitation_probability >= 10.0 {
            "Cloudy"
        } else if is_night {
            "Clear Night"
        } else {
            "Sunny"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(hour: u32, precipitation_probability: f64) -> ForecastPoint {
        ForecastPoint {
            timestamp: NaiveDate::from_ymd_opt(2024, 10, 15)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature_c: 25.0,
            precipitation_probability,
            wind_speed_kmh: 10.0,
            humidity_percent: 55.0,
        }
    }

    #[test]
    fn condition_thresholds() {
        assert_eq!(point(12, 80.0).condition(), "Heavy Rain");
        assert_eq!(point(12, 45.0).condition(), "Light Rain");
        assert_eq!(point(12, 15.0).condition(), "Cloudy");
        assert_eq!(point(12, 0.0).condition(), "Sunny");
        assert_eq!(point(22, 0.0).condition(), "Clear Night");
    }

    #[test]
    fn unit_conversions() {
        let p = point(12, 0.0);
        assert!((p.temperature_f() - 77.0).abs() < 1e-9);
        assert!((p.wind_speed_mph() - 6.2137).abs() < 1e-3);
    }

    #[test]
    fn rainfall_outlook_buckets() {
        let forecast = WeatherForecast {
            fetched_at: Utc::now(),
            latitude: 19.0,
            longitude: 72.8,
            hourly: vec![point(10, 20.0), point(11, 85.0)],
        };
        assert!(forecast.rainfall_outlook().starts_with("Heavy rain likely"));

        let dry = WeatherForecast {
            fetched_at: Utc::now(),
            latitude: 19.0,
            longitude: 72.8,
            hourly: vec![point(10, 5.0)],
        };
        assert_eq!(dry.rainfall_outlook(), "Little to no rainfall expected");
    }
}
