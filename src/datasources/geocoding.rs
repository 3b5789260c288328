use serde::Deserialize;

use crate::error::{AgroError, Result};

const API_BASE_URL: &str = "https://api.bigdatacloud.net/data";

/// Reverse-geocoded place names. Opaque display data; never parsed by the
/// advisory engine.
#[derive(Debug, Clone)]
pub struct LocationInfo {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl LocationInfo {
    pub fn formatted(&self) -> String {
        [&self.city, &self.state, &self.country]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Client for the keyless BigDataCloud reverse-geocoding API.
pub struct ReverseGeocoder {
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct BdcResponse {
    #[serde(default)]
    city: String,
    #[serde(default)]
    locality: String,
    #[serde(default, rename = "principalSubdivision")]
    principal_subdivision: String,
    #[serde(default, rename = "countryName")]
    country_name: String,
}

impl ReverseGeocoder {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Resolve a coordinate pair to display place names.
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<LocationInfo> {
        let url = format!(
            "{}/reverse-geocode-client?latitude={}&longitude={}&localityLanguage=en",
            API_BASE_URL, latitude, longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgroError::DataSourceUnavailable(format!("BigDataCloud: {}", e)))?;

        if !response.status().is_success() {
            return Err(AgroError::DataSourceUnavailable(format!(
                "BigDataCloud returned {}",
                response.status()
            )));
        }

        let bdc: BdcResponse = response.json().await.map_err(|e| {
            AgroError::DataSourceUnavailable(format!(
                "Failed to parse BigDataCloud response: {}",
                e
            ))
        })?;

        // Rural coordinates often resolve with an empty city but a named
        // locality.
        let city = if bdc.city.is_empty() {
            bdc.locality
        } else {
            bdc.city
        };

        Ok(LocationInfo {
            city,
            state: bdc.principal_subdivision,
            country: bdc.country_name,
        })
    }

    /// Test connection to the BigDataCloud API.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/reverse-geocode-client?latitude=0&longitude=0&localityLanguage=en",
            API_BASE_URL
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgroError::DataSourceUnavailable(format!("BigDataCloud: {}", e)))?;

        Ok(response.status().is_success())
    }
}

impl Default for ReverseGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_skips_empty_parts() {
        let info = LocationInfo {
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
        };
        assert_eq!(info.formatted(), "Mumbai, Maharashtra, India");

        let partial = LocationInfo {
            city: String::new(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
        };
        assert_eq!(partial.formatted(), "Maharashtra, India");
    }
}
