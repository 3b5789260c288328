use crate::error::{AgroError, Result};
use crate::models::{Crop, FarmProfile, Region, SoilType, WeatherCondition};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
    pub location: Option<LocationConfig>,
    #[serde(default)]
    pub datasources: DatasourceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub region: String,
    pub crop: Option<String>,
    pub soil: Option<String>,
    pub weather: Option<String>,
    pub soil_ph: Option<f64>,
    pub organic_matter: Option<String>,
    pub season: Option<String>,
    pub water_source: Option<String>,
    pub equipment: Option<String>,
    pub labor: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct DatasourceConfig {
    #[serde(default = "default_enabled")]
    pub openmeteo: bool,
    #[serde(default = "default_enabled")]
    pub geocoding: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for DatasourceConfig {
    fn default() -> Self {
        Self {
            openmeteo: true,
            geocoding: true,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgroError::Config(format!(
                "Config file not found at {:?}. Run `agroadvisor init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgroError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AgroError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agroadvisor").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AgroError::Config("Cannot determine config directory".into()))?
            .join("agroadvisor")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agroadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgroError::Config("Cannot determine config directory".into()))?
            .join("agroadvisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up AgroAdvisor!");
        println!();

        println!("Farm Profile");
        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("Main Farm".into())
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let region: String = Input::new()
            .with_prompt("  Region (North India, South India, East India, West India, ...)")
            .default("West India".into())
            .validate_with(|value: &String| -> std::result::Result<(), String> {
                Region::from_str(value)
                    .map(|_| ())
                    .ok_or_else(|| format!("unknown region '{}'", value))
            })
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let crop: String = Input::new()
            .with_prompt("  Primary crop (blank to use the region default)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let soil: String = Input::new()
            .with_prompt("  Soil type (Clay, Sandy, Loamy, Silty, Peaty, Chalky, Black Cotton)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let soil_ph: f64 = Input::new()
            .with_prompt("  Soil pH")
            .default(6.5)
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let organic_matter: String = Input::new()
            .with_prompt("  Organic matter (low, moderate, high)")
            .default("moderate".into())
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let water_source: String = Input::new()
            .with_prompt("  Water source (rainfall, well, river, irrigation, mixed)")
            .default("rainfall".into())
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Location (leave latitude blank to skip live weather and geocoding)");
        let latitude: String = Input::new()
            .with_prompt("  Latitude")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;

        let location = if latitude.is_empty() {
            None
        } else {
            let latitude: f64 = latitude
                .parse()
                .map_err(|_| AgroError::Config(format!("invalid latitude '{}'", latitude)))?;
            let longitude: f64 = Input::new()
                .with_prompt("  Longitude")
                .default(72.88)
                .interact_text()
                .map_err(|e| AgroError::Config(format!("Input error: {}", e)))?;
            Some(LocationConfig {
                latitude,
                longitude,
            })
        };

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                region,
                crop: if crop.is_empty() { None } else { Some(crop) },
                soil: if soil.is_empty() { None } else { Some(soil) },
                weather: None,
                soil_ph: Some(soil_ph),
                organic_matter: Some(organic_matter),
                season: None,
                water_source: Some(water_source),
                equipment: None,
                labor: None,
            },
            location,
            datasources: DatasourceConfig::default(),
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgroError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgroAdvisor Configuration\n# Generated by `agroadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Build the typed farm profile from the configured strings.
    ///
    /// Unrecognized enum tags surface as `InvalidData` so callers can treat
    /// them as "use defaults"; unset crop and soil stay unselected and
    /// resolve through the engine's fallback branches.
    pub fn farm_profile(&self) -> Result<FarmProfile> {
        let region = parse_field("region", &self.farm.region, Region::from_str)?;

        let crop = match &self.farm.crop {
            Some(raw) => Some(parse_field("crop", raw, Crop::from_str)?),
            None => None,
        };

        let soil = match &self.farm.soil {
            Some(raw) => Some(parse_field("soil", raw, SoilType::from_str)?),
            None => None,
        };

        let weather = match &self.farm.weather {
            Some(raw) => parse_field("weather", raw, WeatherCondition::from_str)?,
            None => WeatherCondition::Warm,
        };

        let mut profile = FarmProfile::new(crop, soil, region, weather);
        profile.soil_ph = self.farm.soil_ph;
        profile.organic_matter = self.farm.organic_matter.clone();
        profile.season = self.farm.season.clone();
        profile.water_source = self.farm.water_source.clone();
        profile.equipment = self.farm.equipment.clone();
        profile.labor = self.farm.labor.clone();
        Ok(profile)
    }
}

fn parse_field<T>(field: &str, raw: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    parse(raw)
        .ok_or_else(|| AgroError::InvalidData(format!("unrecognized {} '{}' in config", field, raw)))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "Main Farm".into(),
                region: "West India".into(),
                crop: None,
                soil: None,
                weather: None,
                soil_ph: Some(6.5),
                organic_matter: Some("moderate".into()),
                season: None,
                water_source: Some("rainfall".into()),
                equipment: None,
                labor: None,
            },
            location: None,
            datasources: DatasourceConfig::default(),
        }
    }
}
