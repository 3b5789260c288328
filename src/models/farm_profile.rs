use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Rice,
    Corn,
    Cotton,
    Sugarcane,
    Potato,
    Soybean,
    Chickpea,
    Mustard,
    Groundnut,
}

impl Crop {
    pub const ALL: [Crop; 10] = [
        Crop::Wheat,
        Crop::Rice,
        Crop::Corn,
        Crop::Cotton,
        Crop::Sugarcane,
        Crop::Potato,
        Crop::Soybean,
        Crop::Chickpea,
        Crop::Mustard,
        Crop::Groundnut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Corn => "Corn (Maize)",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Potato => "Potato",
            Crop::Soybean => "Soybean",
            Crop::Chickpea => "Chickpea (Gram)",
            Crop::Mustard => "Mustard",
            Crop::Groundnut => "Groundnut",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wheat" => Some(Crop::Wheat),
            "rice" | "paddy" | "paddy rice" => Some(Crop::Rice),
            "corn" | "maize" | "corn (maize)" | "maize/corn" => Some(Crop::Corn),
            "cotton" => Some(Crop::Cotton),
            "sugarcane" => Some(Crop::Sugarcane),
            "potato" => Some(Crop::Potato),
            "soybean" => Some(Crop::Soybean),
            "chickpea" | "gram" | "chickpea (gram)" => Some(Crop::Chickpea),
            "mustard" => Some(Crop::Mustard),
            "groundnut" | "peanut" => Some(Crop::Groundnut),
            _ => None,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Silty,
    Peaty,
    Chalky,
    BlackCotton,
}

impl SoilType {
    pub const ALL: [SoilType; 7] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Silty,
        SoilType::Peaty,
        SoilType::Chalky,
        SoilType::BlackCotton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Silty => "Silty",
            SoilType::Peaty => "Peaty",
            SoilType::Chalky => "Chalky",
            SoilType::BlackCotton => "Black Cotton",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clay" => Some(SoilType::Clay),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "silty" | "silt" => Some(SoilType::Silty),
            "peaty" | "peat" => Some(SoilType::Peaty),
            "chalky" | "chalk" => Some(SoilType::Chalky),
            "blackcotton" | "black cotton" => Some(SoilType::BlackCotton),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthIndia,
    SouthIndia,
    EastIndia,
    WestIndia,
    CentralIndia,
    NortheastIndia,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::NorthIndia,
        Region::SouthIndia,
        Region::EastIndia,
        Region::WestIndia,
        Region::CentralIndia,
        Region::NortheastIndia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthIndia => "North India",
            Region::SouthIndia => "South India",
            Region::EastIndia => "East India",
            Region::WestIndia => "West India",
            Region::CentralIndia => "Central India",
            Region::NortheastIndia => "Northeast India",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "northindia" | "north india" | "north" => Some(Region::NorthIndia),
            "southindia" | "south india" | "south" => Some(Region::SouthIndia),
            "eastindia" | "east india" | "east" => Some(Region::EastIndia),
            "westindia" | "west india" | "west" => Some(Region::WestIndia),
            "centralindia" | "central india" | "central" => Some(Region::CentralIndia),
            "northeastindia" | "northeast india" | "northeast" => Some(Region::NortheastIndia),
            _ => None,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Normal,
    Drought,
    HeavyRainfall,
    Humid,
    Dry,
    Warm,
    Cold,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 7] = [
        WeatherCondition::Normal,
        WeatherCondition::Drought,
        WeatherCondition::HeavyRainfall,
        WeatherCondition::Humid,
        WeatherCondition::Dry,
        WeatherCondition::Warm,
        WeatherCondition::Cold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Normal => "Normal",
            WeatherCondition::Drought => "Drought",
            WeatherCondition::HeavyRainfall => "Heavy Rainfall",
            WeatherCondition::Humid => "Humid",
            WeatherCondition::Dry => "Dry",
            WeatherCondition::Warm => "Warm",
            WeatherCondition::Cold => "Cold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(WeatherCondition::Normal),
            "drought" => Some(WeatherCondition::Drought),
            "heavyrainfall" | "heavy rainfall" | "heavy rain" => Some(WeatherCondition::HeavyRainfall),
            "humid" => Some(WeatherCondition::Humid),
            "dry" => Some(WeatherCondition::Dry),
            "warm" => Some(WeatherCondition::Warm),
            "cold" => Some(WeatherCondition::Cold),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a farm's conditions for one advisory request.
///
/// The categorical fields drive the rule resolver; the free-text fields are
/// consumed only by the narrative report path. Crop and soil may be left
/// unselected, in which case the resolver substitutes its baseline crop and
/// the generic irrigation and fertilizer guidance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmProfile {
    pub crop: Option<Crop>,
    pub soil: Option<SoilType>,
    pub region: Region,
    pub weather: WeatherCondition,
    pub soil_ph: Option<f64>,
    pub organic_matter: Option<String>,
    pub season: Option<String>,
    pub water_source: Option<String>,
    pub equipment: Option<String>,
    pub labor: Option<String>,
    pub location_name: Option<String>,
    pub climate_summary: Option<String>,
    pub rainfall_forecast: Option<String>,
}

impl FarmProfile {
    pub fn new(
        crop: Option<Crop>,
        soil: Option<SoilType>,
        region: Region,
        weather: WeatherCondition,
    ) -> Self {
        Self {
            crop,
            soil,
            region,
            weather,
            soil_ph: None,
            organic_matter: None,
            season: None,
            water_source: None,
            equipment: None,
            labor: None,
            location_name: None,
            climate_summary: None,
            rainfall_forecast: None,
        }
    }
}

impl Default for FarmProfile {
    fn default() -> Self {
        Self::new(None, None, Region::WestIndia, WeatherCondition::Warm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_from_str_valid() {
        assert_eq!(Crop::from_str("Wheat"), Some(Crop::Wheat));
        assert_eq!(Crop::from_str("corn (maize)"), Some(Crop::Corn));
        assert_eq!(Crop::from_str("MAIZE"), Some(Crop::Corn));
        assert_eq!(Crop::from_str("chickpea (gram)"), Some(Crop::Chickpea));
        assert_eq!(Crop::from_str("gram"), Some(Crop::Chickpea));
        assert_eq!(Crop::from_str("groundnut"), Some(Crop::Groundnut));
    }

    #[test]
    fn crop_from_str_invalid() {
        assert_eq!(Crop::from_str("jowar"), None);
        assert_eq!(Crop::from_str("tea"), None);
        assert_eq!(Crop::from_str(""), None);
    }

    #[test]
    fn crop_display_round_trip() {
        for crop in Crop::ALL {
            assert_eq!(Crop::from_str(crop.as_str()), Some(crop));
        }
    }

    #[test]
    fn soil_type_from_str_valid() {
        assert_eq!(SoilType::from_str("clay"), Some(SoilType::Clay));
        assert_eq!(SoilType::from_str("Loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::from_str("loam"), Some(SoilType::Loamy));
        assert_eq!(
            SoilType::from_str("black cotton"),
            Some(SoilType::BlackCotton)
        );
    }

    #[test]
    fn soil_type_from_str_invalid() {
        assert_eq!(SoilType::from_str("alluvial"), None);
        assert_eq!(SoilType::from_str("red"), None);
        assert_eq!(SoilType::from_str(""), None);
    }

    #[test]
    fn soil_display_round_trip() {
        for soil in SoilType::ALL {
            assert_eq!(SoilType::from_str(soil.as_str()), Some(soil));
        }
    }

    #[test]
    fn region_from_str_valid() {
        assert_eq!(Region::from_str("West India"), Some(Region::WestIndia));
        assert_eq!(Region::from_str("northeast"), Some(Region::NortheastIndia));
    }

    #[test]
    fn region_display_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_str(region.as_str()), Some(region));
        }
    }

    #[test]
    fn weather_from_str_valid() {
        assert_eq!(
            WeatherCondition::from_str("heavy rainfall"),
            Some(WeatherCondition::HeavyRainfall)
        );
        assert_eq!(
            WeatherCondition::from_str("Warm"),
            Some(WeatherCondition::Warm)
        );
    }

    #[test]
    fn weather_display_round_trip() {
        for weather in WeatherCondition::ALL {
            assert_eq!(WeatherCondition::from_str(weather.as_str()), Some(weather));
        }
    }

    #[test]
    fn weather_label_lengths() {
        // The stage estimator keys off these label lengths.
        assert_eq!(WeatherCondition::Warm.as_str().len(), 4);
        assert_eq!(WeatherCondition::HeavyRainfall.as_str().len(), 14);
    }
}
