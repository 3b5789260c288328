use crate::models::farm_profile::WeatherCondition;

/// Static reference data for one macro-region. Never mutated at runtime.
///
/// `common_crops` and `common_soils` keep the source's full display lists,
/// which include names outside the closed `Crop`/`SoilType` enums (Jowar,
/// Tea, Alluvial, ...); typed selection happens in the auto-fill step.
#[derive(Debug, Clone, Copy)]
pub struct RegionProfile {
    pub common_crops: &'static [&'static str],
    pub common_soils: &'static [&'static str],
    pub climate_suitability: &'static str,
    pub typical_weather: &'static [WeatherCondition],
}
