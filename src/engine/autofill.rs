use rand::Rng;

use super::tables::{region_profile, soil_suitability};
use crate::models::{Crop, Region, SoilType, WeatherCondition};

/// Field values suggested from a region's reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSuggestions {
    pub crop: Crop,
    pub soil: SoilType,
    pub weather: WeatherCondition,
}

/// Suggest crop, soil and weather defaults for a region.
///
/// Crop and soil selection are deterministic (first typed entry of the
/// region's crop list, then the crop's suitability list); the weather pick
/// is uniform over the region's typical conditions and is the engine's only
/// non-determinism, so the random source is injected.
pub fn suggest_defaults<R: Rng + ?Sized>(region: Region, rng: &mut R) -> FieldSuggestions {
    let profile = region_profile(region);

    let crop = profile
        .common_crops
        .iter()
        .find_map(|name| Crop::from_str(name))
        .unwrap_or(Crop::Chickpea);

    let soil = soil_suitability(crop)
        .first()
        .copied()
        .or_else(|| {
            profile
                .common_soils
                .iter()
                .find_map(|name| SoilType::from_str(name))
        })
        .unwrap_or(SoilType::Loamy);

    let weather = profile.typical_weather[rng.gen_range(0..profile.typical_weather.len())];

    FieldSuggestions {
        crop,
        soil,
        weather,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn west_india_suggests_cotton_on_black_cotton() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let suggestion = suggest_defaults(Region::WestIndia, &mut rng);
        assert_eq!(suggestion.crop, Crop::Cotton);
        assert_eq!(suggestion.soil, SoilType::BlackCotton);
        assert!(matches!(
            suggestion.weather,
            WeatherCondition::Dry | WeatherCondition::Warm
        ));
    }

    #[test]
    fn weather_pick_stays_in_typical_set() {
        for region in Region::ALL {
            let typical = crate::engine::tables::region_profile(region).typical_weather;
            for seed in 0..32 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let suggestion = suggest_defaults(region, &mut rng);
                assert!(typical.contains(&suggestion.weather));
            }
        }
    }

    #[test]
    fn every_region_yields_typed_suggestions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for region in Region::ALL {
            // Must not panic and must land in the closed enums.
            let _ = suggest_defaults(region, &mut rng);
        }
    }

    #[test]
    fn crop_selection_is_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(2);
        let first = suggest_defaults(Region::NorthIndia, &mut a);
        let second = suggest_defaults(Region::NorthIndia, &mut b);
        assert_eq!(first.crop, Crop::Wheat);
        assert_eq!(first.crop, second.crop);
        assert_eq!(first.soil, second.soil);
    }
}
