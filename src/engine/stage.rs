use chrono::{Datelike, NaiveDate};

use super::tables::growth_stages;
use crate::models::{Crop, WeatherCondition};

/// Derive a display growth stage for a crop.
///
/// Index = (zero-based month + weather label length) mod 6. This is a coarse
/// simulation carried over for behavioral parity with the original demo, not
/// a growth model from planting dates or degree-days; it is reproducible
/// only given the date and the weather label.
pub fn estimate_stage(crop: Crop, weather: WeatherCondition, date: NaiveDate) -> &'static str {
    let stages = growth_stages(crop);
    let index = (date.month0() as usize + weather.as_str().len()) % stages.len();
    stages[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheat_warm_october_is_sowing() {
        // month0 = 9, "Warm" has length 4: (9 + 4) % 6 = 1 -> second stage.
        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        assert_eq!(estimate_stage(Crop::Wheat, WeatherCondition::Warm, date), "Sowing");
    }

    #[test]
    fn index_wraps_modulo_six() {
        // month0 = 11, "Heavy Rainfall" has length 14: (11 + 14) % 6 = 1.
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(
            estimate_stage(Crop::Rice, WeatherCondition::HeavyRainfall, date),
            "Seedling"
        );
    }

    #[test]
    fn stage_is_defined_for_entire_domain() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        for crop in Crop::ALL {
            for weather in WeatherCondition::ALL {
                assert!(!estimate_stage(crop, weather, date).is_empty());
            }
        }
    }

    #[test]
    fn same_inputs_same_stage() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let a = estimate_stage(Crop::Mustard, WeatherCondition::Dry, date);
        let b = estimate_stage(Crop::Mustard, WeatherCondition::Dry, date);
        assert_eq!(a, b);
    }
}
