use chrono::NaiveDate;

use super::stage::estimate_stage;
use super::tables;
use crate::models::{Crop, CropRecommendation, Region, SoilType, WeatherCondition};

/// Weather-appropriate advice for a crop in a region.
///
/// Per-crop overrides first, then the per-weather default template. The
/// exhaustive match over `WeatherCondition` guarantees an applicable rule
/// for every value in the domain.
pub fn advice(crop: Crop, region: Region, weather: WeatherCondition) -> String {
    use Crop::*;
    use WeatherCondition::*;

    match (weather, crop) {
        (Normal, Rice) => format!(
            "Maintain regular irrigation schedule for {crop} under normal conditions in {region}."
        ),
        (Normal, Wheat) => format!(
            "Normal conditions are ideal for {crop} growth in {region}. Maintain standard \
             cultivation practices."
        ),
        (Normal, Cotton) => {
            "Standard cotton management practices are recommended under these normal conditions."
                .to_string()
        }
        (Normal, _) => format!(
            "Current normal weather conditions are favorable for {crop} cultivation in {region}."
        ),

        (Drought, Rice) => format!(
            "Drought conditions require careful water management for {crop}. Consider alternate \
             wetting and drying technique."
        ),
        (Drought, Wheat) => format!(
            "Under drought conditions, prioritize limited irrigation at critical growth stages \
             for {crop}."
        ),
        (Drought, Sugarcane) => format!(
            "Apply mulching to conserve soil moisture for {crop} under current drought \
             conditions in {region}."
        ),
        (Drought, _) => format!(
            "Consider drought-resistant varieties of {crop} for {region} due to current drought \
             conditions."
        ),

        (HeavyRainfall, Cotton) => {
            "Heavy rainfall may lead to boll rot in cotton. Consider preventative fungicide \
             application."
                .to_string()
        }
        (HeavyRainfall, Groundnut) => format!(
            "Elevated ridges recommended for {crop} to avoid waterlogging in current heavy \
             rainfall."
        ),
        (HeavyRainfall, Chickpea) => format!(
            "{crop} is susceptible to root rot in excessive moisture. Ensure field drainage."
        ),
        (HeavyRainfall, _) => format!(
            "Ensure proper drainage for {crop} fields in {region} to prevent waterlogging."
        ),

        (Humid, Wheat) => {
            "Increased risk of rust and powdery mildew for wheat under humid conditions. \
             Consider preventative spraying."
                .to_string()
        }
        (Humid, Potato) => {
            "High humidity increases risk of late blight in potato. Regular monitoring \
             recommended."
                .to_string()
        }
        (Humid, _) => format!(
            "Monitor {crop} for fungal diseases under current humid conditions in {region}."
        ),

        (Dry, Mustard) => format!(
            "{crop} can tolerate dry conditions but critical irrigation at flowering stage is \
             recommended."
        ),
        (Dry, Chickpea) => format!(
            "{crop} is relatively drought-tolerant but consider irrigation at pod formation \
             stage."
        ),
        (Dry, _) => format!(
            "Supplement irrigation for {crop} cultivation during current dry spell in {region}."
        ),

        (Warm, Cotton) => {
            "Warm conditions favor cotton development. Monitor for increased pest activity."
                .to_string()
        }
        (Warm, Rice) => {
            "Ensure adequate water levels in rice fields under warm conditions to prevent heat \
             stress."
                .to_string()
        }
        (Warm, _) => {
            format!("Current warm conditions in {region} are suitable for {crop} growth.")
        }

        (Cold, Wheat) => {
            "Cold conditions are generally favorable for wheat development in vegetative stage."
                .to_string()
        }
        (Cold, Potato) => {
            "Protect potato from frost damage under cold conditions. Consider row covers if \
             temperatures drop further."
                .to_string()
        }
        (Cold, _) => format!("Protect young {crop} plants from cold stress in {region}."),
    }
}

/// Irrigation guidance for a soil type.
pub fn irrigation(crop: Crop, soil: SoilType) -> String {
    use SoilType::*;
    match soil {
        Clay => format!(
            "Careful water management needed as {soil} soil retains water longer. Avoid \
             overwatering."
        ),
        Sandy => format!(
            "Frequent but light irrigation recommended for {crop} in {soil} soil as it drains \
             quickly."
        ),
        Loamy => {
            format!("{soil} soil has good water retention. Moderate irrigation schedule is suitable.")
        }
        Silty => format!(
            "{soil} soil has good water retention but can form crust. Gentle irrigation \
             recommended."
        ),
        Peaty => format!("{soil} soil retains moisture well. Avoid overwatering {crop}."),
        Chalky => format!("{soil} soil drains quickly. Regular irrigation needed for {crop}."),
        BlackCotton => format!(
            "{soil} soil expands when wet and cracks when dry. Careful water management \
             required."
        ),
    }
}

/// Fertilizer guidance for a soil type.
pub fn fertilizer(soil: SoilType) -> String {
    use SoilType::*;
    match soil {
        Clay => {
            format!("{soil} soil tends to bind nutrients. Consider split application of fertilizers.")
        }
        Sandy => {
            format!("Apply organic matter to improve {soil} soil's nutrient retention capacity.")
        }
        Loamy => {
            format!("{soil} soil is ideal for most crops. Follow standard fertilizer recommendations.")
        }
        Silty => format!("{soil} soil is generally fertile. Balanced NPK application recommended."),
        Peaty => format!(
            "{soil} soil is high in organic matter but may need mineral supplements, especially \
             phosphorus."
        ),
        Chalky => format!(
            "{soil} soil may be deficient in iron and manganese. Consider micronutrient \
             application."
        ),
        BlackCotton => format!(
            "{soil} soil is generally fertile but needs balanced fertilization. Split \
             application recommended."
        ),
    }
}

/// The crop substituted when none was selected.
pub const BASELINE_CROP: Crop = Crop::Chickpea;

/// Resolve a full structured recommendation for the given farm descriptors.
///
/// Pure and total over the enum domain; `date` feeds only the growth stage
/// derivation, so identical arguments always produce identical output. An
/// unselected crop resolves as the baseline crop except for pest control,
/// which degrades to the generic guidance; an unselected soil degrades the
/// irrigation and fertilizer fields to their generic sentences.
pub fn resolve(
    crop: Option<Crop>,
    soil: Option<SoilType>,
    region: Region,
    weather: WeatherCondition,
    date: NaiveDate,
) -> CropRecommendation {
    let named = crop.unwrap_or(BASELINE_CROP);

    CropRecommendation {
        name: named.as_str().to_string(),
        stage: estimate_stage(named, weather, date).to_string(),
        advice: advice(named, region, weather),
        irrigation: soil
            .map(|s| irrigation(named, s))
            .unwrap_or_else(|| tables::GENERIC_IRRIGATION.to_string()),
        pest_control: crop
            .map(tables::pest_control)
            .unwrap_or(tables::GENERIC_PEST_CONTROL)
            .to_string(),
        fertilizer: soil
            .map(fertilizer)
            .unwrap_or_else(|| tables::GENERIC_FERTILIZER.to_string()),
        details: tables::crop_details(named),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
    }

    #[test]
    fn advice_is_nonempty_for_entire_domain() {
        for crop in Crop::ALL {
            for weather in WeatherCondition::ALL {
                let text = advice(crop, Region::WestIndia, weather);
                assert!(
                    !text.is_empty(),
                    "empty advice for {crop} under {weather}"
                );
            }
        }
    }

    #[test]
    fn advice_prefers_crop_override() {
        let cotton = advice(Crop::Cotton, Region::WestIndia, WeatherCondition::Warm);
        assert_eq!(
            cotton,
            "Warm conditions favor cotton development. Monitor for increased pest activity."
        );

        // A crop with no override falls back to the per-weather template.
        let potato = advice(Crop::Potato, Region::WestIndia, WeatherCondition::Warm);
        assert_eq!(
            potato,
            "Current warm conditions in West India are suitable for Potato growth."
        );
    }

    #[test]
    fn advice_interpolates_crop_and_region() {
        let text = advice(Crop::Soybean, Region::CentralIndia, WeatherCondition::Normal);
        assert!(text.contains("Soybean"));
        assert!(text.contains("Central India"));
    }

    #[test]
    fn irrigation_and_fertilizer_name_the_soil() {
        for soil in SoilType::ALL {
            let irr = irrigation(Crop::Wheat, soil);
            let fert = fertilizer(soil);
            assert!(
                irr.contains(soil.as_str()),
                "irrigation for {soil} does not name the soil: {irr}"
            );
            assert!(
                fert.contains(soil.as_str()),
                "fertilizer for {soil} does not name the soil: {fert}"
            );
        }
    }

    #[test]
    fn resolve_is_total_over_domain() {
        for crop in Crop::ALL {
            for soil in SoilType::ALL {
                for region in Region::ALL {
                    for weather in WeatherCondition::ALL {
                        let rec =
                            resolve(Some(crop), Some(soil), region, weather, fixed_date());
                        assert!(!rec.advice.is_empty());
                        assert!(!rec.stage.is_empty());
                        assert!(!rec.irrigation.is_empty());
                        assert!(!rec.pest_control.is_empty());
                        assert!(!rec.fertilizer.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn unselected_crop_resolves_as_baseline_with_generic_pest_control() {
        let rec = resolve(
            None,
            Some(SoilType::Loamy),
            Region::WestIndia,
            WeatherCondition::Warm,
            fixed_date(),
        );
        assert_eq!(rec.name, "Chickpea (Gram)");
        assert_eq!(rec.pest_control, tables::GENERIC_PEST_CONTROL);
        // Advice still interpolates the baseline crop name.
        assert!(rec.advice.contains("Chickpea (Gram)"));
    }

    #[test]
    fn unselected_soil_degrades_to_generic_guidance() {
        let rec = resolve(
            Some(Crop::Wheat),
            None,
            Region::NorthIndia,
            WeatherCondition::Normal,
            fixed_date(),
        );
        assert_eq!(rec.irrigation, tables::GENERIC_IRRIGATION);
        assert_eq!(rec.fertilizer, tables::GENERIC_FERTILIZER);
    }

    #[test]
    fn resolve_is_idempotent() {
        let first = resolve(
            Some(Crop::Rice),
            Some(SoilType::Clay),
            Region::EastIndia,
            WeatherCondition::HeavyRainfall,
            fixed_date(),
        );
        let second = resolve(
            Some(Crop::Rice),
            Some(SoilType::Clay),
            Region::EastIndia,
            WeatherCondition::HeavyRainfall,
            fixed_date(),
        );
        assert_eq!(first, second);
    }
}
