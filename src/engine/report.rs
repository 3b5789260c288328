use chrono::NaiveDate;

use super::resolver;
use super::tables::{self, region_profile, soil_suitability};
use crate::models::{AdvisoryReport, Crop, CropRecommendation, FarmProfile, WeatherCondition};

/// Assemble the full advisory for a farm profile: the structured
/// recommendation plus the markdown advisory report.
///
/// The numbered section headings are consumed downstream by the section
/// extractor; their text and ordering must stay stable.
pub fn assemble_report(profile: &FarmProfile, date: NaiveDate) -> AdvisoryReport {
    let recommendation = resolver::resolve(
        profile.crop,
        profile.soil,
        profile.region,
        profile.weather,
        date,
    );

    let mut md = String::new();

    md.push_str("# Agricultural Advisory Report\n\n");
    if let Some(location) = &profile.location_name {
        md.push_str(&format!("**Location:** {}\n\n", location));
    }
    if let Some(climate) = &profile.climate_summary {
        md.push_str(&format!("**Climate:** {}\n\n", climate));
    } else {
        md.push_str(&format!(
            "**Climate:** {}\n\n",
            region_profile(profile.region).climate_suitability
        ));
    }
    let soil_label = profile
        .soil
        .map(|s| s.as_str())
        .unwrap_or("Unspecified soil");
    md.push_str(&format!(
        "**Region:** {} | **Soil:** {} | **Weather:** {}\n\n",
        profile.region, soil_label, profile.weather
    ));

    push_crop_recommendations(&mut md, profile);
    push_soil_preparation(&mut md, profile, &recommendation.fertilizer);
    push_irrigation_plan(&mut md, &recommendation.irrigation, profile);
    push_pest_management(&mut md, &recommendation.pest_control);
    push_sustainability(&mut md, profile);
    push_additional_notes(&mut md, &recommendation, profile);

    AdvisoryReport {
        recommendation,
        markdown: md,
    }
}

/// Top three crops for the profile: typed entries from the region's crop
/// list first, then crops whose suitability list covers the profile's soil.
pub fn top_crops(profile: &FarmProfile) -> Vec<Crop> {
    let region = region_profile(profile.region);
    let mut picks: Vec<Crop> = Vec::with_capacity(3);

    for name in region.common_crops {
        if let Some(crop) = Crop::from_str(name) {
            if !picks.contains(&crop) {
                picks.push(crop);
            }
        }
        if picks.len() == 3 {
            return picks;
        }
    }

    if let Some(soil) = profile.soil {
        for crop in Crop::ALL {
            if picks.len() == 3 {
                break;
            }
            if !picks.contains(&crop) && soil_suitability(crop).contains(&soil) {
                picks.push(crop);
            }
        }
    }

    for crop in Crop::ALL {
        if picks.len() == 3 {
            break;
        }
        if !picks.contains(&crop) {
            picks.push(crop);
        }
    }

    picks
}

fn push_crop_recommendations(md: &mut String, profile: &FarmProfile) {
    md.push_str("## 1. Top 3 Crop Recommendations\n\n");
    for crop in top_crops(profile) {
        let details = tables::crop_details(crop);
        let soils: Vec<&str> = soil_suitability(crop).iter().map(|s| s.as_str()).collect();
        md.push_str(&format!(
            "- **{}**: suited to {} soils. Planting window: {}. Duration: {}.\n",
            crop,
            soils.join(", "),
            details.growing_season,
            details.duration
        ));
    }
    md.push('\n');
}

fn push_soil_preparation(md: &mut String, profile: &FarmProfile, fertilizer: &str) {
    md.push_str("## 2. Soil Preparation & Amendments\n\n");

    if let Some(ph) = profile.soil_ph {
        let ph_note = if ph < 6.0 {
            "This is slightly acidic soil, suitable for crops like potatoes, blueberries, and \
             certain varieties of beans."
        } else if ph > 7.5 {
            "This is alkaline soil, suitable for crops like asparagus, beets, and cabbage."
        } else {
            "This is neutral to slightly alkaline soil, which is excellent for a wide variety \
             of crops."
        };
        md.push_str(&format!("- Soil pH is {:.1}. {}\n", ph, ph_note));
    }

    match profile.organic_matter.as_deref() {
        Some("low") => md.push_str(
            "- Organic matter is low. Incorporate well-decomposed farmyard manure or compost \
             before sowing.\n",
        ),
        Some("high") => md.push_str(
            "- Organic matter is high. Reduce basal nitrogen accordingly and avoid fresh \
             manure close to sowing.\n",
        ),
        _ => md.push_str(
            "- Maintain organic matter with crop residue incorporation or green manuring.\n",
        ),
    }

    md.push_str(&format!("- {}\n\n", fertilizer));
}

fn push_irrigation_plan(md: &mut String, irrigation: &str, profile: &FarmProfile) {
    md.push_str("## 3. Irrigation Plan\n\n");
    md.push_str(&format!("{}\n", irrigation));

    if let Some(source) = &profile.water_source {
        let lower = source.to_lowercase();
        let note = if lower.contains("rain") {
            "With good rainfall, you can rely primarily on natural precipitation for many \
             crops, but you may need supplemental irrigation during dry periods."
        } else if lower.contains("river") {
            "Having access to river water provides a reliable irrigation source, which is \
             excellent for water-intensive crops."
        } else if lower.contains("well") {
            "Wells provide consistent water access, but you may need to monitor water usage \
             especially for water-intensive crops."
        } else {
            "With limited natural water sources, you'll need efficient irrigation systems. \
             Consider drip irrigation or other water-conserving methods."
        };
        md.push_str(&format!("\n{}\n", note));
    }
    md.push('\n');
}

fn push_pest_management(md: &mut String, pest_control: &str) {
    md.push_str("## 4. Pest & Disease Management\n\n");
    md.push_str(&format!("- {}\n", pest_control));
    md.push_str(&format!("- {}\n\n", tables::GENERIC_PEST_CONTROL));
}

fn push_sustainability(md: &mut String, profile: &FarmProfile) {
    md.push_str("## 5. Sustainability Recommendations\n\n");
    md.push_str(
        "- Rotate with pulses where possible; they improve soil health and break pest cycles.\n",
    );
    md.push_str("- Prefer neem-based and biological controls before chemical intervention.\n");
    if matches!(
        profile.weather,
        WeatherCondition::Dry | WeatherCondition::Drought
    ) {
        md.push_str("- Mulch to conserve soil moisture and suppress weeds under dry spells.\n");
    } else {
        md.push_str("- Use drip irrigation where feasible to conserve water.\n");
    }
    md.push('\n');
}

fn push_additional_notes(
    md: &mut String,
    recommendation: &CropRecommendation,
    profile: &FarmProfile,
) {
    md.push_str("## 6. Additional Notes\n\n");
    md.push_str(&format!(
        "- Estimated current stage for {}: {}.\n",
        recommendation.name, recommendation.stage
    ));
    if let Some(season) = &profile.season {
        md.push_str(&format!("- Current season: {}.\n", season));
    }
    if let Some(rainfall) = &profile.rainfall_forecast {
        md.push_str(&format!("- Rainfall outlook: {}.\n", rainfall));
    } else {
        let typical: Vec<&str> = region_profile(profile.region)
            .typical_weather
            .iter()
            .map(|w| w.as_str())
            .collect();
        md.push_str(&format!(
            "- Typical weather for {}: {}.\n",
            profile.region,
            typical.join(", ")
        ));
    }
    if let Some(equipment) = &profile.equipment {
        md.push_str(&format!("- Equipment on hand: {}.\n", equipment));
    }
    if let Some(labor) = &profile.labor {
        md.push_str(&format!("- Labor availability: {}.\n", labor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Region, SoilType};

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
    }

    fn west_india_profile() -> FarmProfile {
        let mut profile = FarmProfile::new(
            Some(Crop::Cotton),
            Some(SoilType::BlackCotton),
            Region::WestIndia,
            WeatherCondition::Warm,
        );
        profile.soil_ph = Some(6.5);
        profile.organic_matter = Some("moderate".to_string());
        profile.season = Some("Kharif".to_string());
        profile.water_source = Some("rainfall".to_string());
        profile
    }

    #[test]
    fn report_contains_protocol_headings_in_order() {
        let report = assemble_report(&west_india_profile(), fixed_date());
        let md = &report.markdown;

        let h1 = md.find("## 1. Top 3 Crop Recommendations").unwrap();
        let h3 = md.find("## 3. Irrigation Plan").unwrap();
        let h6 = md.find("## 6. Additional Notes").unwrap();
        assert!(h1 < h3 && h3 < h6);
        assert!(md.contains("## 2. Soil Preparation & Amendments"));
        assert!(md.contains("## 4. Pest & Disease Management"));
        assert!(md.contains("## 5. Sustainability Recommendations"));
    }

    #[test]
    fn report_embeds_resolver_output() {
        let report = assemble_report(&west_india_profile(), fixed_date());
        assert!(report.markdown.contains(&report.recommendation.irrigation));
        assert_eq!(report.recommendation.name, "Cotton");
    }

    #[test]
    fn top_crops_always_returns_three() {
        for region in Region::ALL {
            for soil in SoilType::ALL {
                let profile = FarmProfile::new(
                    Some(Crop::Wheat),
                    Some(soil),
                    region,
                    WeatherCondition::Normal,
                );
                let picks = top_crops(&profile);
                assert_eq!(picks.len(), 3, "region {region} soil {soil}");
                let mut dedup = picks.clone();
                dedup.dedup();
                assert_eq!(dedup.len(), 3);
            }
        }
    }

    #[test]
    fn top_crops_handles_unselected_soil() {
        let profile = FarmProfile::default();
        assert_eq!(top_crops(&profile).len(), 3);
    }

    #[test]
    fn west_india_top_crops_start_with_cotton_and_groundnut() {
        let picks = top_crops(&west_india_profile());
        assert_eq!(picks[0], Crop::Cotton);
        assert_eq!(picks[1], Crop::Groundnut);
    }

    #[test]
    fn ph_commentary_tracks_thresholds() {
        let mut profile = west_india_profile();
        profile.soil_ph = Some(5.2);
        let report = assemble_report(&profile, fixed_date());
        assert!(report.markdown.contains("slightly acidic"));

        profile.soil_ph = Some(8.0);
        let report = assemble_report(&profile, fixed_date());
        assert!(report.markdown.contains("alkaline soil"));
    }

    #[test]
    fn rainfall_outlook_replaces_typical_weather_note() {
        let mut profile = west_india_profile();
        profile.rainfall_forecast = Some("Light rain possible".to_string());
        let report = assemble_report(&profile, fixed_date());
        assert!(report.markdown.contains("Rainfall outlook: Light rain possible."));
        assert!(!report.markdown.contains("Typical weather for"));
    }
}
