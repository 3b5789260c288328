use crate::models::{Crop, CropDetails, Region, RegionProfile, SoilType, WeatherCondition};

/// Static reference data for one macro-region.
pub fn region_profile(region: Region) -> RegionProfile {
    use WeatherCondition::*;
    match region {
        Region::NorthIndia => RegionProfile {
            common_crops: &["Wheat", "Rice", "Sugarcane", "Mustard"],
            common_soils: &["Alluvial", "Clay Loam", "Sandy Loam"],
            climate_suitability: "Wide temperature variation from cold winters to hot summers. \
                 Suitable for wheat, rice rotation.",
            typical_weather: &[Cold, Dry, Warm],
        },
        Region::SouthIndia => RegionProfile {
            common_crops: &["Rice", "Coconut", "Spices", "Millets"],
            common_soils: &["Red", "Laterite", "Black Cotton"],
            climate_suitability: "Tropical climate with hot and humid conditions. Good for \
                 plantation crops and multiple rice seasons.",
            typical_weather: &[Warm, Humid, HeavyRainfall],
        },
        Region::EastIndia => RegionProfile {
            common_crops: &["Rice", "Jute", "Tea", "Maize"],
            common_soils: &["Alluvial", "Red", "Laterite"],
            climate_suitability: "High rainfall and humidity. Excellent for water-intensive \
                 crops like rice and jute.",
            typical_weather: &[Humid, HeavyRainfall, Warm],
        },
        Region::WestIndia => RegionProfile {
            common_crops: &["Cotton", "Groundnut", "Jowar", "Bajra"],
            common_soils: &["Black Cotton", "Sandy", "Alluvial"],
            climate_suitability: "Arid to semi-arid conditions. Suitable for drought-resistant \
                 crops like millets and pulses.",
            typical_weather: &[Dry, Warm],
        },
        Region::CentralIndia => RegionProfile {
            common_crops: &["Soybean", "Cotton", "Pulses", "Wheat"],
            common_soils: &["Black Cotton", "Medium Black", "Mixed Red and Black"],
            climate_suitability: "Moderate rainfall. Good for commercial crops like soybean \
                 and cotton.",
            typical_weather: &[Normal, Warm],
        },
        Region::NortheastIndia => RegionProfile {
            common_crops: &["Rice", "Tea", "Bamboo", "Citrus Fruits"],
            common_soils: &["Acidic", "Red", "Alluvial"],
            climate_suitability: "High rainfall and humidity. Good for tea plantations and \
                 horticultural crops.",
            typical_weather: &[HeavyRainfall, Humid],
        },
    }
}

/// Compatible soil types per crop, most suitable first.
pub fn soil_suitability(crop: Crop) -> &'static [SoilType] {
    use SoilType::*;
    match crop {
        Crop::Wheat => &[Loamy, Clay, Sandy],
        Crop::Rice => &[Clay, Loamy, BlackCotton],
        Crop::Corn => &[Sandy, Loamy, Silty],
        Crop::Cotton => &[BlackCotton, Loamy, Clay],
        Crop::Sugarcane => &[Loamy, Sandy, Clay],
        Crop::Potato => &[Sandy, Loamy, Silty],
        Crop::Soybean => &[Loamy, Clay, BlackCotton],
        Crop::Chickpea => &[Sandy, Loamy, BlackCotton],
        Crop::Mustard => &[Sandy, Loamy, Silty],
        Crop::Groundnut => &[Sandy, Loamy],
    }
}

/// Ordered growth stage labels per crop. Always exactly six entries; the
/// stage estimator indexes into this modulo its length.
pub fn growth_stages(crop: Crop) -> &'static [&'static str; 6] {
    match crop {
        Crop::Wheat => &[
            "Planning",
            "Sowing",
            "Germination",
            "Tillering",
            "Heading",
            "Ripening",
        ],
        Crop::Rice => &[
            "Planning",
            "Seedling",
            "Vegetative",
            "Reproductive",
            "Ripening",
            "Harvesting",
        ],
        Crop::Corn => &[
            "Planning",
            "Seedling",
            "Vegetative",
            "Tasseling",
            "Silking",
            "Maturity",
        ],
        Crop::Cotton => &[
            "Planning",
            "Emergence",
            "Vegetative",
            "Flowering",
            "Boll Development",
            "Maturity",
        ],
        Crop::Sugarcane => &[
            "Planning",
            "Germination",
            "Tillering",
            "Grand Growth",
            "Maturation",
            "Harvesting",
        ],
        Crop::Potato => &[
            "Planning",
            "Sprouting",
            "Vegetative",
            "Tuberization",
            "Maturation",
            "Harvesting",
        ],
        Crop::Soybean => &[
            "Planning",
            "Emergence",
            "Vegetative",
            "Flowering",
            "Pod Development",
            "Maturity",
        ],
        Crop::Chickpea => &[
            "Planning",
            "Germination",
            "Vegetative",
            "Flowering",
            "Pod Formation",
            "Maturity",
        ],
        Crop::Mustard => &[
            "Planning",
            "Seedling",
            "Rosette",
            "Bolting",
            "Flowering",
            "Siliqua Formation",
        ],
        Crop::Groundnut => &[
            "Planning",
            "Germination",
            "Pegging",
            "Pod Development",
            "Kernel Development",
            "Maturity",
        ],
    }
}

/// Pest and disease scouting guidance per crop.
pub fn pest_control(crop: Crop) -> &'static str {
    match crop {
        Crop::Wheat => {
            "Monitor for aphids, rust and powdery mildew. Use resistant varieties and timely \
             fungicide application if necessary."
        }
        Crop::Rice => {
            "Regular scouting for stem borer, leaf folder and blast. Consider integrated pest \
             management strategies."
        }
        Crop::Corn => {
            "Watch for fall armyworm and stem borer. Consider bio-control agents for \
             sustainable management."
        }
        Crop::Cotton => {
            "Monitor for bollworm, whitefly and pink bollworm. Implement IPM with pheromone \
             traps and predator conservation."
        }
        Crop::Sugarcane => {
            "Be vigilant for early shoot borer and pyrilla. Trash mulching and light traps \
             can help reduce pest incidence."
        }
        Crop::Potato => {
            "Watch for late blight and tuber moth. Regular monitoring and preventative sprays \
             may be necessary."
        }
        Crop::Soybean => {
            "Monitor for girdle beetle and defoliators. Consider need-based insecticide \
             application."
        }
        Crop::Chickpea => {
            "Regular monitoring for pod borer. Use pheromone traps and timely insecticide \
             sprays."
        }
        Crop::Mustard => {
            "Watch for aphids and sawfly. Consider yellow sticky traps and need-based \
             insecticide application."
        }
        Crop::Groundnut => {
            "Monitor for leaf miner and Spodoptera. Consider light traps and need-based \
             insecticide application."
        }
    }
}

/// Generic pest guidance when no crop-specific entry applies.
pub const GENERIC_PEST_CONTROL: &str =
    "Regular monitoring and integrated pest management recommended.";

/// Generic irrigation and fertilizer sentences for the untyped narrative
/// path, where the soil type may be missing entirely.
pub const GENERIC_IRRIGATION: &str =
    "Maintain adequate soil moisture based on crop requirements.";
pub const GENERIC_FERTILIZER: &str =
    "Apply balanced NPK fertilizer according to soil test recommendations.";

/// Detailed agronomic facts per crop.
pub fn crop_details(crop: Crop) -> CropDetails {
    let (growing_season, water_requirements, soil_types, varieties, duration) = match crop {
        Crop::Rice => (
            "Kharif (June-November), Rabi (November-May) in irrigated areas",
            "1200-1800 mm throughout season",
            "Clayey or loamy soil with good water retention",
            "Basmati, IR-36, IR-64, Swarna, HMT",
            "120-150 days depending on variety",
        ),
        Crop::Wheat => (
            "Rabi season (November-April)",
            "450-650 mm throughout season",
            "Well-drained loam or clay loam soils",
            "HD-2967, PBW-343, WH-542, GW-273",
            "120-140 days",
        ),
        Crop::Corn => (
            "Kharif (June-October), Spring (January-May)",
            "500-800 mm throughout season",
            "Well-drained sandy loam to clay loam",
            "Hybrid varieties - DMH-849, NK-6240, P-3396",
            "95-110 days for most varieties",
        ),
        Crop::Cotton => (
            "April-May to October-November",
            "700-1300 mm throughout season",
            "Deep black cotton soils (vertisols) or well-drained alluvial soils",
            "Bt cotton hybrids - Bollgard II, JK-Durga, Bunny",
            "160-180 days for most varieties",
        ),
        Crop::Chickpea => (
            "Rabi (October-November to March-April)",
            "350-450 mm throughout season",
            "Well-drained loam or sandy loam soils with neutral pH",
            "Desi types: JG-11, JAKI-9218; Kabuli types: KAK-2, Vihar",
            "95-105 days for most varieties",
        ),
        Crop::Sugarcane => (
            "Spring planting (January-March), autumn planting (October)",
            "1500-2500 mm throughout season",
            "Deep, well-drained loamy soils",
            "Co-0238, Co-86032, CoM-0265",
            "10-12 months for most varieties",
        ),
        Crop::Potato => (
            "Rabi (October-December planting)",
            "500-700 mm throughout season",
            "Well-drained sandy loam rich in organic matter",
            "Kufri Jyoti, Kufri Pukhraj, Kufri Bahar",
            "90-120 days depending on variety",
        ),
        Crop::Soybean => (
            "Kharif (June-July sowing)",
            "450-700 mm throughout season",
            "Well-drained loam to clay loam",
            "JS-335, JS-9560, NRC-37",
            "90-110 days",
        ),
        Crop::Mustard => (
            "Rabi (October-November sowing)",
            "240-400 mm throughout season",
            "Loamy to sandy loam soils",
            "Pusa Bold, Varuna, RH-749",
            "110-140 days",
        ),
        Crop::Groundnut => (
            "Kharif (June-July), Summer (January-February) in irrigated areas",
            "500-700 mm throughout season",
            "Well-drained sandy loam with calcium availability",
            "TMV-2, JL-24, TAG-24",
            "100-130 days",
        ),
    };

    CropDetails {
        growing_season: growing_season.to_string(),
        water_requirements: water_requirements.to_string(),
        soil_types: soil_types.to_string(),
        varieties: varieties.to_string(),
        duration: duration.to_string(),
    }
}

/// A general cultivation practice entry for frequently grown crops.
pub struct GeneralPractice {
    pub name: &'static str,
    pub season: &'static str,
    pub advice: &'static str,
    pub cultivation: &'static str,
}

pub const GENERAL_PRACTICES: [GeneralPractice; 5] = [
    GeneralPractice {
        name: "Paddy Rice",
        season: "Kharif (Monsoon)",
        advice: "Ensure proper water management. Maintain 2-3 cm water level in fields.",
        cultivation: "Transplanting method is common. Use 15-20 day old seedlings for \
             transplanting.",
    },
    GeneralPractice {
        name: "Wheat",
        season: "Rabi (Winter)",
        advice: "Timely sowing is crucial for good yield. Optimal sowing time is first half \
             of November.",
        cultivation: "Line sowing at 22.5 cm row spacing is recommended for better yields.",
    },
    GeneralPractice {
        name: "Maize/Corn",
        season: "Both Kharif and Rabi",
        advice: "Use hybrid varieties for higher yield. Ensure proper spacing of 60x20 cm.",
        cultivation: "Ridge planting can help with better water management and root \
             development.",
    },
    GeneralPractice {
        name: "Mustard",
        season: "Rabi (Winter)",
        advice: "Early sowing (October) gives better yields. Avoid late sowing after November.",
        cultivation: "Line sowing at 30-45 cm row spacing is ideal. Thinning after 15-20 days \
             is recommended.",
    },
    GeneralPractice {
        name: "Pulses (General)",
        season: "Both seasons (crop dependent)",
        advice: "Seed treatment with Rhizobium culture enhances nitrogen fixation and yield.",
        cultivation: "These are good rotation crops that improve soil health and break pest \
             cycles.",
    },
];

/// A government support scheme listing. Display-only reference data.
pub struct SchemeListing {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const SCHEME_LISTINGS: [SchemeListing; 4] = [
    SchemeListing {
        name: "Pradhan Mantri Fasal Bima Yojana",
        summary: "Crop insurance scheme to protect farmers against crop failure",
    },
    SchemeListing {
        name: "PM-KISAN",
        summary: "Income support of Rs. 6000 per year to all landholding farmer families",
    },
    SchemeListing {
        name: "Kisan Credit Card",
        summary: "Short-term credit for cultivation and allied activities at concessional rates",
    },
    SchemeListing {
        name: "Soil Health Card Scheme",
        summary: "Periodic soil testing with crop-wise nutrient recommendations",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_reference_data() {
        for region in Region::ALL {
            let profile = region_profile(region);
            assert!(!profile.common_crops.is_empty());
            assert!(!profile.common_soils.is_empty());
            assert!(!profile.climate_suitability.is_empty());
            assert!(!profile.typical_weather.is_empty());
        }
    }

    #[test]
    fn every_crop_has_six_stages() {
        for crop in Crop::ALL {
            assert_eq!(growth_stages(crop).len(), 6);
        }
    }

    #[test]
    fn every_crop_has_details_and_pest_entry() {
        for crop in Crop::ALL {
            let details = crop_details(crop);
            assert!(!details.growing_season.is_empty());
            assert!(!details.varieties.is_empty());
            assert!(!pest_control(crop).is_empty());
        }
    }

    #[test]
    fn suitability_lists_are_ordered_and_nonempty() {
        for crop in Crop::ALL {
            assert!(!soil_suitability(crop).is_empty());
        }
    }

    #[test]
    fn west_india_profile_matches_source_data() {
        let profile = region_profile(Region::WestIndia);
        assert_eq!(
            profile.common_crops,
            &["Cotton", "Groundnut", "Jowar", "Bajra"]
        );
        assert_eq!(
            profile.typical_weather,
            &[WeatherCondition::Dry, WeatherCondition::Warm]
        );
    }
}
