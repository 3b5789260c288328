use serde::{Deserialize, Serialize};

/// Structured advisory output for one crop, produced fresh per resolver call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub name: String,
    pub stage: String,
    pub advice: String,
    pub irrigation: String,
    pub pest_control: String,
    pub fertilizer: String,
    pub details: CropDetails,
}

/// Static agronomic facts about a crop, independent of the farm profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropDetails {
    pub growing_season: String,
    pub water_requirements: String,
    pub soil_types: String,
    pub varieties: String,
    pub duration: String,
}

/// A titled slice of the markdown advisory report, as shown on dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorySection {
    pub title: String,
    pub content: String,
}

impl AdvisorySection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Full output of the report assembler: the structured recommendation plus
/// the rendered markdown document it was derived alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub recommendation: CropRecommendation,
    pub markdown: String,
}
