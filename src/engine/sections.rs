use regex_lite::Regex;

use crate::models::AdvisorySection;

/// The dashboard cards extracted from an advisory report, in display order:
/// heading pattern, card title.
const SECTION_PATTERNS: [(&str, &str); 3] = [
    (
        r"(?s)## 1\. Top 3 Crop Recommendations(.*?)(?:##|$)",
        "Crop Recommendations",
    ),
    (r"(?s)## 3\. Irrigation Plan(.*?)(?:##|$)", "Irrigation Advice"),
    (
        r"(?s)## 6\. Additional Notes(.*?)(?:##|$)",
        "Weather & Climate Notes",
    ),
];

/// Extract the dashboard sections from a markdown advisory report.
///
/// A report with none of the known headings degrades to three fixed default
/// cards; that fallback is an intentional behavior of the dashboard, not an
/// error path.
pub fn extract_sections(markdown: &str) -> Vec<AdvisorySection> {
    let mut sections = Vec::new();

    for (pattern, title) in SECTION_PATTERNS {
        // The patterns are literals; compilation cannot fail.
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        if let Some(caps) = re.captures(markdown) {
            if let Some(content) = caps.get(1) {
                let trimmed = content.as_str().trim();
                if !trimmed.is_empty() {
                    sections.push(AdvisorySection::new(title, trimmed));
                }
            }
        }
    }

    if sections.is_empty() {
        return default_sections();
    }

    sections
}

fn default_sections() -> Vec<AdvisorySection> {
    vec![
        AdvisorySection::new(
            "Crop Recommendations",
            "Based on your soil type and climate conditions, consider planting \
             drought-resistant varieties.",
        ),
        AdvisorySection::new(
            "Irrigation Advice",
            "Current precipitation levels suggest moderate irrigation needs. Use drip \
             irrigation where possible to conserve water.",
        ),
        AdvisorySection::new(
            "Weather Alert",
            "Weather changes expected in the coming days. Monitor conditions for \
             agricultural activities.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_known_sections() {
        let report = "# Report\n\n\
            ## 1. Top 3 Crop Recommendations\n\nCotton, Groundnut, Rice.\n\n\
            ## 3. Irrigation Plan\n\nModerate irrigation schedule.\n\n\
            ## 6. Additional Notes\n\nDry spell expected.\n";

        let sections = extract_sections(report);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Crop Recommendations");
        assert_eq!(sections[0].content, "Cotton, Groundnut, Rice.");
        assert_eq!(sections[1].title, "Irrigation Advice");
        assert_eq!(sections[1].content, "Moderate irrigation schedule.");
        assert_eq!(sections[2].title, "Weather & Climate Notes");
        assert_eq!(sections[2].content, "Dry spell expected.");
    }

    #[test]
    fn partial_headings_extract_what_is_present() {
        let report = "## 1. Top 3 Crop Recommendations\n\nWheat first.\n\n\
            ## 3. Irrigation Plan\n\nLight irrigation.\n";
        let sections = extract_sections(report);
        assert_eq!(sections.len(), 2);
        assert!(!sections[0].content.is_empty());
        assert!(!sections[1].content.is_empty());
    }

    #[test]
    fn unrecognized_report_falls_back_to_defaults() {
        let sections = extract_sections("just some prose with no headings");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Crop Recommendations");
        assert_eq!(sections[1].title, "Irrigation Advice");
        assert_eq!(sections[2].title, "Weather Alert");
        assert!(sections[0].content.contains("drought-resistant"));
    }

    #[test]
    fn heading_content_stops_at_next_heading() {
        let report = "## 1. Top 3 Crop Recommendations\nA\n## 2. Soil Preparation & Amendments\nB\n";
        let sections = extract_sections(report);
        assert_eq!(sections[0].content, "A");
    }

    #[test]
    fn assembled_report_round_trips_through_extractor() {
        use crate::engine::report::assemble_report;
        use crate::models::{
            Crop, FarmProfile, Region, SoilType, WeatherCondition,
        };
        let profile = FarmProfile::new(
            Some(Crop::Rice),
            Some(SoilType::Clay),
            Region::SouthIndia,
            WeatherCondition::Humid,
        );
        let date = chrono::NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let report = assemble_report(&profile, date);
        let sections = extract_sections(&report.markdown);
        assert_eq!(sections.len(), 3);
        for section in &sections {
            assert!(!section.content.is_empty());
        }
    }
}
