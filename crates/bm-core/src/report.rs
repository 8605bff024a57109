//! Fingerprint report data model

use serde::{Deserialize, Serialize};

/// Uniqueness scores and advisory text for one completed analysis.
///
/// Scores are nominally 0-100 but not enforced; `top_reasons` and `tips`
/// render in insertion order and may be empty. A report is immutable once
/// produced and lives only for the duration of the Done phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub global_score: u32,
    pub local_score: u32,
    pub final_score: u32,
    pub top_reasons: Vec<Reason>,
    pub tips: Vec<String>,
}

/// One fingerprint surface and why it makes the browser stand out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub feature: String,
    pub reason: String,
}

impl Report {
    /// Canonical demo payload shown by the landing page mock
    pub fn sample() -> Self {
        Self {
            global_score: 78,
            local_score: 62,
            final_score: 71,
            top_reasons: vec![
                Reason {
                    feature: "webgl_vendor".to_string(),
                    reason: "Distinctive GPU/WebGL".to_string(),
                },
                Reason {
                    feature: "fontsCount".to_string(),
                    reason: "Unusual number of fonts".to_string(),
                },
            ],
            tips: vec![
                "Enable WebGL masking".to_string(),
                "Limit remote fonts in browser settings".to_string(),
            ],
        }
    }
}

/// Qualitative banding of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            71.. => ScoreBand::Strong,
            41..=70 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(71), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(41), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);
    }

    #[test]
    fn test_report_wire_shape() {
        let json = serde_json::to_value(Report::sample()).unwrap();
        assert_eq!(json["global_score"], 78);
        assert_eq!(json["local_score"], 62);
        assert_eq!(json["final_score"], 71);
        assert_eq!(json["top_reasons"][0]["feature"], "webgl_vendor");
        assert_eq!(json["top_reasons"][1]["reason"], "Unusual number of fonts");
        assert_eq!(json["tips"][0], "Enable WebGL masking");
    }

    #[test]
    fn test_report_roundtrip_preserves_order() {
        let report = Report::sample();
        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: Report = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, report);
        assert_eq!(decoded.top_reasons[0].feature, "webgl_vendor");
        assert_eq!(decoded.top_reasons[1].feature, "fontsCount");
    }

    #[test]
    fn test_empty_lists_allowed() {
        let report = Report {
            global_score: 10,
            local_score: 20,
            final_score: 15,
            top_reasons: Vec::new(),
            tips: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["top_reasons"].as_array().unwrap().is_empty());
        assert!(json["tips"].as_array().unwrap().is_empty());
    }
}
