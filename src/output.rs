use crate::SummaryOutcome;

/// Render the summary as plain text
pub fn render_text(outcome: &SummaryOutcome) -> String {
    outcome.summary.clone()
}

/// Render the full outcome (summary plus track metadata) as pretty JSON
pub fn render_json(outcome: &SummaryOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> SummaryOutcome {
        SummaryOutcome {
            video_id: "test123test".to_string(),
            title: "Test Video".to_string(),
            language: "ja".to_string(),
            auto_generated: false,
            summary: "・ポイント1\n・ポイント2".to_string(),
            from_cache: false,
        }
    }

    #[test]
    fn test_render_text() {
        let outcome = sample_outcome();
        assert_eq!(render_text(&outcome), "・ポイント1\n・ポイント2");
    }

    #[test]
    fn test_render_json_round_trips() {
        let outcome = sample_outcome();
        let json: serde_json::Value = serde_json::from_str(&render_json(&outcome)).unwrap();
        assert_eq!(json["video_id"], "test123test");
        assert_eq!(json["language"], "ja");
        assert_eq!(json["auto_generated"], false);
        assert_eq!(json["summary"], "・ポイント1\n・ポイント2");
    }
}
