use serde::{Deserialize, Serialize};

/// Type of content returned by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

/// The catalog's record for one recommendable item
///
/// Immutable once fetched. Discover results carry genre ids only, so
/// summaries coming from search have an empty `genres` list until the
/// per-item detail fetch fills it in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: String,
    /// 0-10 scale
    pub vote_average: f64,
    pub vote_count: u64,
    /// Ordered genre names
    pub genres: Vec<String>,
    pub kind: ContentKind,
}

/// One recommended item as returned to the client
///
/// Constructed once per response cycle, never persisted. The `type` tag
/// is only serialized for the Deep flow.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: String,
    pub vote_average: f64,
    pub genres: Vec<String>,
    pub explanation: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
}

impl Recommendation {
    /// Builds a recommendation from a fetched detail record
    pub fn from_summary(summary: ContentSummary, explanation: String, tagged: bool) -> Self {
        let kind = tagged.then_some(summary.kind);
        Self {
            id: summary.id,
            title: summary.title,
            poster_path: summary.poster_path,
            overview: summary.overview,
            vote_average: summary.vote_average,
            genres: summary.genres,
            explanation,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ContentSummary {
        ContentSummary {
            id: 27205,
            title: "Inception".to_string(),
            poster_path: Some("/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg".to_string()),
            overview: "A skilled thief infiltrates the subconscious.".to_string(),
            vote_average: 8.4,
            vote_count: 34000,
            genres: vec!["Action".to_string(), "Science Fiction".to_string()],
            kind: ContentKind::Movie,
        }
    }

    #[test]
    fn test_content_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ContentKind::Movie).unwrap(),
            "\"movie\""
        );
        assert_eq!(
            serde_json::to_string(&ContentKind::Series).unwrap(),
            "\"series\""
        );
    }

    #[test]
    fn test_quick_recommendation_omits_type_tag() {
        let rec = Recommendation::from_summary(summary(), "Because.".to_string(), false);
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("type").is_none());
        assert_eq!(json["title"], "Inception");
        assert_eq!(json["explanation"], "Because.");
    }

    #[test]
    fn test_deep_recommendation_carries_type_tag() {
        let rec = Recommendation::from_summary(summary(), String::new(), true);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "movie");
    }
}
