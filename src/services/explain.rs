/// Explanation Composer
///
/// Builds the per-item justification strings by cross-referencing the
/// answers that produced a recommendation against the fetched detail
/// record. Pure text composition: absent or unmatched answers simply
/// omit their clause, and composition never fails.
use crate::models::{quick_axis, ContentSummary, DeepResponses};

/// Feeling clauses for the Quick flow, in match order
const FEELING_CLAUSES: &[(&str, &str)] = &[
    ("happy", "its uplifting story will leave you feeling joyful"),
    ("inspired", "it contains inspiring themes that can motivate you"),
    ("thoughtful", "it offers deep themes that will make you reflect"),
    (
        "thrilled",
        "its exciting narrative will keep you on the edge of your seat",
    ),
    ("relaxed", "its gentle pacing and tone can help you unwind"),
];

/// Mood clauses keyed off the "welcome" step of the Deep flow
const MOOD_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["great", "energetic"],
        "This choice matches your energetic mood with its dynamic pacing.",
    ),
    (
        &["relaxed", "calm"],
        "This selection complements your relaxed state with its soothing narrative flow.",
    ),
    (
        &["down", "stressed"],
        "Given your current stress levels, this content offers a comforting escape.",
    ),
    (
        &["reflective"],
        "This thoughtful piece aligns with your reflective mood.",
    ),
];

/// Situation clauses keyed off the "life-situation" step
const SITUATION_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["change"],
        "The transformation themes mirror your own life changes.",
    ),
    (
        &["inspiration"],
        "Its inspiring narrative may provide the motivation you're seeking.",
    ),
    (
        &["celebrating"],
        "The uplifting elements complement your celebratory mood.",
    ),
    (
        &["escape"],
        "It offers the perfect escape from routine you mentioned wanting.",
    ),
];

/// Theme clauses keyed off the "themes" step
const THEME_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["growth"],
        "The personal growth journey at its core addresses your interest in transformation.",
    ),
    (
        &["relationships"],
        "Its exploration of human connections matches your interest in relationships.",
    ),
    (
        &["adventure"],
        "The adventurous spirit of this content aligns with your desire for exploration.",
    ),
    (
        &["social"],
        "Its examination of social issues resonates with your interest in justice and society.",
    ),
    (
        &["philosophical"],
        "The philosophical questions it raises should satisfy your interest in life's deeper meanings.",
    ),
];

/// Ordered (response key, clause table) pairs for the Deep flow
const DEEP_CLAUSE_STEPS: &[(&str, &[(&[&str], &str)])] = &[
    ("welcome", MOOD_CLAUSES),
    ("life-situation", SITUATION_CLAUSES),
    ("themes", THEME_CLAUSES),
];

/// Composes the Quick Peek justification for one recommended item
///
/// Always produces a single period-terminated sentence. The feeling
/// clause falls back to a generic genre-preference clause when the
/// first answer matches no known feeling.
pub fn explain_quick(detail: &ContentSummary, answers: &[String]) -> String {
    let genre_string = detail.genres.join(", ");
    let mut explanation = format!("This {genre_string} film was selected because ");

    let feeling = answers
        .get(quick_axis::FEELING)
        .map(|answer| answer.to_lowercase())
        .and_then(|answer| {
            FEELING_CLAUSES
                .iter()
                .find(|(keyword, _)| answer.contains(keyword))
                .map(|(_, clause)| *clause)
        });
    match feeling {
        Some(clause) => explanation.push_str(clause),
        None => {
            explanation.push_str(&format!(
                "it matches your genre preferences ({genre_string})"
            ));
        }
    }

    if let Some(pace) = answers.get(quick_axis::PACE) {
        let pace = pace.to_lowercase();
        if pace.contains("action") {
            explanation.push_str(" and delivers the action-packed experience you requested");
        } else if pace.contains("dialogue") {
            explanation.push_str(" and features the rich dialogue you enjoy");
        }
    }

    if let Some(acclaim) = answers.get(quick_axis::ACCLAIM) {
        let acclaim = acclaim.to_lowercase();
        let acclaimed = acclaim.contains("acclaimed") || acclaim.contains("award");
        if acclaimed && detail.vote_average > 7.5 {
            explanation.push_str(&format!(
                ". With a strong rating of {:.1}, it's well-received by critics and audiences",
                detail.vote_average
            ));
        }
        let hidden = acclaim.contains("hidden") || acclaim.contains("gem");
        if hidden && detail.vote_count < 1000 {
            explanation.push_str(". It's a hidden gem that hasn't received mainstream attention yet");
        }
    }

    explanation.push('.');
    explanation
}

/// Composes the Deep Down justification for one recommended item
///
/// Walks the response keys in a fixed order; each present key whose
/// value matches its vocabulary contributes one complete sentence.
/// An empty string is a valid result when nothing matches.
pub fn explain_deep(_detail: &ContentSummary, responses: &DeepResponses) -> String {
    let mut sentences = Vec::new();

    for (key, clauses) in DEEP_CLAUSE_STEPS {
        let Some(value) = responses.get(*key) else {
            continue;
        };
        let text = value.as_text().to_lowercase();
        let matched = clauses
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
            .map(|(_, clause)| *clause);
        if let Some(clause) = matched {
            sentences.push(clause);
        }
    }

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentKind, ResponseValue};

    fn detail(vote_average: f64, vote_count: u64) -> ContentSummary {
        ContentSummary {
            id: 27205,
            title: "Inception".to_string(),
            poster_path: None,
            overview: String::new(),
            vote_average,
            vote_count,
            genres: vec!["Action".to_string(), "Science Fiction".to_string()],
            kind: ContentKind::Movie,
        }
    }

    fn quick_answers(feeling: &str, pace: &str, acclaim: &str) -> Vec<String> {
        vec![
            feeling.to_string(),
            String::new(),
            pace.to_string(),
            String::new(),
            acclaim.to_string(),
            String::new(),
        ]
    }

    #[test]
    fn test_quick_feeling_clause_leads_the_sentence() {
        let answers = quick_answers("I want to feel thrilled", "", "");
        let text = explain_quick(&detail(8.4, 34000), &answers);
        assert_eq!(
            text,
            "This Action, Science Fiction film was selected because \
             its exciting narrative will keep you on the edge of your seat."
        );
    }

    #[test]
    fn test_quick_unmatched_feeling_falls_back_to_genres() {
        let answers = quick_answers("melancholic", "", "");
        let text = explain_quick(&detail(8.4, 34000), &answers);
        assert!(text.contains("it matches your genre preferences (Action, Science Fiction)"));
    }

    #[test]
    fn test_quick_action_beats_dialogue_when_both_mentioned() {
        let answers = quick_answers("happy", "action with sharp dialogue", "");
        let text = explain_quick(&detail(8.4, 34000), &answers);
        assert!(text.contains("delivers the action-packed experience"));
        assert!(!text.contains("rich dialogue"));
    }

    #[test]
    fn test_quick_acclaim_clause_requires_high_rating() {
        let answers = quick_answers("happy", "", "critically acclaimed");
        let praised = explain_quick(&detail(8.2, 34000), &answers);
        assert!(praised.contains("With a strong rating of 8.2"));

        let middling = explain_quick(&detail(6.9, 34000), &answers);
        assert!(!middling.contains("strong rating"));
    }

    #[test]
    fn test_quick_hidden_gem_clause_requires_low_vote_count() {
        let answers = quick_answers("happy", "", "hidden gem");
        let obscure = explain_quick(&detail(7.0, 412), &answers);
        assert!(obscure.contains("hidden gem that hasn't received mainstream attention"));

        let popular = explain_quick(&detail(7.0, 25000), &answers);
        assert!(!popular.contains("hidden gem"));
    }

    #[test]
    fn test_quick_always_terminates_with_period() {
        let text = explain_quick(&detail(5.0, 10), &quick_answers("", "", ""));
        assert!(text.ends_with('.'));
        assert!(text.starts_with("This Action, Science Fiction film was selected because"));
    }

    #[test]
    fn test_deep_sentences_follow_step_order() {
        let responses: DeepResponses = [
            (
                "themes".to_string(),
                ResponseValue::Many(vec!["adventure".to_string()]),
            ),
            (
                "welcome".to_string(),
                ResponseValue::Text("feeling energetic".to_string()),
            ),
        ]
        .into_iter()
        .collect();

        let text = explain_deep(&detail(8.0, 1000), &responses);
        assert_eq!(
            text,
            "This choice matches your energetic mood with its dynamic pacing. \
             The adventurous spirit of this content aligns with your desire for exploration."
        );
    }

    #[test]
    fn test_deep_social_issues_matches_on_social() {
        let responses: DeepResponses = [(
            "themes".to_string(),
            ResponseValue::Text("social issues".to_string()),
        )]
        .into_iter()
        .collect();

        let text = explain_deep(&detail(8.0, 1000), &responses);
        assert!(text.contains("examination of social issues"));
    }

    #[test]
    fn test_deep_unmatched_responses_yield_empty_string() {
        let responses: DeepResponses = [(
            "welcome".to_string(),
            ResponseValue::Text("ambivalent".to_string()),
        )]
        .into_iter()
        .collect();

        assert_eq!(explain_deep(&detail(8.0, 1000), &responses), "");
    }

    #[test]
    fn test_deep_first_matching_mood_wins() {
        let responses: DeepResponses = [(
            "welcome".to_string(),
            ResponseValue::Text("great but also stressed".to_string()),
        )]
        .into_iter()
        .collect();

        let text = explain_deep(&detail(8.0, 1000), &responses);
        assert!(text.contains("energetic mood"));
        assert!(!text.contains("stress levels"));
    }
}
