/// Filter Mapper
///
/// Translates user answers into catalog search filters through ordered
/// keyword-rule tables. Both mappers are pure and total: unrecognized,
/// absent, or blank answers simply add no constraint, and an input that
/// matches nothing maps to `QueryFilters::default()`.
///
/// The two flows intentionally differ in how genre selections combine.
/// Quick Peek axes append to the include list in axis order; Deep Down
/// keys overwrite the whole inclusion selection, so the last matching
/// key wins. Both policies are locked by tests below.
use crate::models::{
    Certification, DeepResponses, MediaTarget, QueryFilters, SortOrder, QUICK_ANSWER_COUNT,
};

/// What a matched rule does to the accumulating filters
#[derive(Debug, Clone, Copy)]
enum FilterEffect {
    /// Quick flow: append genre codes after any earlier contribution
    AppendGenres(&'static str),
    /// Deep flow: replace the inclusion selection with these genre codes
    SelectGenres(&'static str),
    /// Deep flow: replace the inclusion selection with these keyword ids
    SelectKeywords(&'static str),
    ExcludeGenres(&'static str),
    Sort(SortOrder),
    VoteAverageGte(f64),
    VoteCountGte(u32),
    VoteCountLte(u32),
    Media(MediaTarget),
    Certify {
        country: &'static str,
        ratings: &'static str,
    },
}

/// One entry of an axis vocabulary: first containment match wins
struct KeywordRule {
    keyword: &'static str,
    effects: &'static [FilterEffect],
}

const fn rule(keyword: &'static str, effects: &'static [FilterEffect]) -> KeywordRule {
    KeywordRule { keyword, effects }
}

// Quick Peek axis vocabularies, in evaluation order within each axis.

const FEELING_RULES: &[KeywordRule] = &[
    rule("happy", &[FilterEffect::AppendGenres("35,10749")]),
    rule("relaxed", &[FilterEffect::AppendGenres("35,10749")]),
    rule("inspired", &[FilterEffect::AppendGenres("18,36")]),
    rule("thoughtful", &[FilterEffect::AppendGenres("18,99")]),
    rule("thrilled", &[FilterEffect::AppendGenres("28,53,27")]),
];

const STORY_RULES: &[KeywordRule] = &[
    rule("adventure", &[FilterEffect::AppendGenres("12")]),
    rule("romance", &[FilterEffect::AppendGenres("10749")]),
    rule("mystery", &[FilterEffect::AppendGenres("9648")]),
    rule("drama", &[FilterEffect::AppendGenres("18")]),
    rule("comedy", &[FilterEffect::AppendGenres("35")]),
];

const PACE_RULES: &[KeywordRule] = &[rule("action", &[FilterEffect::AppendGenres("28")])];

const FAMILIARITY_RULES: &[KeywordRule] = &[
    rule("familiar", &[FilterEffect::Sort(SortOrder::PopularityDesc)]),
    rule(
        "different",
        &[
            FilterEffect::Sort(SortOrder::VoteCountAsc),
            FilterEffect::VoteCountGte(100),
        ],
    ),
    rule(
        "indie",
        &[
            FilterEffect::Sort(SortOrder::VoteCountAsc),
            FilterEffect::VoteCountGte(100),
        ],
    ),
];

const ACCLAIM_RULES: &[KeywordRule] = &[
    rule(
        "acclaimed",
        &[
            FilterEffect::VoteAverageGte(7.5),
            FilterEffect::Sort(SortOrder::VoteAverageDesc),
        ],
    ),
    rule(
        "award",
        &[
            FilterEffect::VoteAverageGte(7.5),
            FilterEffect::Sort(SortOrder::VoteAverageDesc),
        ],
    ),
    rule(
        "hidden",
        &[
            FilterEffect::VoteCountLte(1000),
            FilterEffect::VoteAverageGte(6.5),
        ],
    ),
    rule(
        "gem",
        &[
            FilterEffect::VoteCountLte(1000),
            FilterEffect::VoteAverageGte(6.5),
        ],
    ),
];

const RESTRICTION_RULES: &[KeywordRule] = &[
    rule("no violence", &[FilterEffect::ExcludeGenres("28,27,53")]),
    rule(
        "family-friendly",
        &[FilterEffect::Certify {
            country: "US",
            ratings: "G|PG",
        }],
    ),
];

/// Quick Peek axes in index order 0..6
const QUICK_AXES: [&[KeywordRule]; QUICK_ANSWER_COUNT] = [
    FEELING_RULES,
    STORY_RULES,
    PACE_RULES,
    FAMILIARITY_RULES,
    ACCLAIM_RULES,
    RESTRICTION_RULES,
];

// Deep Down step vocabularies, keyed and ordered as the conversation runs.

const WELCOME_RULES: &[KeywordRule] = &[
    rule("great", &[FilterEffect::SelectGenres("28,12,35")]),
    rule("energetic", &[FilterEffect::SelectGenres("28,12,35")]),
    rule("relaxed", &[FilterEffect::SelectGenres("18,10749")]),
    rule("calm", &[FilterEffect::SelectGenres("18,10749")]),
    rule("down", &[FilterEffect::SelectGenres("35,10751")]),
    rule("stressed", &[FilterEffect::SelectGenres("35,10751")]),
    rule("bored", &[FilterEffect::SelectGenres("28,12,14")]),
    rule("reflective", &[FilterEffect::SelectGenres("18,99")]),
    rule("introspective", &[FilterEffect::SelectGenres("18,99")]),
];

const CONTENT_TYPE_RULES: &[KeywordRule] = &[
    rule("movies", &[FilterEffect::Media(MediaTarget::Movie)]),
    rule("series", &[FilterEffect::Media(MediaTarget::Tv)]),
];

const LIFE_SITUATION_RULES: &[KeywordRule] = &[
    rule("change", &[FilterEffect::SelectKeywords("818,9715")]),
    rule(
        "inspiration",
        &[FilterEffect::SelectKeywords("161527,161664")],
    ),
    rule("celebrating", &[FilterEffect::SelectKeywords("8866,183")]),
    rule("escape", &[FilterEffect::SelectKeywords("4344,9663")]),
    rule("learn", &[FilterEffect::VoteAverageGte(7.0)]),
];

const EMOTIONAL_NEED_RULES: &[KeywordRule] = &[
    rule("comfort", &[FilterEffect::SelectGenres("10751,35,18")]),
    rule("motivation", &[FilterEffect::SelectGenres("18,36")]),
    rule("laugh", &[FilterEffect::SelectGenres("35")]),
    rule("intellectual", &[FilterEffect::SelectGenres("99,878,9648")]),
    rule("cathartic", &[FilterEffect::SelectGenres("18,10752")]),
];

const THEME_RULES: &[KeywordRule] = &[
    rule("growth", &[FilterEffect::SelectKeywords("818,187686")]),
    rule("relationships", &[FilterEffect::SelectKeywords("9823,6054")]),
    rule("adventure", &[FilterEffect::SelectKeywords("4344,9882")]),
    rule(
        "social issues",
        &[FilterEffect::SelectKeywords("10153,15099")],
    ),
    rule(
        "philosophical",
        &[FilterEffect::SelectKeywords("6152,6003")],
    ),
];

const DEEP_PACE_RULES: &[KeywordRule] = &[
    rule("fast-paced", &[FilterEffect::SelectGenres("28,53,80")]),
    rule("slow", &[FilterEffect::SelectGenres("18,36,99")]),
];

const FINAL_RULES: &[KeywordRule] = &[
    rule(
        "avoid violence",
        &[FilterEffect::ExcludeGenres("28,27,53,10752")],
    ),
    rule("uplifting", &[FilterEffect::SelectKeywords("183,6582")]),
];

/// Deep Down steps in evaluation order
const DEEP_STEPS: [(&str, &[KeywordRule]); 7] = [
    ("welcome", WELCOME_RULES),
    ("content-type", CONTENT_TYPE_RULES),
    ("life-situation", LIFE_SITUATION_RULES),
    ("emotional-need", EMOTIONAL_NEED_RULES),
    ("themes", THEME_RULES),
    ("pace", DEEP_PACE_RULES),
    ("final", FINAL_RULES),
];

fn apply_effects(filters: &mut QueryFilters, effects: &[FilterEffect]) {
    for effect in effects {
        match *effect {
            FilterEffect::AppendGenres(codes) => filters.append_genres(codes),
            FilterEffect::SelectGenres(codes) => filters.select_genres(codes),
            FilterEffect::SelectKeywords(ids) => filters.select_keywords(ids),
            FilterEffect::ExcludeGenres(codes) => {
                filters.genres_exclude = Some(codes.to_string())
            }
            FilterEffect::Sort(order) => filters.sort_by = order,
            FilterEffect::VoteAverageGte(threshold) => {
                filters.vote_average_gte = Some(threshold)
            }
            FilterEffect::VoteCountGte(count) => filters.vote_count_gte = Some(count),
            FilterEffect::VoteCountLte(count) => filters.vote_count_lte = Some(count),
            FilterEffect::Media(target) => filters.media_type = target,
            FilterEffect::Certify { country, ratings } => {
                filters.certification = Some(Certification {
                    country: country.to_string(),
                    ratings: ratings.to_string(),
                })
            }
        }
    }
}

/// Applies the first rule whose keyword the answer contains, if any
fn apply_axis(filters: &mut QueryFilters, rules: &[KeywordRule], answer: &str) {
    if answer.trim().is_empty() {
        return;
    }
    let folded = answer.to_lowercase();
    if let Some(matched) = rules.iter().find(|r| folded.contains(r.keyword)) {
        apply_effects(filters, matched.effects);
    }
}

/// Maps the six Quick Peek answers to catalog filters
///
/// Axes are evaluated in index order; genre contributions append in that
/// order, while sort and threshold effects overwrite. Callers are
/// expected to have validated the sequence length; extra entries are
/// ignored and missing ones contribute nothing.
pub fn map_quick_answers(answers: &[String]) -> QueryFilters {
    let mut filters = QueryFilters::default();
    for (rules, answer) in QUICK_AXES.iter().zip(answers.iter()) {
        apply_axis(&mut filters, rules, answer);
    }
    filters
}

/// Maps Deep Down conversation responses to catalog filters
///
/// Steps are evaluated in the fixed conversation order regardless of map
/// iteration order. A matched inclusion rule replaces any earlier genre
/// or keyword selection; unknown or absent keys are skipped.
pub fn map_deep_responses(responses: &DeepResponses) -> QueryFilters {
    let mut filters = QueryFilters::default();
    for (key, rules) in DEEP_STEPS {
        if let Some(value) = responses.get(key) {
            apply_axis(&mut filters, rules, &value.as_text());
        }
    }
    filters
}
