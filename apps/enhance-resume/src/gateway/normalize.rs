//! Response normalization: free-form completion text into the typed shapes
//! each kind promises.
//!
//! Bullet formatting is a best-effort heuristic: the "starts with a verb"
//! classifier only looks at word shape (`-ed`, `-ing`, `-s`), so it vouches for
//! capitalization, not grammar.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Canonical bullet prefix.
pub const BULLET: &str = "• ";

/// Fallback verbs prepended to sentences that do not already lead with one.
pub const ACTION_VERBS: &[&str] = &[
    "Developed",
    "Implemented",
    "Created",
    "Led",
    "Managed",
    "Executed",
    "Improved",
    "Achieved",
    "Increased",
    "Reduced",
    "Delivered",
    "Designed",
    "Established",
    "Coordinated",
    "Transformed",
];

/// Common irregular past-tense leads the word-shape check cannot see.
const IRREGULAR_VERBS: &[&str] = &[
    "Built", "Drove", "Grew", "Led", "Made", "Ran", "Sold", "Taught", "Won", "Wrote",
];

/// A markdown list marker (`-`, `*`, `1.`, `1)`) at the start of a line.
static MARKDOWN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-*]|\d+[.)])\s+").expect("static regex"));

/// Any leading bullet glyph or list marker, including the space after it.
static LEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:•\s*|[-*]\s+|\d+[.)]\s+)+").expect("static regex"));

/// A "sentence" that is only a list number left behind by the split.
static LIST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]?$").expect("static regex"));

/// Sentence boundary: terminal punctuation followed by whitespace, or a line break.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+|\s*\n\s*").expect("static regex"));

/// Capitalized word that looks like a past/continuous/third-person verb.
static LEADING_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:ed|ing)|^[A-Z][a-z]+s\b").expect("static regex"));

// ────────────────────────────────────────────────────────────────────────────
// Bullets
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes a completion into `• `-prefixed lines using the thread RNG for
/// fallback verb choice.
pub fn format_bullets(text: &str) -> String {
    normalize_bullets(text, &mut rand::thread_rng())
}

/// Normalizes a completion into `• `-prefixed lines.
///
/// Text that already has bullet markers is only re-marked line by line.
/// Unmarked prose is split into sentences, each led by an action verb.
pub fn normalize_bullets<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let text = text.trim();
    if has_bullet_markers(text) {
        canonicalize_bullets(text)
    } else {
        synthesize_bullets(text, rng)
    }
}

fn has_bullet_markers(text: &str) -> bool {
    text.contains('•') || text.lines().any(|line| MARKDOWN_MARKER.is_match(line))
}

fn canonicalize_bullets(text: &str) -> String {
    text.lines()
        .map(|line| LEADING_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn synthesize_bullets<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty() && !LIST_NUMBER.is_match(sentence))
        .map(|sentence| format!("{BULLET}{}", lead_with_verb(sentence, &mut *rng)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lead_with_verb<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    if LEADING_VERB.is_match(sentence) || leads_with_known_verb(sentence) {
        return sentence.to_string();
    }
    let verb = ACTION_VERBS.choose(rng).copied().unwrap_or("Delivered");
    format!("{verb} {}", lowercase_first(sentence))
}

fn leads_with_known_verb(sentence: &str) -> bool {
    let first = sentence
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches(|c: char| !c.is_alphanumeric());
    ACTION_VERBS.contains(&first) || IRREGULAR_VERBS.contains(&first)
}

/// Lowercases the first character unless the first word reads as an acronym.
fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            s.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(s.chars().skip(1)).collect(),
        (None, _) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON extraction
// ────────────────────────────────────────────────────────────────────────────

/// Returns the first top-level balanced `{...}` in `text`.
///
/// Braces inside JSON string literals do not count, and escapes inside strings
/// are honored. An opening brace that never closes yields `None`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extracts the embedded JSON object and parses it without reshaping it.
/// `what` names the expected payload in error messages.
pub fn parse_embedded_object(text: &str, what: &str) -> Result<Map<String, Value>, AppError> {
    let json = extract_json_object(text)
        .ok_or_else(|| AppError::Parse(format!("No valid JSON found in {what} response")))?;
    serde_json::from_str(json)
        .map_err(|e| AppError::Parse(format!("Failed to parse {what} JSON: {e}")))
}

/// Sets `projects` to `[]` when the key is missing or `null`.
pub fn default_projects(resume: &mut Map<String, Value>) {
    let projects = resume.entry("projects").or_insert(Value::Null);
    if projects.is_null() {
        *projects = Value::Array(Vec::new());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// Splits `"MM YYYY - MM YYYY"` into its start and end dates.
pub fn split_date_range(text: &str) -> Result<(String, String), AppError> {
    let trimmed = text.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    let parts: Vec<&str> = trimmed.split(" - ").collect();
    match parts.as_slice() {
        [start, end] if !start.trim().is_empty() && !end.trim().is_empty() => {
            Ok((start.trim().to_string(), end.trim().to_string()))
        }
        _ => Err(AppError::Parse(format!(
            "Expected a date range like 'MM YYYY - MM YYYY', got '{trimmed}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn first_word(line: &str) -> &str {
        line.trim_start_matches(BULLET)
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }

    #[test]
    fn test_canonical_bullets_are_unchanged() {
        let input = "• Led migration of 40 services to Kubernetes\n• Cut cloud spend by 22%";
        assert_eq!(normalize_bullets(input, &mut rng()), input);
    }

    #[test]
    fn test_markdown_bullets_are_rewritten() {
        let input = "Here you go:\n\n- Shipped a billing API\n* Mentored 3 engineers\n";
        assert_eq!(
            normalize_bullets(input, &mut rng()),
            "• Here you go:\n• Shipped a billing API\n• Mentored 3 engineers"
        );
    }

    #[test]
    fn test_hyphenated_words_are_not_markers() {
        // "cross-functional" must not switch to marker mode.
        let input = "Managed cross-functional launches. Streamlining release cadence.";
        let output = normalize_bullets(input, &mut rng());
        assert_eq!(
            output,
            "• Managed cross-functional launches\n• Streamlining release cadence."
        );
    }

    #[test]
    fn test_bold_markdown_is_not_stripped() {
        let input = "• **Scale**: grew usage 3x";
        assert_eq!(normalize_bullets(input, &mut rng()), input);
    }

    #[test]
    fn test_glyph_without_space_is_canonicalized() {
        assert_eq!(
            normalize_bullets("•Reduced churn by 5%", &mut rng()),
            "• Reduced churn by 5%"
        );
    }

    #[test]
    fn test_three_sentences_become_three_bullets() {
        let input = "Managed a team of five engineers. the payments API shipped on time! \
                     Reducing p99 latency by 30%.";
        let output = normalize_bullets(input, &mut rng());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3, "output was: {output}");

        let sentence_leads = ["Managed", "the", "Reducing"];
        for (line, own_lead) in lines.iter().zip(sentence_leads) {
            assert!(line.starts_with(BULLET));
            let word = first_word(line);
            assert!(
                word.chars().next().is_some_and(char::is_uppercase),
                "first word should be capitalized: {line}"
            );
            assert!(
                word == own_lead || ACTION_VERBS.contains(&word),
                "unexpected lead word in {line}"
            );
        }

        // Verb-shaped sentences keep their own lead; the lowercase one gets a verb.
        assert_eq!(first_word(lines[0]), "Managed");
        assert_eq!(first_word(lines[2]), "Reducing");
        assert!(ACTION_VERBS.contains(&first_word(lines[1])));
        assert!(lines[1].ends_with("the payments API shipped on time"));
    }

    #[test]
    fn test_fallback_keeps_acronyms_intact() {
        let output = normalize_bullets("API uptime reached 99.99%", &mut rng());
        assert!(output.ends_with(" API uptime reached 99.99%"), "{output}");
        assert!(ACTION_VERBS.contains(&first_word(&output)));
    }

    #[test]
    fn test_line_breaks_split_unmarked_prose() {
        let output = normalize_bullets("Designed the schema\nOwning on-call rotation", &mut rng());
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().all(|l| l.starts_with(BULLET)));
    }

    #[test]
    fn test_empty_text_yields_empty_output() {
        assert_eq!(normalize_bullets("   \n  ", &mut rng()), "");
    }

    #[test]
    fn test_extract_json_from_prose() {
        let text = "Sure! Here is the analysis:\n{\"technical\": [\"Go\"], \"soft\": []}\nHope it helps {:)";
        assert_eq!(
            extract_json_object(text),
            Some("{\"technical\": [\"Go\"], \"soft\": []}")
        );
    }

    #[test]
    fn test_extract_json_ignores_braces_in_strings() {
        let text = r#"```json
{"note": "use {braces} and \"quotes\" freely", "nested": {"a": 1}}
```"#;
        let json = extract_json_object(text).unwrap();
        let value: Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["nested"]["a"], 1);
        assert_eq!(value["note"], "use {braces} and \"quotes\" freely");
    }

    #[test]
    fn test_extract_json_none_when_absent_or_unbalanced() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("{\"open\": true"), None);
    }

    #[test]
    fn test_parse_embedded_object_errors_are_parse_errors() {
        let err = parse_embedded_object("nothing", "skills").unwrap_err();
        assert!(matches!(err, AppError::Parse(ref m) if m.contains("skills")));

        let err = parse_embedded_object("{not json}", "skills").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_parse_embedded_object_keeps_every_key() {
        let embedded = json!({
            "technical": ["Rust"],
            "soft": ["Leadership"],
            "tools": ["Jira"],
            "years": 7,
            "note": null
        });
        let reply = format!("Skills below.\n{embedded}\nDone.");
        let parsed = parse_embedded_object(&reply, "skills").unwrap();
        assert_eq!(Value::Object(parsed), embedded);
    }

    #[test]
    fn test_default_projects() {
        let mut missing = Map::new();
        default_projects(&mut missing);
        assert_eq!(missing["projects"], json!([]));

        let mut null = json!({"projects": null}).as_object().unwrap().clone();
        default_projects(&mut null);
        assert_eq!(null["projects"], json!([]));

        let mut present = json!({"projects": [{"name": "Ledger"}]}).as_object().unwrap().clone();
        default_projects(&mut present);
        assert_eq!(present["projects"], json!([{"name": "Ledger"}]));
    }

    #[test]
    fn test_numbered_lists_are_markers() {
        let input = "1. Led the migration to Postgres\n2) Built the CI pipeline";
        assert_eq!(
            normalize_bullets(input, &mut rng()),
            "• Led the migration to Postgres\n• Built the CI pipeline"
        );
    }

    #[test]
    fn test_inline_list_numbers_are_dropped() {
        let output = normalize_bullets("Highlights follow. 1. Led the migration", &mut rng());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2, "output was: {output}");
        assert_eq!(lines[1], "• Led the migration");
        assert!(!output.contains("• 1"));
    }

    #[test]
    fn test_irregular_verbs_keep_their_lead() {
        assert_eq!(
            normalize_bullets("Led a team of five. Built the billing API. Ran on-call", &mut rng()),
            "• Led a team of five\n• Built the billing API\n• Ran on-call"
        );
    }

    #[test]
    fn test_split_date_range() {
        assert_eq!(
            split_date_range("01 2020 - 06 2022").unwrap(),
            ("01 2020".to_string(), "06 2022".to_string())
        );
        assert_eq!(
            split_date_range("  \"09 2015 - 05 2019\"\n").unwrap(),
            ("09 2015".to_string(), "05 2019".to_string())
        );
    }

    #[test]
    fn test_split_date_range_rejects_other_shapes() {
        assert!(matches!(
            split_date_range("01 2020 to 06 2022"),
            Err(AppError::Parse(_))
        ));
        assert!(matches!(
            split_date_range("01 2020 - 06 2022 - 07 2023"),
            Err(AppError::Parse(_))
        ));
    }
}
