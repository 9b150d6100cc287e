//! Candidate Identity Resolver — best-effort name extraction from resume text.
//!
//! The heuristic is explicitly approximate: it scans the first few non-empty
//! lines for something shaped like a personal name and falls back to
//! "Anonymous" otherwise. It never fails the pipeline. Duplicate detection is
//! built on the normalized key and inherits the same approximation — two
//! different people with the same name collide, and formatting noise can
//! split one person into two keys. That is a documented limitation of the
//! system, not something this module tries to paper over.

pub const ANONYMOUS: &str = "Anonymous";

/// How many leading lines to scan before giving up on finding a name.
const MAX_SCAN_LINES: usize = 10;
const MAX_NAME_LEN: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIdentity {
    /// Display name shown on the result page and leaderboard.
    pub display_name: String,
    /// Deduplication key, derived deterministically from the display name.
    pub normalized: String,
}

/// Resolves a display name and dedup key from extracted resume text.
/// Always succeeds; the fallback identity is "Anonymous".
pub fn resolve_candidate(text: &str) -> CandidateIdentity {
    let display_name = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(MAX_SCAN_LINES)
        .find(|l| looks_like_name(l))
        .unwrap_or(ANONYMOUS)
        .to_string();

    let normalized = normalize_name(&display_name);
    CandidateIdentity {
        display_name,
        normalized,
    }
}

/// Lowercases, trims, and collapses internal whitespace. Deterministic.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shape check for "looks like a personal name": 2-5 capitalized words of
/// letters (plus `.'-`), no digits, no `@`, bounded length. Plenty of false
/// positives are possible; callers get "Anonymous" for everything else.
fn looks_like_name(line: &str) -> bool {
    if line.len() > MAX_NAME_LEN {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=5).contains(&words.len()) {
        return false;
    }
    words.iter().all(|w| {
        w.chars().next().is_some_and(|c| c.is_uppercase())
            && w.chars()
                .all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '-'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_name_resolved() {
        let id = resolve_candidate("John Smith\nSenior Engineer at Initech\n...");
        assert_eq!(id.display_name, "John Smith");
        assert_eq!(id.normalized, "john smith");
    }

    #[test]
    fn test_noise_lines_skipped() {
        let text = "==========\n+1 555 0100\njane@example.com\nJane O'Brien-Smith\nEngineer";
        let id = resolve_candidate(text);
        assert_eq!(id.display_name, "Jane O'Brien-Smith");
    }

    #[test]
    fn test_fallback_is_anonymous() {
        let id = resolve_candidate("objective: to get a job\n- worked at 3 companies\n");
        assert_eq!(id.display_name, ANONYMOUS);
        assert_eq!(id.normalized, "anonymous");
    }

    #[test]
    fn test_empty_text_is_anonymous() {
        assert_eq!(resolve_candidate("").display_name, ANONYMOUS);
    }

    #[test]
    fn test_line_with_digits_is_not_a_name() {
        let id = resolve_candidate("John Smith 3rd Edition 2024\nmore text");
        assert_eq!(id.display_name, ANONYMOUS);
    }

    #[test]
    fn test_email_line_is_not_a_name() {
        assert_eq!(
            resolve_candidate("John.Smith@example.com rest\n").display_name,
            ANONYMOUS
        );
    }

    #[test]
    fn test_single_word_is_not_a_name() {
        assert_eq!(resolve_candidate("Resume\n\nstuff").display_name, ANONYMOUS);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_name("  John\t  SMITH  "), "john smith");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let a = normalize_name("Jane  Doe");
        let b = normalize_name("Jane  Doe");
        assert_eq!(a, b);
    }

    #[test]
    fn test_formatting_noise_still_splits_keys() {
        // Known weakness: punctuation differences produce different keys.
        assert_ne!(normalize_name("Jane Doe"), normalize_name("Jane. Doe"));
    }
}
