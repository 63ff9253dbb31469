//! Selection policy primitives.
//!
//! Pure domain logic — no I/O, no sessions, just the deterministic
//! priority ordering and the judge-reply parser. The orchestrator in
//! the application layer decides *when* to apply each; this module
//! decides *how*.

use crate::orchestration::ProviderId;
use std::collections::BTreeMap;

/// A judge's parsed decision: which candidate won, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeVerdict {
    pub best: String,
    pub why: String,
}

/// Parse a judge reply into a [`JudgeVerdict`].
///
/// The expected format is a strict two-line contract:
///
/// ```text
/// BEST: <provider id>
/// WHY: <one-line rationale>
/// ```
///
/// Parsing is tolerant of keyword case, surrounding whitespace, blank
/// lines, and markdown code fences, but both lines must be present and
/// non-empty. Anything else yields `None` — the caller falls back to
/// priority ordering rather than crashing.
pub fn parse_judge_verdict(reply: &str) -> Option<JudgeVerdict> {
    let mut best = None;
    let mut why = None;

    for line in reply.lines() {
        let line = line.trim().trim_matches('`');
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = strip_keyword(line, "BEST:") {
            best.get_or_insert_with(|| rest.to_string());
        } else if let Some(rest) = strip_keyword(line, "WHY:") {
            why.get_or_insert_with(|| rest.to_string());
        }
    }

    match (best, why) {
        (Some(best), Some(why)) if !best.is_empty() && !why.is_empty() => {
            Some(JudgeVerdict { best, why })
        }
        _ => None,
    }
}

/// Case-insensitive prefix strip; returns the trimmed remainder.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(line[keyword.len()..].trim())
    } else {
        None
    }
}

/// Pick a winner from the response map by priority ordering.
///
/// The first entry of `ranked` present in the map wins. Successful
/// providers missing from the ranked list are still eligible, after
/// every ranked entry, in map (id) order — a configured-but-unranked
/// provider beats the fallback message. Returns `None` only when the
/// map is empty.
pub fn select_by_priority(
    responses: &BTreeMap<ProviderId, String>,
    ranked: &[ProviderId],
) -> Option<ProviderId> {
    ranked
        .iter()
        .find(|id| responses.contains_key(*id))
        .or_else(|| responses.keys().find(|id| !ranked.contains(*id)))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_judge_verdict Tests ====================

    #[test]
    fn parses_canonical_reply() {
        let verdict = parse_judge_verdict("BEST: openai\nWHY: most complete answer").unwrap();
        assert_eq!(verdict.best, "openai");
        assert_eq!(verdict.why, "most complete answer");
    }

    #[test]
    fn tolerates_case_and_whitespace() {
        let verdict =
            parse_judge_verdict("  best:   Gemini  \n\n  Why:  concise and accurate ").unwrap();
        assert_eq!(verdict.best, "Gemini");
        assert_eq!(verdict.why, "concise and accurate");
    }

    #[test]
    fn tolerates_code_fences_and_preamble() {
        let reply = "Here is my assessment:\n```\nBEST: grok\nWHY: best tone\n```";
        let verdict = parse_judge_verdict(reply).unwrap();
        assert_eq!(verdict.best, "grok");
        assert_eq!(verdict.why, "best tone");
    }

    #[test]
    fn first_occurrence_wins() {
        let reply = "BEST: a\nWHY: first\nBEST: b\nWHY: second";
        let verdict = parse_judge_verdict(reply).unwrap();
        assert_eq!(verdict.best, "a");
        assert_eq!(verdict.why, "first");
    }

    #[test]
    fn rejects_malformed_replies() {
        assert!(parse_judge_verdict("garbage").is_none());
        assert!(parse_judge_verdict("").is_none());
        assert!(parse_judge_verdict("BEST: openai").is_none());
        assert!(parse_judge_verdict("WHY: no winner named").is_none());
        assert!(parse_judge_verdict("BEST:\nWHY: empty winner").is_none());
        assert!(parse_judge_verdict("BEST: openai\nWHY:").is_none());
    }

    // ==================== select_by_priority Tests ====================

    fn map(entries: &[(&str, &str)]) -> BTreeMap<ProviderId, String> {
        entries
            .iter()
            .map(|(id, text)| (ProviderId::from(*id), text.to_string()))
            .collect()
    }

    fn ranked(ids: &[&str]) -> Vec<ProviderId> {
        ids.iter().map(|id| ProviderId::from(*id)).collect()
    }

    #[test]
    fn highest_ranked_present_wins() {
        let responses = map(&[("gemini", "g"), ("openai", "o")]);
        let winner = select_by_priority(&responses, &ranked(&["openai", "gemini"]));
        assert_eq!(winner, Some(ProviderId::from("openai")));
    }

    #[test]
    fn ranked_but_failed_providers_are_skipped() {
        let responses = map(&[("gemini", "g")]);
        let winner = select_by_priority(&responses, &ranked(&["openai", "gemini"]));
        assert_eq!(winner, Some(ProviderId::from("gemini")));
    }

    #[test]
    fn unranked_success_beats_nothing() {
        let responses = map(&[("mystery", "m")]);
        let winner = select_by_priority(&responses, &ranked(&["openai", "gemini"]));
        assert_eq!(winner, Some(ProviderId::from("mystery")));
    }

    #[test]
    fn empty_map_selects_nothing() {
        let responses = BTreeMap::new();
        assert_eq!(select_by_priority(&responses, &ranked(&["openai"])), None);
    }
}
