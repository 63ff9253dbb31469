//! Prompt templates for the judge call

use crate::orchestration::ProviderId;

/// Templates for the judge's system and user prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the judge call
    pub fn judge_system() -> &'static str {
        r#"You are an impartial evaluator comparing candidate responses to the same user message.
Judge each candidate on accuracy, clarity, appropriate caution, and usefulness to the user.
Do not write a new answer. Pick exactly one candidate."#
    }

    /// User prompt for the judge call
    ///
    /// Candidates are labeled by provider id; the reply format is the
    /// strict two-line contract `parse_judge_verdict` expects.
    pub fn judge_prompt(user_message: &str, candidates: &[(ProviderId, String)]) -> String {
        let mut prompt = format!(
            r#"User message: {}

Candidate responses:
"#,
            user_message
        );

        for (id, text) in candidates {
            prompt.push_str(&format!("\n--- {} ---\n{}\n", id, text));
        }

        prompt.push_str(
            r#"
Reply with exactly two lines and nothing else:
BEST: <candidate label>
WHY: <one-line reason>"#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_prompt_labels_every_candidate() {
        let candidates = vec![
            (ProviderId::from("openai"), "Answer one.".to_string()),
            (ProviderId::from("gemini"), "Answer two.".to_string()),
        ];
        let prompt = PromptTemplate::judge_prompt("is this normal?", &candidates);

        assert!(prompt.contains("is this normal?"));
        assert!(prompt.contains("--- openai ---"));
        assert!(prompt.contains("--- gemini ---"));
        assert!(prompt.contains("BEST: <candidate label>"));
    }
}
