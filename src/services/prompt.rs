// src/services/prompt.rs

use crate::config::{CONTENT_CHAR_LIMIT, QUESTIONS_PER_QUIZ};
use crate::services::wiki::ArticleContent;

/// Renders the fixed quiz-generation prompt for one article.
///
/// Body text is cut at `CONTENT_CHAR_LIMIT` characters. The cut counts
/// code points, so multi-byte text is never split inside a character;
/// mid-word cuts are accepted.
pub fn build_quiz_prompt(article: &ArticleContent) -> String {
    let content: String = article.text.chars().take(CONTENT_CHAR_LIMIT).collect();

    format!(
        r#"
You are an expert educator.

Create a quiz ONLY from the Wikipedia article below.

RULES:
- Output VALID JSON ONLY
- No markdown
- No extra text

TITLE:
{title}

SUMMARY:
{summary}

SECTIONS:
{sections:?}

CONTENT:
{content}

TASK:
Generate exactly {count} MCQs.

Each question must include:
- question
- options (4)
- answer
- explanation
- difficulty (easy | medium | hard)

Also include:
- related_topics (3-5)

OUTPUT FORMAT:
{{
  "quiz": [
    {{
      "question": "",
      "options": ["", "", "", ""],
      "answer": "",
      "difficulty": "",
      "explanation": ""
    }}
  ],
  "related_topics": []
}}
"#,
        title = article.title,
        summary = article.summary,
        sections = article.sections,
        content = content,
        count = QUESTIONS_PER_QUIZ,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_with_text(text: &str) -> ArticleContent {
        ArticleContent {
            title: "Cat".to_string(),
            summary: "A small domesticated mammal.".to_string(),
            sections: vec!["Etymology".to_string(), "Senses".to_string()],
            text: text.to_string(),
        }
    }

    #[test]
    fn embeds_article_fields_and_question_count() {
        let prompt = build_quiz_prompt(&article_with_text("Cats are mammals."));

        assert!(prompt.contains("TITLE:\nCat\n"));
        assert!(prompt.contains("A small domesticated mammal."));
        assert!(prompt.contains(r#"["Etymology", "Senses"]"#));
        assert!(prompt.contains("Cats are mammals."));
        assert!(prompt.contains("Generate exactly 5 MCQs."));
    }

    #[test]
    fn truncates_content_at_the_character_limit() {
        let text = "a".repeat(CONTENT_CHAR_LIMIT + 500);
        let prompt = build_quiz_prompt(&article_with_text(&text));

        assert!(prompt.contains(&"a".repeat(CONTENT_CHAR_LIMIT)));
        assert!(!prompt.contains(&"a".repeat(CONTENT_CHAR_LIMIT + 1)));
    }

    #[test]
    fn short_content_is_kept_whole() {
        let text = "a".repeat(CONTENT_CHAR_LIMIT - 1);
        let prompt = build_quiz_prompt(&article_with_text(&text));

        assert!(prompt.contains(&text));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Each 'é' is two bytes; a byte-based cut could split one in half.
        let text = "é".repeat(CONTENT_CHAR_LIMIT + 10);
        let prompt = build_quiz_prompt(&article_with_text(&text));

        assert!(prompt.contains(&"é".repeat(CONTENT_CHAR_LIMIT)));
        assert!(!prompt.contains(&"é".repeat(CONTENT_CHAR_LIMIT + 1)));
    }
}
