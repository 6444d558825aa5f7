//! Prompt and system-message builders for each generation task.

use draftmill_core::SourceItem;

/// System message for an article type. Unknown types fall back to `general`.
#[must_use]
pub fn system_message(article_type: &str) -> &'static str {
    match article_type {
        "news" => {
            "You are a news journalist. Write objective, factual news articles using \
             inverted pyramid structure. Always cite sources when provided."
        }
        "trending" => {
            "You are a trending topics writer. Create engaging articles about current hot \
             topics with a conversational tone that appeals to social media audiences."
        }
        "listicle" => {
            "You are a listicle writer. Create well-structured list articles with clear \
             headings, engaging introductions, and actionable content."
        }
        "multipage" => {
            "You are a guide writer. Create comprehensive, multi-section guides with clear \
             headings, step-by-step instructions, and practical examples."
        }
        _ => {
            "You are a professional content writer. Create engaging, informative articles \
             with proper structure, headings, and natural flow."
        }
    }
}

/// Build the main article-generation prompt.
#[must_use]
pub fn article_prompt(
    topic: &str,
    article_type: &str,
    word_count: u32,
    sources: &[SourceItem],
) -> String {
    let mut prompt = format!("Write a {word_count}-word {article_type} article about: {topic}\n\n");

    if !sources.is_empty() {
        prompt.push_str("Use these sources for reference (cite them appropriately):\n");
        for source in sources {
            prompt.push_str(&format!("- {} ({})\n", source.title, source.url));
            prompt.push_str(&format!(
                "  Summary: {}...\n\n",
                truncate_chars(&source.summary, 200)
            ));
        }
    }

    prompt.push_str("Requirements:\n");
    prompt.push_str("- Use proper HTML headings (h2, h3) to structure the content\n");
    prompt.push_str("- Write engaging, informative content\n");
    prompt.push_str("- Include relevant keywords naturally\n");
    prompt.push_str("- Make it SEO-friendly but readable\n");
    prompt.push_str("- Add a compelling introduction and conclusion\n");

    if article_type == "news" {
        prompt.push_str("- Follow news writing standards with inverted pyramid structure\n");
        prompt.push_str("- Include who, what, when, where, why in the first paragraph\n");
        prompt.push_str("- Cite sources appropriately\n");
    }

    if article_type == "listicle" {
        prompt.push_str("- Structure as a numbered list with detailed explanations\n");
        prompt.push_str("- Include practical tips and examples\n");
    }

    prompt.push_str("\nWrite the complete article now:");

    prompt
}

pub(crate) const TITLE_SYSTEM: &str =
    "You are an expert headline writer. Create compelling, SEO-friendly titles.";

#[must_use]
pub fn title_prompt(body: &str, article_type: &str) -> String {
    format!(
        "Based on this content, generate 3 different compelling titles for a {article_type} \
         article. Make them engaging and click-worthy but not clickbait. Return only the \
         titles, one per line:\n\n{}",
        truncate_chars(body, 500)
    )
}

pub(crate) const META_SYSTEM: &str =
    "You are an SEO expert. Create compelling meta descriptions for articles.";

#[must_use]
pub fn meta_description_prompt(body: &str, title: &str) -> String {
    format!(
        "Create an SEO-optimized meta description (150-160 characters) for this article:\n\n\
         Title: {title}\n\nContent: {}\n\nMeta description:",
        truncate_chars(body, 800)
    )
}

pub(crate) const KEYWORDS_SYSTEM: &str =
    "You are an SEO keyword expert. Extract relevant keywords and phrases.";

#[must_use]
pub fn keywords_prompt(body: &str, count: usize) -> String {
    format!(
        "Extract {count} SEO-relevant keywords from this content. Focus on terms people \
         would search for. Return only keywords separated by commas:\n\n{}",
        truncate_chars(body, 1000)
    )
}

pub(crate) const HUMANIZE_SYSTEM: &str =
    "You are an expert content editor. Make AI-generated content sound more human and \
     natural while preserving all information.";

#[must_use]
pub fn humanize_prompt(body: &str) -> String {
    format!(
        "Rewrite this content to sound more human and natural. Keep all the information \
         but make it flow better and sound less robotic. Maintain the same length and \
         structure:\n\n{body}"
    )
}

/// Truncate to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_falls_back_to_general() {
        assert_eq!(system_message("standard"), system_message("general"));
        assert!(system_message("news").contains("inverted pyramid"));
        assert!(system_message("listicle").contains("list articles"));
    }

    #[test]
    fn article_prompt_includes_topic_and_word_count() {
        let prompt = article_prompt("solar panels", "general", 800, &[]);
        assert!(prompt.starts_with("Write a 800-word general article about: solar panels"));
        assert!(prompt.contains("HTML headings"));
        assert!(!prompt.contains("Use these sources"));
    }

    #[test]
    fn article_prompt_lists_sources_with_truncated_summaries() {
        let source = SourceItem {
            title: "Grid storage breakthrough".to_string(),
            url: "https://example.com/grid".to_string(),
            summary: "s".repeat(300),
            published_at: None,
            source_name: "Example".to_string(),
        };
        let prompt = article_prompt("batteries", "news", 600, &[source]);
        assert!(prompt.contains("Grid storage breakthrough (https://example.com/grid)"));
        assert!(prompt.contains(&format!("Summary: {}...", "s".repeat(200))));
        assert!(prompt.contains("inverted pyramid"));
    }

    #[test]
    fn listicle_prompt_adds_list_requirements() {
        let prompt = article_prompt("gadgets", "listicle", 700, &[]);
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn title_prompt_truncates_long_bodies() {
        let body = "word ".repeat(500);
        let prompt = title_prompt(&body, "general");
        assert!(prompt.len() < body.len());
        assert!(prompt.contains("one per line"));
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn keywords_prompt_carries_count() {
        let prompt = keywords_prompt("some body text", 10);
        assert!(prompt.starts_with("Extract 10 SEO-relevant keywords"));
    }
}
