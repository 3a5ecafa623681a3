// src/services/wiki.rs

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

use crate::config::FETCH_TIMEOUT_SECS;
use crate::error::AppError;

/// Headings that carry no article content, matched case-insensitively.
const SKIPPED_HEADINGS: [&str; 4] = ["references", "external links", "see also", "contents"];

/// Structured content pulled from a Wikipedia article page.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub text: String,
}

/// Checks that a URL points at a Wikipedia article:
/// http(s) scheme, a wikipedia.org host and a /wiki/ path.
pub fn is_valid_wikipedia_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }
    let Some(host) = parsed.host_str() else {
        return false;
    };
    host.contains("wikipedia.org") && parsed.path().starts_with("/wiki/")
}

/// Fetches an article page and reduces it to the fields the prompt needs.
#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ArticleContent, AppError>;
}

/// Production extractor backed by reqwest + scraper.
pub struct WikipediaExtractor {
    http: reqwest::Client,
}

impl WikipediaExtractor {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ArticleExtractor for WikipediaExtractor {
    async fn extract(&self, url: &str) -> Result<ArticleContent, AppError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Wikipedia fetch failed for {}: {:?}", url, e);
                AppError::UpstreamFetch("Failed to fetch Wikipedia page".to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!("Wikipedia returned {} for {}", response.status(), url);
            return Err(AppError::UpstreamFetch(
                "Failed to fetch Wikipedia page".to_string(),
            ));
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read Wikipedia response for {}: {:?}", url, e);
            AppError::UpstreamFetch("Failed to fetch Wikipedia page".to_string())
        })?;

        Ok(parse_article(&body))
    }
}

/// Parses an article page into title, lead paragraph, section headings and
/// the concatenated body text.
///
/// * Title: first `h1`, or a sentinel when the page has none.
/// * Summary: first non-empty paragraph inside `div#mw-content-text`.
/// * Sections: every `h2`/`h3` on the page, preferring the `.mw-headline`
///   span Wikipedia nests inside headings, minus boilerplate headings.
/// * Text: all non-empty content paragraphs joined with single spaces.
pub fn parse_article(html: &str) -> ArticleContent {
    let document = Html::parse_document(html);

    let h1_sel = Selector::parse("h1").expect("static selector must parse");
    let paragraph_sel =
        Selector::parse("div#mw-content-text p").expect("static selector must parse");
    let heading_sel = Selector::parse("h2, h3").expect("static selector must parse");
    let headline_sel = Selector::parse("span.mw-headline").expect("static selector must parse");

    let title = document
        .select(&h1_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| "no title found".to_string());

    let paragraphs: Vec<String> = document
        .select(&paragraph_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    let summary = paragraphs.first().cloned().unwrap_or_default();
    let text = paragraphs.join(" ");

    let sections: Vec<String> = document
        .select(&heading_sel)
        .map(|heading| {
            heading
                .select(&headline_sel)
                .next()
                .map(|span| span.text().collect::<String>())
                .unwrap_or_else(|| heading.text().collect::<String>())
                .trim()
                .to_string()
        })
        .filter(|name| !SKIPPED_HEADINGS.contains(&name.to_lowercase().as_str()))
        .collect();

    ArticleContent {
        title,
        summary,
        sections,
        text,
    }
}
