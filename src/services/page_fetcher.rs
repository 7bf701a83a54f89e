//! Website fetching and hex-color extraction.
//!
//! The engine only ever sees plain `#RRGGBB` strings. This module owns the
//! network request and the HTML scan that produces them: inline `style`
//! attributes, `<style>` element text and the legacy color attributes are
//! searched for `#RGB` / `#RRGGBB` tokens, shorthand is expanded, and the
//! result is de-duplicated in document order.

use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Url;
use scraper::{ElementRef, Html};

use crate::error::FetchError;
use crate::models::FetchConfig;

/// Attributes whose values may hold colors.
const COLOR_ATTRIBUTES: &[&str] = &["style", "bgcolor", "color", "fill", "stroke"];

/// Redirects followed before giving up
const MAX_REDIRECTS: usize = 5;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Six digits first so #ABCDEF is not read as #ABC; the word boundary
    // rejects 4- and 8-digit forms.
    PATTERN.get_or_init(|| {
        Regex::new(r"#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").expect("hex color pattern is valid")
    })
}

/// Expand shorthand and uppercase: `#abc` -> `#AABBCC`.
fn canonicalize(digits: &str) -> String {
    let digits = digits.to_ascii_uppercase();
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{expanded}")
    } else {
        format!("#{digits}")
    }
}

fn collect_from(text: &str, seen: &mut HashSet<String>, out: &mut Vec<String>, limit: usize) {
    for captures in hex_pattern().captures_iter(text) {
        if out.len() >= limit {
            return;
        }
        let color = canonicalize(&captures[1]);
        if seen.insert(color.clone()) {
            out.push(color);
        }
    }
}

/// Extract up to `limit` distinct hex colors from an HTML document.
pub fn extract_hex_colors(html: &str, limit: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut colors = Vec::new();

    for node in document.root_element().descendants() {
        if colors.len() >= limit {
            break;
        }
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        if element.value().name() == "style" {
            let css: String = element.text().collect();
            collect_from(&css, &mut seen, &mut colors, limit);
        }
        for attribute in COLOR_ATTRIBUTES {
            if let Some(value) = element.value().attr(attribute) {
                collect_from(value, &mut seen, &mut colors, limit);
            }
        }
    }

    colors
}

/// Fetches pages over HTTP(S) and extracts their colors
pub struct PageFetcher {
    client: reqwest::Client,
    max_colors: usize,
    max_page_bytes: usize,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            max_colors: config.max_colors,
            max_page_bytes: config.max_page_bytes,
        })
    }

    /// Fetch a page body as text.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        tracing::debug!(url = %parsed, "Fetching page");
        let mut response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Page fetch failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let too_large = || FetchError::TooLarge {
            max: self.max_page_bytes,
        };
        if response
            .content_length()
            .is_some_and(|len| len > self.max_page_bytes as u64)
        {
            return Err(too_large());
        }

        // Chunked bodies carry no Content-Length
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_page_bytes {
                tracing::warn!(url = %url, max = self.max_page_bytes, "Page body over limit");
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Fetch a page and return the hex colors it uses.
    pub async fn fetch_colors(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let html = self.fetch(url).await?;
        let colors = extract_hex_colors(&html, self.max_colors);
        tracing::info!(
            url = %url,
            bytes = html.len(),
            colors = colors.len(),
            "Extracted page colors"
        );
        Ok(colors)
    }
}
