//! Text acquisition from files, stdin, URLs, and HTML.
//!
//! These helpers sit in front of the summarizer: they read raw text, strip
//! markup when the source is a web page, and cap very long input before the
//! quadratic ranking step sees it.

use std::fs;
use std::path::PathBuf;

use crate::{PrecisError, Result};

#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};

/// Reads text from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(PrecisError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(PrecisError::from)
    }
}

/// Reads all of standard input until EOF.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(PrecisError::from)?;

    Ok(buffer)
}

/// Truncates text to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Whether the text looks like an HTML document rather than prose.
///
/// Only the start of the document is considered, so prose that mentions a
/// tag is not mistaken for markup.
pub fn looks_like_html(text: &str) -> bool {
    let head = truncate_chars(text.trim_start(), 16).to_lowercase();
    ["<!doctype", "<html", "<head", "<body"].iter().any(|tag| head.starts_with(*tag))
}

#[cfg(feature = "html")]
const BLOCK_ELEMENTS: [&str; 13] = [
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "blockquote",
    "pre",
    "td",
    "th",
    "figcaption",
];

#[cfg(feature = "html")]
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Extracts readable text from HTML, one block per line.
///
/// Only the `<body>` is read, and text inside scripts, styles, `<noscript>`
/// and templates is skipped. Text of block elements (paragraphs, headings,
/// list items, cells) is collected in document order. Blocks nested in
/// another block are covered by their outermost block. A block without
/// terminal punctuation, such as a heading, gets a period so it is split as
/// its own sentence. Documents with no block elements fall back to the
/// visible text of the whole body.
#[cfg(feature = "html")]
pub fn html_to_text(html: &str) -> String {
    use scraper::{ElementRef, Html};

    let doc = Html::parse_document(html);
    let body = doc
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
        .unwrap_or_else(|| doc.root_element());
    let is_block = |el: &ElementRef<'_>| BLOCK_ELEMENTS.contains(&el.value().name());

    let mut blocks = Vec::new();
    for node in body.descendants() {
        let Some(el) = ElementRef::wrap(node) else { continue };
        if !is_block(&el) || is_hidden(el) {
            continue;
        }
        if el.ancestors().filter_map(ElementRef::wrap).any(|a| is_block(&a)) {
            continue;
        }

        let text = visible_text(el);
        if text.is_empty() {
            continue;
        }
        if text.ends_with(['.', '!', '?']) {
            blocks.push(text);
        } else {
            blocks.push(format!("{}.", text));
        }
    }

    if blocks.is_empty() {
        return visible_text(body);
    }

    blocks.join("\n")
}

/// Whether the element is, or sits inside, a script, style, noscript or template
#[cfg(feature = "html")]
fn is_hidden(el: scraper::ElementRef<'_>) -> bool {
    HIDDEN_ELEMENTS.contains(&el.value().name())
        || el
            .ancestors()
            .filter_map(scraper::ElementRef::wrap)
            .any(|a| HIDDEN_ELEMENTS.contains(&a.value().name()))
}

/// Whitespace-normalized text of an element, without hidden descendants
#[cfg(feature = "html")]
fn visible_text(el: scraper::ElementRef<'_>) -> String {
    let parts: Vec<&str> = el
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .filter_map(scraper::ElementRef::wrap)
                .any(|a| HIDDEN_ELEMENTS.contains(&a.value().name()));
            (!hidden).then_some(&**text)
        })
        .collect();
    normalize_whitespace(&parts.join(" "))
}

#[cfg(feature = "html")]
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(feature = "fetch")]
mod fetch {
    use std::time::Duration;

    use reqwest::Client;
    use url::Url;

    use crate::{PrecisError, Result};

    /// HTTP client configuration for fetching pages to summarize.
    #[derive(Debug, Clone)]
    pub struct FetchConfig {
        /// Request timeout in seconds.
        pub timeout: u64,
        /// Custom User-Agent string.
        pub user_agent: String,
    }

    impl Default for FetchConfig {
        fn default() -> Self {
            Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Precis/1.0)".to_string() }
        }
    }

    /// Fetches the body of a URL as text.
    ///
    /// Follows redirects and respects the configured timeout. The body is
    /// returned as-is; pass it through [`crate::html_to_text`] for web pages.
    pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
        let parsed_url = Url::parse(url).map_err(|e| PrecisError::InvalidUrl(e.to_string()))?;

        if !matches!(parsed_url.scheme(), "http" | "https") {
            return Err(PrecisError::InvalidUrl(format!(
                "unsupported scheme '{}', expected http or https",
                parsed_url.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(PrecisError::HttpError)?;

        let response = client
            .get(parsed_url)
            .header("User-Agent", &config.user_agent)
            .header("Accept", "text/html,text/plain;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() { PrecisError::Timeout { timeout: config.timeout } } else { PrecisError::HttpError(e) }
            })?;

        let content = response.error_for_status()?.text().await?;

        Ok(content)
    }
}
