use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::models::Article;

/// Returns true only for absolute URLs carrying both a scheme and a host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

pub struct ContentExtractor {
    client: Client,
}

impl ContentExtractor {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (compatible; PressPodcast/1.0)")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch a page and extract its main text plus whatever metadata the
    /// document exposes. Any network or HTTP failure propagates to the
    /// caller; there is no retry.
    pub async fn fetch_article(&self, url: &str) -> Result<Article> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error fetching {}: {}", url, status);
        }

        let html = response.text().await.context("Failed to read response body")?;

        let maintext = html2text::from_read(html.as_bytes(), 100);
        let maintext = maintext.trim().to_string();
        if maintext.len() < 100 {
            anyhow::bail!("No readable article text found at {}", url);
        }

        let metadata = extract_metadata(&html);
        let source_domain = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()));

        Ok(Article {
            authors: metadata.authors,
            date_download: Utc::now().to_rfc3339(),
            date_publish: metadata.date_publish,
            description: metadata.description,
            maintext,
            source_domain,
            title: metadata.title,
            url: Some(url.to_string()),
        })
    }
}

#[derive(Debug, Default)]
struct PageMetadata {
    title: Option<String>,
    description: Option<String>,
    authors: Vec<String>,
    date_publish: Option<String>,
}

fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = meta_content(&document, "meta[property=\"og:title\"]")
        .or_else(|| element_text(&document, "title"));

    let description = meta_content(&document, "meta[property=\"og:description\"]")
        .or_else(|| meta_content(&document, "meta[name=\"description\"]"));

    let authors = meta_content(&document, "meta[name=\"author\"]")
        .map(|a| vec![a])
        .unwrap_or_default();

    let date_publish = meta_content(&document, "meta[property=\"article:published_time\"]");

    PageMetadata {
        title,
        description,
        authors,
        date_publish,
    }
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
