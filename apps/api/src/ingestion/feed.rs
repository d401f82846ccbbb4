use std::time::Duration;

use anyhow::{Context, Result};
use feed_rs::parser;
use reqwest::Client;

/// Entries taken from the head of each feed per run.
pub const ENTRIES_PER_FEED: usize = 3;

/// Source name recorded when a feed carries no title.
const FALLBACK_SOURCE: &str = "RSS";

/// One feed entry, reduced to the fields the ingestion job persists.
#[derive(Debug, Clone)]
pub struct FetchedEntry {
    pub title: String,
    pub url: String,
    pub source: String,
    pub content: String,
}

/// HTTP client for feed fetches. Shorter timeout than the LLM client; feeds
/// that hang should not stall the whole run for minutes.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("careerbrief/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
}

/// Fetches and parses one feed, returning at most [`ENTRIES_PER_FEED`]
/// entries from its head.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Vec<FetchedEntry>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetching feed {url}"))?;

    if !response.status().is_success() {
        anyhow::bail!("fetching feed {url}: HTTP {}", response.status());
    }

    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("reading feed body {url}"))?;
    let feed = parser::parse(&bytes[..]).with_context(|| format!("parsing feed {url}"))?;

    Ok(map_entries(feed))
}

fn map_entries(feed: feed_rs::model::Feed) -> Vec<FetchedEntry> {
    let source = feed
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_SOURCE.to_string());

    feed.entries
        .into_iter()
        .take(ENTRIES_PER_FEED)
        .map(|entry| FetchedEntry {
            title: entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string()),
            url: entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default(),
            source: source.clone(),
            // Entry summary first (the original content for summarization),
            // full content body as fallback.
            content: entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_rs::parser;

    const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Career Weekly</title>
    <link>https://career.example</link>
    <description>Career news</description>
    <item>
      <title>First article</title>
      <link>https://career.example/1</link>
      <description>Body one</description>
    </item>
    <item>
      <title>Second article</title>
      <link>https://career.example/2</link>
      <description>Body two</description>
    </item>
    <item>
      <title>Third article</title>
      <link>https://career.example/3</link>
      <description>Body three</description>
    </item>
    <item>
      <title>Fourth article</title>
      <link>https://career.example/4</link>
      <description>Body four</description>
    </item>
  </channel>
</rss>"#;

    const UNTITLED_FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <link>https://nameless.example</link>
    <description>No channel title</description>
    <item>
      <link>https://nameless.example/1</link>
      <description>Body</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_map_entries_caps_at_three() {
        let feed = parser::parse(FEED_XML.as_bytes()).unwrap();
        let entries = map_entries(feed);
        assert_eq!(entries.len(), ENTRIES_PER_FEED);
        assert_eq!(entries[0].title, "First article");
        assert_eq!(entries[0].url, "https://career.example/1");
        assert_eq!(entries[0].source, "Career Weekly");
        assert_eq!(entries[0].content, "Body one");
        assert_eq!(entries[2].title, "Third article");
    }

    #[test]
    fn test_map_entries_fallbacks() {
        let feed = parser::parse(UNTITLED_FEED_XML.as_bytes()).unwrap();
        let entries = map_entries(feed);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, "RSS");
        assert_eq!(entries[0].title, "Untitled");
        assert_eq!(entries[0].content, "Body");
    }
}
