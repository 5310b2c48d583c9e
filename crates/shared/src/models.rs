use serde::{Deserialize, Serialize};

/// One collected news article.
///
/// Fields are declared in alphabetical order so the pretty-printed
/// `articles.json` comes out with sorted keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub authors: Vec<String>,
    pub date_download: String,
    pub date_publish: Option<String>,
    pub description: Option<String>,
    pub maintext: String,
    pub source_domain: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl Article {
    /// The source URL for display, or "N/A" when the record has none.
    pub fn source(&self) -> &str {
        match self.url.as_deref() {
            Some(u) if !u.is_empty() => u,
            _ => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(url: &str, maintext: &str) -> Article {
        Article {
            authors: vec!["Jane Doe".to_string()],
            date_download: "2026-08-06T12:00:00+00:00".to_string(),
            date_publish: None,
            description: Some("A test article".to_string()),
            maintext: maintext.to_string(),
            source_domain: Some("example.com".to_string()),
            title: Some("Test".to_string()),
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn test_round_trip_preserves_url_and_maintext() {
        let articles = vec![
            sample("https://example.com/a", "Summary A"),
            sample("https://example.com/b", "Summary B"),
        ];
        let json = serde_json::to_string_pretty(&articles).unwrap();
        let reloaded: Vec<Article> = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded.len(), articles.len());
        for (before, after) in articles.iter().zip(reloaded.iter()) {
            assert_eq!(before.url, after.url);
            assert_eq!(before.maintext, after.maintext);
        }
    }

    #[test]
    fn test_serialized_keys_are_sorted() {
        let json = serde_json::to_string_pretty(&sample("https://example.com", "x")).unwrap();
        let keys: Vec<usize> = [
            "\"authors\"",
            "\"date_download\"",
            "\"date_publish\"",
            "\"description\"",
            "\"maintext\"",
            "\"source_domain\"",
            "\"title\"",
            "\"url\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap())
        .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_source_falls_back_to_na() {
        let mut article = sample("https://example.com", "x");
        assert_eq!(article.source(), "https://example.com");

        article.url = Some(String::new());
        assert_eq!(article.source(), "N/A");

        article.url = None;
        assert_eq!(article.source(), "N/A");
    }
}
