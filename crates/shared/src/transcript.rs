use crate::models::Article;

/// Build the episode transcript: each article's narration text followed by
/// its source URL, with a fixed separator before every entry.
pub fn build_transcript(articles: &[Article]) -> String {
    let mut transcript = String::new();

    for article in articles {
        transcript.push_str("\n\n---\n");
        transcript.push_str(&article.maintext);
        transcript.push_str("\n\nSource => ");
        transcript.push_str(article.source());
    }

    transcript
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(maintext: &str, url: Option<&str>) -> Article {
        Article {
            authors: Vec::new(),
            date_download: "2026-08-06T12:00:00+00:00".to_string(),
            date_publish: None,
            description: None,
            maintext: maintext.to_string(),
            source_domain: None,
            title: None,
            url: url.map(|u| u.to_string()),
        }
    }

    #[test]
    fn test_three_article_transcript() {
        let articles = vec![
            article("A", Some("u1")),
            article("B", Some("u2")),
            article("C", Some("u3")),
        ];

        assert_eq!(
            build_transcript(&articles),
            "\n\n---\nA\n\nSource => u1\n\n---\nB\n\nSource => u2\n\n---\nC\n\nSource => u3"
        );
    }

    #[test]
    fn test_missing_url_renders_na() {
        let articles = vec![article("A", None)];
        assert_eq!(build_transcript(&articles), "\n\n---\nA\n\nSource => N/A");
    }

    #[test]
    fn test_empty_list_is_empty_transcript() {
        assert_eq!(build_transcript(&[]), "");
    }
}
