use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Article;

pub const ARTICLES_FILE: &str = "articles.json";
pub const FINAL_DIR: &str = "final";
pub const EPISODE_FILE: &str = "podcast_final.wav";
pub const TRANSCRIPT_FILE: &str = "transcript.txt";
pub const TEASER_FILE: &str = "podcast_teaser.txt";

/// Persist the collected articles, pretty-printed with sorted keys.
pub fn save_articles(articles: &[Article]) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(articles).context("Failed to serialize articles")?;

    let path = PathBuf::from(ARTICLES_FILE);
    fs::write(&path, json).context("Failed to write articles file")?;

    Ok(path)
}

pub fn load_articles() -> Result<Vec<Article>> {
    let path = Path::new(ARTICLES_FILE);
    if !path.exists() {
        anyhow::bail!(
            "{} not found. Run the collect command first.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let articles: Vec<Article> = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse {}. The file may be corrupted or not a valid articles file.",
            path.display()
        )
    })?;

    Ok(articles)
}

/// The articles document as text, for prompts that embed the whole file.
pub fn read_articles_raw() -> Result<String> {
    let path = Path::new(ARTICLES_FILE);
    if !path.exists() {
        anyhow::bail!(
            "{} not found. Run the collect command first.",
            path.display()
        );
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Create the output directory if it does not exist yet. It is never
/// cleaned, so clips from a previous batch stay in place.
pub fn ensure_final_dir() -> Result<PathBuf> {
    let dir = PathBuf::from(FINAL_DIR);
    fs::create_dir_all(&dir).context("Failed to create output directory")?;
    Ok(dir)
}

/// The numeric index encoded in a clip filename, if it is one of ours.
/// `podcast_final.wav` and other non-numeric names are skipped.
pub fn clip_index(path: &Path) -> Option<usize> {
    if path.extension().and_then(|e| e.to_str()) != Some("wav") {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse::<usize>().ok())
}

/// All per-article clips in the output directory, ordered by their numeric
/// index rather than by filename string, so `10.wav` sorts after `9.wav`.
pub fn list_clips(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut clips: Vec<(usize, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read output directory {}", dir.display()))?
    {
        let path = entry?.path();
        if let Some(index) = clip_index(&path) {
            clips.push((index, path));
        }
    }

    clips.sort_by_key(|(index, _)| *index);

    Ok(clips.into_iter().map(|(_, path)| path).collect())
}

pub fn save_transcript(transcript: &str) -> Result<PathBuf> {
    let path = Path::new(FINAL_DIR).join(TRANSCRIPT_FILE);
    fs::write(&path, transcript).context("Failed to write transcript file")?;
    Ok(path)
}

pub fn save_teaser(teaser: &str) -> Result<PathBuf> {
    let path = Path::new(FINAL_DIR).join(TEASER_FILE);
    fs::write(&path, teaser).context("Failed to write teaser file")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_index_parses_numeric_stems() {
        assert_eq!(clip_index(Path::new("final/0.wav")), Some(0));
        assert_eq!(clip_index(Path::new("final/11.wav")), Some(11));
    }

    #[test]
    fn test_clip_index_skips_other_files() {
        assert_eq!(clip_index(Path::new("final/podcast_final.wav")), None);
        assert_eq!(clip_index(Path::new("final/transcript.txt")), None);
        assert_eq!(clip_index(Path::new("final/0.mp3")), None);
    }

    #[test]
    fn test_clips_sort_numerically_not_lexicographically() {
        let names = ["0", "1", "10", "11", "2", "3", "9"];
        let mut indexed: Vec<(usize, &str)> = names
            .iter()
            .map(|n| {
                let name = format!("final/{}.wav", n);
                (clip_index(Path::new(&name)).unwrap(), *n)
            })
            .collect();

        indexed.sort_by_key(|(index, _)| *index);

        let ordered: Vec<&str> = indexed.into_iter().map(|(_, n)| n).collect();
        assert_eq!(ordered, vec!["0", "1", "2", "3", "9", "10", "11"]);
    }
}
