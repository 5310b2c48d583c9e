use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::{
    assemble_episode, build_transcript, is_valid_url, Clip, Config, ContentExtractor,
    SpeechClient, Summarizer, GAP_MS, NARRATOR_VOICES,
};

#[derive(Parser)]
#[command(name = "press-podcast")]
#[command(about = "Turn news article URLs into a multi-voice podcast episode")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and summarize articles, storing them in articles.json
    Collect {
        /// Article URLs to collect
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },
    /// Synthesize one clip per article, assemble the episode and write the transcript
    Synthesize,
    /// Join existing clips and the sponsor message into the final episode
    Assemble,
    /// Write a promotional teaser for the collected articles
    Teaser,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Collect { urls } => collect(&config, &urls).await,
        Commands::Synthesize => synthesize(&config).await,
        Commands::Assemble => {
            let speech = SpeechClient::new(config.elevenlabs_api_key.clone())?;
            assemble(&speech).await
        }
        Commands::Teaser => teaser(&config).await,
    }
}

async fn collect(config: &Config, urls: &[String]) -> Result<()> {
    let extractor = ContentExtractor::new()?;
    let summarizer = Summarizer::new(config.openai_api_key.clone())?;

    let mut articles = Vec::new();
    for url in urls {
        if !is_valid_url(url) {
            println!("⚠ Skipping invalid URL: {}", url);
            continue;
        }

        println!("🌐 Fetching {}", url);
        let mut article = extractor.fetch_article(url).await?;

        println!("🤖 Summarizing for narration...");
        article.maintext = summarizer.narration_summary(&article.maintext).await?;

        articles.push(article);
    }

    let path = shared::io::save_articles(&articles)?;
    println!("✓ Saved {} articles to {}", articles.len(), path.display());

    Ok(())
}

async fn synthesize(config: &Config) -> Result<()> {
    let articles = shared::io::load_articles()?;
    let speech = SpeechClient::new(config.elevenlabs_api_key.clone())?;
    let final_dir = shared::io::ensure_final_dir()?;

    println!("🎙 Synthesizing {} articles...", articles.len());
    for (idx, article) in articles.iter().enumerate() {
        let voice = NARRATOR_VOICES[idx % NARRATOR_VOICES.len()];

        let clip = speech.synthesize(&article.maintext, voice).await?;
        let path = final_dir.join(format!("{}.wav", idx));
        clip.save_wav(&path)?;

        println!("✓ Wrote {}", path.display());
    }

    assemble(&speech).await?;

    let transcript = build_transcript(&articles);
    let path = shared::io::save_transcript(&transcript)?;
    println!("✓ Transcript saved to {}", path.display());

    Ok(())
}

async fn assemble(speech: &SpeechClient) -> Result<()> {
    let final_dir = shared::io::ensure_final_dir()?;
    let clip_paths = shared::io::list_clips(&final_dir)?;

    println!("🔊 Joining {} clips...", clip_paths.len());
    let mut clips = Vec::new();
    for path in &clip_paths {
        clips.push(Clip::load_wav(path)?);
    }

    println!("🎙 Synthesizing sponsor message...");
    let sponsor = speech.synthesize_sponsor().await?;

    let episode = assemble_episode(&clips, &sponsor, GAP_MS);
    let path = final_dir.join(shared::io::EPISODE_FILE);
    episode.save_wav(&path)?;

    println!(
        "✓ Episode saved to {} ({} seconds)",
        path.display(),
        episode.duration_ms() / 1000
    );

    Ok(())
}

async fn teaser(config: &Config) -> Result<()> {
    let raw = shared::io::read_articles_raw()?;
    let summarizer = Summarizer::new(config.openai_api_key.clone())?;

    println!("🤖 Writing episode teaser...");
    let teaser = summarizer.episode_teaser(&raw).await?;

    shared::io::ensure_final_dir()?;
    let path = shared::io::save_teaser(&teaser)?;
    println!("✓ Teaser saved to {}", path.display());

    Ok(())
}
