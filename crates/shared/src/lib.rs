// Public modules
pub mod audio;
pub mod config;
pub mod extractor;
pub mod io;
pub mod models;
pub mod speech;
pub mod summarizer;
pub mod transcript;

// Re-export commonly used types
pub use audio::{assemble_episode, silence, Clip, GAP_MS, SAMPLE_RATE};
pub use config::Config;
pub use extractor::{is_valid_url, ContentExtractor};
pub use models::Article;
pub use speech::{SpeechClient, NARRATOR_VOICES};
pub use summarizer::Summarizer;
pub use transcript::build_transcript;
