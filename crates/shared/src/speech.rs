use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

use crate::audio::{Clip, SAMPLE_RATE};

/// The two narrator voices, alternated article by article.
pub const NARRATOR_VOICES: [&str; 2] = ["oWAxZDx7w5VEj9dCyTzz", "flq6f7yk4E4fJM5XTYuZ"];

pub const SPONSOR_VOICE: &str = "oWAxZDx7w5VEj9dCyTzz";

pub const SPONSOR_MESSAGE: &str = "This podcast is brought to you by Flint. s h, \
    Tech consulting company, made with the help of OpenAI and Elevenlabs.";

const TTS_MODEL: &str = "eleven_monolingual_v1";

#[derive(Serialize)]
struct SpeechRequest {
    text: String,
    model_id: String,
}

pub struct SpeechClient {
    client: Client,
    api_key: String,
}

impl SpeechClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_key })
    }

    /// Synthesize text with the given voice, returning a PCM clip.
    pub async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Clip> {
        let url = format!(
            "https://api.elevenlabs.io/v1/text-to-speech/{}?output_format=pcm_22050",
            voice_id
        );

        let request = SpeechRequest {
            text: text.to_string(),
            model_id: TTS_MODEL.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to ElevenLabs API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("ElevenLabs API error: {} - {}", status, error_text);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read audio bytes from ElevenLabs API")?;

        if bytes.is_empty() {
            anyhow::bail!("ElevenLabs API returned no audio for voice {}", voice_id);
        }

        Ok(Clip::from_pcm_bytes(&bytes, SAMPLE_RATE))
    }

    /// Synthesize the closing sponsor message.
    pub async fn synthesize_sponsor(&self) -> Result<Clip> {
        self.synthesize(SPONSOR_MESSAGE, SPONSOR_VOICE).await
    }
}
