use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub elevenlabs_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .context(
                "OPENAI_API_KEY not found.\n\n\
                To fix this, create ~/.config/press-podcast/.env with:\n  \
                OPENAI_API_KEY=your_key_here\n  \
                ELEVENLABS_API_KEY=your_key_here\n\n\
                Get your OpenAI API key from: https://platform.openai.com/api-keys"
            )?;

        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY")
            .context(
                "ELEVENLABS_API_KEY not found.\n\n\
                To fix this, create ~/.config/press-podcast/.env with:\n  \
                OPENAI_API_KEY=your_key_here\n  \
                ELEVENLABS_API_KEY=your_key_here\n\n\
                Get your ElevenLabs API key from: https://elevenlabs.io/app/settings/api-keys"
            )?;

        Ok(Self {
            openai_api_key,
            elevenlabs_api_key,
        })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/press-podcast/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("press-podcast").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                if dotenvy::from_path(&home_path).is_ok() {
                    return;
                }
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
