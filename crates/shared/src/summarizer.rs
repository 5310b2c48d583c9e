use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const SUMMARY_MODEL: &str = "gpt-4";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

pub struct Summarizer {
    client: Client,
    api_key: String,
}

impl Summarizer {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_key })
    }

    /// Rewrite an article body as a short spoken-news summary.
    pub async fn narration_summary(&self, maintext: &str) -> Result<String> {
        let system = "You are a helpful assistant that summarize technology articles.";
        let user = format!(
            "Here's a text I want you to summarize to between 150 and 300 words \
             and also change the tone to provide a text that will be read out loud. \
             Read out loud the summary should ressemble a news summary, short, \
             informative, friendly. The output is read at the third person (as a \
             narrator). The summary should only talk about the news article. \
             Here's the article : {}",
            maintext
        );

        self.chat(system, &user).await
    }

    /// Produce a bullet-point teaser for the whole episode. Takes the raw
    /// articles document as text, not a re-parsed article list.
    pub async fn episode_teaser(&self, articles_json: &str) -> Result<String> {
        let system = "You are a helpful assistant that writes promotional copy for podcasts.";
        let user = format!(
            "Here is a JSON document describing every article covered in a podcast \
             episode. Write an engaging teaser as bullet points, one per article, \
             that makes people want to listen to the episode. \
             Here's the document : {}",
            articles_json
        );

        self.chat(system, &user).await
    }

    async fn chat(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: SUMMARY_MODEL.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("OpenAI API error: {} - {}", status, error_text);
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .context("Failed to parse OpenAI API response")?;

        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|c| !c.is_empty());

        content.ok_or_else(|| anyhow::anyhow!("OpenAI API returned no completion"))
    }
}
