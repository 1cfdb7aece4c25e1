//! Client for the external question suggestion service
//!
//! Sends the set name to a generative text endpoint and returns one
//! suggested question. Every call issues a fresh request; failures are
//! surfaced once and never retried here.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default generation endpoint
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default text generation model
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Suggestion service error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("Suggestion service returned no usable text")]
    EmptyResponse,

    #[error("No API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Request/response client for question suggestions
pub struct SuggestionClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl SuggestionClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<String>,
    ) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }

    /// Build a client from environment configuration.
    ///
    /// `GEMINI_API_KEY` holds the service key; `FLASHLEARN_SUGGEST_URL`
    /// and `FLASHLEARN_SUGGEST_MODEL` override the endpoint and model.
    pub fn from_env() -> Result<Self, SuggestionError> {
        let base_url =
            env::var("FLASHLEARN_SUGGEST_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            env::var("FLASHLEARN_SUGGEST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = env::var("GEMINI_API_KEY").ok();
        Self::new(base_url, model, api_key)
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Request one suggested question for a set name
    pub async fn suggest_question(&self, set_name: &str) -> Result<String, SuggestionError> {
        let api_key = self.api_key.as_deref().ok_or(SuggestionError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: suggestion_prompt(set_name),
                }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SuggestionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        extract_question(body)
    }
}

fn suggestion_prompt(set_name: &str) -> String {
    format!(
        "You are an AI assistant designed to help students study. \
         Suggest one flashcard question based on the set they are studying.\n\n\
         Set Name: {}\n\n\
         Respond with the question text only.",
        set_name
    )
}

/// Pull the first candidate's text out of a generation response
fn extract_question(body: GenerateResponse) -> Result<String, SuggestionError> {
    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();

    let question = text.trim().to_string();
    if question.is_empty() {
        return Err(SuggestionError::EmptyResponse);
    }
    Ok(question)
}
