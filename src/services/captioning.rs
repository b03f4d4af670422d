//! Image captioning collaborator
//!
//! Produces a one-sentence description of the uploaded photo. Captioning is
//! best effort: every failure degrades to `None` so a recommendation can
//! still be generated without the "Detected" annotation.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Caption used when the model answers without any generated text
pub const FALLBACK_CAPTION: &str = "a clothing item";

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Captioner: Send + Sync {
    /// Describes a base64-encoded image, or returns `None` if no caption is available
    async fn caption(&self, image_base64: &str) -> Option<String>;

    /// Captioner name for logging
    fn name(&self) -> &'static str;
}

/// Hugging Face inference API client for the BLIP captioning model
#[derive(Clone)]
pub struct HuggingFaceCaptioner {
    http_client: HttpClient,
    api_key: String,
    model_url: String,
}

#[derive(Serialize)]
struct CaptionRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct CaptionResult {
    #[serde(default)]
    generated_text: Option<String>,
}

impl HuggingFaceCaptioner {
    pub fn new(api_key: String, model_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            model_url,
        })
    }

    async fn request_caption(&self, image_base64: &str) -> AppResult<String> {
        let response = self
            .http_client
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .json(&CaptionRequest {
                inputs: image_base64,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Captioning API returned status {}: {}",
                status, body
            )));
        }

        let results: Vec<CaptionResult> = response.json().await?;
        Ok(Self::caption_from_results(results))
    }

    /// First generated caption, or the generic fallback when the model gave none
    fn caption_from_results(results: Vec<CaptionResult>) -> String {
        results
            .into_iter()
            .next()
            .and_then(|r| r.generated_text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| FALLBACK_CAPTION.to_string())
    }
}

#[async_trait::async_trait]
impl Captioner for HuggingFaceCaptioner {
    async fn caption(&self, image_base64: &str) -> Option<String> {
        match self.request_caption(image_base64).await {
            Ok(caption) => {
                tracing::debug!(caption = %caption, "Image captioned");
                Some(caption)
            }
            Err(e) => {
                tracing::warn!(
                    captioner = self.name(),
                    error = %e,
                    "Image captioning failed, continuing without caption"
                );
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}

/// Captioner used when captioning is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCaptioner;

#[async_trait::async_trait]
impl Captioner for DisabledCaptioner {
    async fn caption(&self, _image_base64: &str) -> Option<String> {
        None
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
