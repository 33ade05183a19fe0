//! Anthropic Messages API labeler.
//!
//! Sends each tile as a base64 PNG image block alongside a prompt asking for
//! a JSON label, one blocking request at a time.

use std::time::Duration;

use base64::Engine as _;
use image::RgbaImage;
use serde::Deserialize;

use crate::error::{Result, TiledexError};
use crate::slice::encode_png;
use crate::types::{GridPos, Label};

use super::Labeler;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
pub const API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";

/// Configuration for the Anthropic labeler.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    /// Base URL for the API (defaults to `https://api.anthropic.com`).
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Build a config from `ANTHROPIC_API_KEY` and, if set, `ANTHROPIC_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| TiledexError::Config {
                message: format!("{} is not set", API_KEY_ENV),
                help: Some(format!(
                    "Export {} with an Anthropic API key before labeling",
                    API_KEY_ENV
                )),
            })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        Ok(config)
    }

    /// Set the base URL (useful for testing with mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

/// Labels tiles through the Anthropic Messages API.
pub struct AnthropicLabeler {
    config: AnthropicConfig,
    agent: ureq::Agent,
}

impl AnthropicLabeler {
    pub fn new(config: AnthropicConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .build();
        Self { config, agent }
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    fn request_body(&self, tile: &RgbaImage, pos: GridPos) -> Result<serde_json::Value> {
        let png = encode_png(tile)?;
        let data = base64::engine::general_purpose::STANDARD.encode(&png);

        Ok(serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [{
                "role": "user",
                "content": [
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": "image/png",
                            "data": data,
                        },
                    },
                    {
                        "type": "text",
                        "text": tile_prompt(tile.width(), pos),
                    },
                ],
            }],
        }))
    }
}

impl Labeler for AnthropicLabeler {
    fn label(&mut self, tile: &RgbaImage, pos: GridPos) -> Result<Label> {
        let body = self.request_body(tile, pos)?;

        let response = self
            .agent
            .post(&self.config.messages_url())
            .set("x-api-key", &self.config.api_key)
            .set("anthropic-version", API_VERSION)
            .set("content-type", "application/json")
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let detail = resp.into_string().unwrap_or_default();
                    TiledexError::label(format!("API returned HTTP {}: {}", code, detail.trim()))
                }
                ureq::Error::Transport(t) => TiledexError::label(format!("request failed: {}", t)),
            })?;

        let message: MessagesResponse = response
            .into_json()
            .map_err(|e| TiledexError::label(format!("unreadable API response: {}", e)))?;

        let text = message
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| TiledexError::label("API response has no text content"))?;

        parse_label_response(&text)
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Prompt sent with each tile.
pub fn tile_prompt(tile_size: u32, pos: GridPos) -> String {
    format!(
        r#"Analyze this {size}x{size} pixel sprite from a roguelike game tileset (position: row {row}, col {col}).

Please provide:
1. A short descriptive ID (lowercase, underscores, e.g., "stone_wall", "wooden_door", "grass_floor")
2. A brief name (e.g., "Stone Wall", "Wooden Door", "Grass Floor")
3. A one-sentence description
4. The type (choose one: "floor", "wall", "door", "decoration", "character", "item", "other")
5. Whether it's walkable (true/false)

Respond ONLY with a JSON object in this exact format:
{{
  "id": "descriptive_id",
  "name": "Display Name",
  "description": "Brief description of the sprite.",
  "type": "floor",
  "walkable": true
}}"#,
        size = tile_size,
        row = pos.y,
        col = pos.x,
    )
}

/// Parse the model's answer into a [`Label`].
///
/// Answers wrapped in a Markdown code fence have the first and last lines
/// dropped before parsing.
pub fn parse_label_response(text: &str) -> Result<Label> {
    let trimmed = text.trim();
    let json = if trimmed.starts_with("```") {
        let start = trimmed.find('\n').map_or(trimmed.len(), |i| i + 1);
        let end = trimmed.rfind('\n').unwrap_or(start).max(start);
        &trimmed[start..end]
    } else {
        trimmed
    };

    serde_json::from_str(json)
        .map_err(|e| TiledexError::label(format!("malformed label JSON: {}", e)))
}
