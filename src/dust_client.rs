use crate::config::DustSettings;
use crate::error::{GatewayError, Result};
use crate::models::GenerateContentRequest;
use crate::prompt::assemble_prompt;
use crate::request_id::{REQUEST_ID_HEADER, RequestId};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const CONTENT_PATH: &str = "conversation.content[1][0].content";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationRequest<'a> {
    message: ConversationMessage<'a>,
    blocking: bool,
    title: &'a str,
    skip_tools_validation: bool,
}

#[derive(Debug, Serialize)]
struct ConversationMessage<'a> {
    content: &'a str,
    mentions: Vec<AgentMention<'a>>,
    context: MessageContext<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AgentMention<'a> {
    configuration_id: &'a str,
}

#[derive(Debug, Serialize)]
struct MessageContext<'a> {
    username: &'a str,
    timezone: &'a str,
}

/// What the agent produced. Unusable output is still delivered to the caller
/// as data, so only transport problems surface as [`GatewayError`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedContent {
    Json(Value),
    Malformed(String),
}

impl GeneratedContent {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => GeneratedContent::Json(value),
            Err(e) => {
                warn!("Generated content is not valid JSON ({}): {}", e, text);
                GeneratedContent::Malformed(text.to_string())
            }
        }
    }

    pub fn into_body(self) -> Value {
        match self {
            GeneratedContent::Json(value) => value,
            GeneratedContent::Malformed(text) => json!({
                "error": format!("Failed to parse generated content as JSON: {}", text)
            }),
        }
    }
}

/// The agent's reply sits in the second transcript entry, as the first item
/// of that entry.
pub fn extract_generated_text(body: &Value) -> Option<&str> {
    body.get("conversation")?
        .get("content")?
        .get(1)?
        .get(0)?
        .get("content")?
        .as_str()
}

#[derive(Debug)]
pub struct DustClient {
    http_client: Arc<reqwest::Client>,
    settings: DustSettings,
    template_path: PathBuf,
}

impl DustClient {
    pub fn new(http_client: Arc<reqwest::Client>, settings: DustSettings, template_path: PathBuf) -> Self {
        Self { http_client, settings, template_path }
    }

    fn conversations_url(&self) -> String {
        format!(
            "{}/api/v1/w/{}/assistant/conversations",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.workspace_id
        )
    }

    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
        request_id: Option<&RequestId>,
    ) -> Result<GeneratedContent> {
        let prompt = assemble_prompt(&self.template_path, request);
        debug!("Combined prompt content:\n{}", prompt);

        let body = ConversationRequest {
            message: ConversationMessage {
                content: &prompt,
                mentions: vec![AgentMention { configuration_id: &self.settings.agent_id }],
                context: MessageContext {
                    username: &self.settings.username,
                    timezone: &self.settings.timezone,
                },
            },
            blocking: true,
            title: &self.settings.title,
            skip_tools_validation: true,
        };

        let target_url = self.conversations_url();
        let mut target_request = self
            .http_client
            .post(&target_url)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("Authorization", format!("Bearer {}", self.settings.api_key));
        if let Some(id) = request_id {
            target_request = target_request.header(REQUEST_ID_HEADER, id.0.as_str());
        }

        info!("Forwarding conversation to: {}", target_url);
        let started = Instant::now();
        let response = target_request.json(&body).send().await?;
        info!("Dust API responded in {:.2?}", started.elapsed());

        if response.status() != StatusCode::OK {
            let status = response.status();
            warn!("Dust API call failed with status {}", status);
            return Err(GatewayError::DustStatus(status.as_u16()));
        }

        let response_json: Value = response.json().await?;
        let text = match extract_generated_text(&response_json) {
            Some(text) => text.to_string(),
            None => {
                warn!("Unexpected Dust response shape, {} not found", CONTENT_PATH);
                format!("Error extracting generated content: missing {}", CONTENT_PATH)
            }
        };

        Ok(GeneratedContent::parse(&text))
    }
}
