use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerateContentRequest {
    pub topics_of_interest: Vec<String>,
    pub ai_voice: String,
    pub about_context: String,
    pub post_preference: String,
}

impl Default for GenerateContentRequest {
    fn default() -> Self {
        Self {
            topics_of_interest: vec!["AI & Technology".to_string(), "Startups".to_string()],
            ai_voice: "professional".to_string(),
            about_context:
                "I want to promote my startup that creates an AI agent to help HR people to recruit"
                    .to_string(),
            post_preference: "make impactful post".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

impl Default for GenerateImageRequest {
    fn default() -> Self {
        Self {
            prompt: "A beautiful landscape with mountains and a lake".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
