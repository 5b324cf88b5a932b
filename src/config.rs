use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt_template_path: PathBuf,
    pub dust: DustSettings,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DustSettings {
    pub api_base: String,
    pub workspace_id: String,
    pub agent_id: String,
    pub api_key: String,
    /// Sent as the message context of every conversation.
    pub username: String,
    pub timezone: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_base: String,
    /// Image generation is disabled when this is unset or empty.
    pub api_key: Option<String>,
    pub model: String,
    pub size: String,
    pub quality: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_template_path: PathBuf::from("prompt.txt"),
            dust: DustSettings::default(),
            openai: OpenAiSettings::default(),
        }
    }
}

impl Default for DustSettings {
    fn default() -> Self {
        Self {
            api_base: "https://dust.tt".to_string(),
            workspace_id: String::new(),
            agent_id: String::new(),
            api_key: String::new(),
            username: "slava".to_string(),
            timezone: "Europe/Paris".to_string(),
            title: "Content generation".to_string(),
        }
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com".to_string(),
            api_key: None,
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Defaults, then the optional YAML file, then the process environment.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("WORKSPACE_ID") {
            self.dust.workspace_id = v;
        }
        if let Some(v) = lookup("AGENT_ID") {
            self.dust.agent_id = v;
        }
        if let Some(v) = lookup("DUST_API_KEY") {
            self.dust.api_key = v;
        }
        if let Some(v) = lookup("DUST_API_BASE") {
            self.dust.api_base = v;
        }
        if let Some(v) = lookup("OPENAI_API_KEY") {
            self.openai.api_key = Some(v);
        }
        if let Some(v) = lookup("OPENAI_API_BASE") {
            self.openai.api_base = v;
        }
        if let Some(v) = lookup("PROMPT_TEMPLATE_PATH") {
            self.prompt_template_path = PathBuf::from(v);
        }
    }
}

impl OpenAiSettings {
    pub fn configured_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}
