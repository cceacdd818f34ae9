//! Assistant chat models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who sent a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A message in the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub has_image: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        role: ChatRole,
        content: impl Into<String>,
        has_image: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            has_image,
            timestamp,
        }
    }
}

/// A message sent to the assistant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Photo as a data URL (`data:image/jpeg;base64,...`) or bare base64
    #[serde(default)]
    pub image: Option<String>,
}

/// What a text-only message is asking about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    PlantHelp,
    DiseaseHelp,
    NutritionHelp,
    General,
}

/// The assistant's answer to one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantReply {
    pub user: ChatMessage,
    pub reply: ChatMessage,
    /// Set for text-only messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<ChatIntent>,
}
