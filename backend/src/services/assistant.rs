//! Plant assistant service
//!
//! Wraps the canned assistant with a simulated processing delay so the chat
//! UI can show its "analyzing" state.

use std::time::Duration;

use chrono::Utc;
use shared::{assistant, AssistantReply, AssistantRequest, ChatMessage};

use crate::error::AppResult;

/// Assistant service for chat replies
#[derive(Clone)]
pub struct AssistantService {
    reply_delay: Duration,
}

impl AssistantService {
    /// Create a new AssistantService instance
    pub fn new(reply_delay: Duration) -> Self {
        Self { reply_delay }
    }

    /// Opening message of a conversation
    pub fn greeting(&self) -> ChatMessage {
        assistant::greeting(Utc::now())
    }

    /// Answer one chat message
    pub async fn reply(&self, request: AssistantRequest) -> AppResult<AssistantReply> {
        // Reject bad input before making the caller wait
        let reply = assistant::respond(&request, Utc::now())?;

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        tracing::debug!(
            has_image = reply.user.has_image,
            intent = ?reply.intent,
            "Assistant replied"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::{ChatIntent, ChatRole};

    #[tokio::test]
    async fn test_text_reply() {
        let service = AssistantService::new(Duration::ZERO);
        let reply = service
            .reply(AssistantRequest {
                text: Some("best fertilizer for corn?".to_string()),
                image: None,
            })
            .await
            .unwrap();
        assert_eq!(reply.intent, Some(ChatIntent::NutritionHelp));
        assert_eq!(reply.reply.role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_invalid_image_is_validation_error() {
        let service = AssistantService::new(Duration::ZERO);
        let result = service
            .reply(AssistantRequest {
                text: None,
                image: Some("data:image/png;base64,@@@".to_string()),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let service = AssistantService::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        service
            .reply(AssistantRequest {
                text: Some("hello".to_string()),
                image: None,
            })
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_greeting() {
        let service = AssistantService::new(Duration::ZERO);
        assert_eq!(service.greeting().content, assistant::GREETING);
    }
}
