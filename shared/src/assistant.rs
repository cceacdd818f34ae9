//! Canned plant assistant
//!
//! Stand-in for a photo identification service. Photos are matched to one of
//! a few fixed identifications by content hash, so the same photo always gets
//! the same answer; text messages are routed by keyword.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{AssistantReply, AssistantRequest, ChatIntent, ChatMessage, ChatRole};

/// Opening message of every conversation
pub const GREETING: &str = "Hello! I'm your AI farming assistant. You can upload photos of plants, and I'll help identify them and provide growing tips. What can I help you with today?";

/// Content recorded for a photo sent without text
pub const IMAGE_ONLY_CONTENT: &str = "Uploaded an image for analysis";

const IDENTIFICATIONS: [&str; 3] = [
    "This appears to be a tomato plant (Solanum lycopersicum). Based on the leaf structure and growth pattern, it looks healthy! Here are some care tips:\n\n\u{2022} Water regularly but avoid overwatering\n\u{2022} Ensure 6-8 hours of sunlight daily\n\u{2022} Consider staking for support as it grows\n\u{2022} Watch for common pests like aphids",
    "I can see this is a wheat plant (Triticum aestivum) in its vegetative stage. The leaves look healthy with good color:\n\n\u{2022} Continue regular watering\n\u{2022} Monitor for rust diseases\n\u{2022} Consider nitrogen fertilizer application\n\u{2022} Expect heading stage in 4-6 weeks",
    "This looks like a corn plant (Zea mays) in early growth stage. The plant appears vigorous:\n\n\u{2022} Maintain consistent soil moisture\n\u{2022} Side-dress with nitrogen fertilizer\n\u{2022} Watch for corn borers\n\u{2022} Ensure proper spacing for air circulation",
];

/// Errors for messages the assistant cannot handle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("message must contain text or an image")]
    EmptyMessage,

    #[error("image is not valid base64 data")]
    InvalidImage,
}

/// Opening assistant message
pub fn greeting(now: DateTime<Utc>) -> ChatMessage {
    ChatMessage::new(ChatRole::Assistant, GREETING, false, now)
}

/// Classify a text message by keyword
pub fn classify_intent(text: &str) -> ChatIntent {
    let query = text.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| query.contains(w));

    if mentions(&["plant", "crop"]) {
        ChatIntent::PlantHelp
    } else if mentions(&["disease", "pest"]) {
        ChatIntent::DiseaseHelp
    } else if mentions(&["fertilizer", "nutrition"]) {
        ChatIntent::NutritionHelp
    } else {
        ChatIntent::General
    }
}

/// Canned answer for a text intent
pub fn intent_reply(intent: ChatIntent) -> &'static str {
    match intent {
        ChatIntent::PlantHelp => "I'd be happy to help identify plants! Please upload a clear photo of the plant you'd like me to analyze, and I'll provide identification and care tips.",
        ChatIntent::DiseaseHelp => "For disease and pest identification, a photo would be very helpful. Upload an image showing the affected area, and I'll help identify the issue and suggest treatments.",
        ChatIntent::NutritionHelp => "Plant nutrition depends on the specific crop and growth stage. Could you tell me what crop you're growing, or upload a photo so I can provide targeted fertilizer recommendations?",
        ChatIntent::General => "I'm here to help with plant identification and farming advice! You can ask me about crop care, upload plant photos for identification, or inquire about common farming practices.",
    }
}

/// Decode a data URL or bare base64 payload into raw image bytes
pub fn decode_image(image: &str) -> Result<Vec<u8>, AssistantError> {
    let payload = match image.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or(AssistantError::InvalidImage)?,
        None => image,
    };

    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|_| AssistantError::InvalidImage)?;
    if bytes.is_empty() {
        return Err(AssistantError::InvalidImage);
    }
    Ok(bytes)
}

/// Pick the canned identification for a photo
pub fn identify_plant(image_bytes: &[u8]) -> &'static str {
    let digest = Sha256::digest(image_bytes);
    IDENTIFICATIONS[usize::from(digest[0]) % IDENTIFICATIONS.len()]
}

/// Answer one message
pub fn respond(
    request: &AssistantRequest,
    now: DateTime<Utc>,
) -> Result<AssistantReply, AssistantError> {
    let text = request
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let image = request
        .image
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty());

    let (content, intent) = match (text, image) {
        (_, Some(image)) => (identify_plant(&decode_image(image)?), None),
        (Some(text), None) => {
            let intent = classify_intent(text);
            (intent_reply(intent), Some(intent))
        }
        (None, None) => return Err(AssistantError::EmptyMessage),
    };

    let user = ChatMessage::new(
        ChatRole::User,
        text.unwrap_or(IMAGE_ONLY_CONTENT),
        image.is_some(),
        now,
    );
    let reply = ChatMessage::new(ChatRole::Assistant, content, false, now);

    Ok(AssistantReply {
        user,
        reply,
        intent,
    })
}
