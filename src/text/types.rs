use serde::Deserialize;

/// The slice of a chat completion response this service reads. Every field
/// is defaulted so partially-shaped bodies still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionEnvelope {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionEnvelope {
    /// Returns the first choice's content, or the whole raw body when the
    /// body is not a completion or carries no choices.
    pub fn extract_content(raw: &str) -> String {
        match serde_json::from_str::<ChatCompletionEnvelope>(raw) {
            Ok(envelope) => match envelope.choices.into_iter().next() {
                Some(choice) => choice.message.content.unwrap_or_default(),
                None => raw.to_string(),
            },
            Err(_) => raw.to_string(),
        }
    }
}
