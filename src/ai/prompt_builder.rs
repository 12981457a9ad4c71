use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Instruction sent as the system message. Output is requested in Portuguese.
#[must_use]
pub fn summary_instruction(max_sentences: u8) -> String {
    format!("Resuma o texto em exatamente {max_sentences} frases em português. Seja direto.")
}

/// Build the chat prompt for summarizing `text` into `max_sentences` sentences.
///
/// The input text is forwarded untouched as the user message.
#[must_use]
pub fn build_summary_prompt(text: &str, max_sentences: u8) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(summary_instruction(max_sentences)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(text.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

/// Rough token estimate used for logging only.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}
