mod gemini_content;
mod openai_chat;

pub use gemini_content::GeminiContentProvider;
pub use openai_chat::OpenAiChatProvider;
