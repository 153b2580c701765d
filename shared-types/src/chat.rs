use crate::financial::FinancialRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum MessageSender {
    User,
    Assistant,
}

impl MessageSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSender::User => "user",
            MessageSender::Assistant => "assistant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(MessageSender::User),
            "assistant" => Some(MessageSender::Assistant),
            _ => None,
        }
    }
}

/// Chat message kept in the message log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ChatMessage {
    pub id: i64,
    pub sender: MessageSender,
    pub text: String,
    pub created_at: i64,
}

/// One exchange from the chat tab: what the user typed and what the model answered
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ChatTurnRequest {
    pub user_message: String,
    pub assistant_reply: String,
}

/// Where the assistant reply of a chat turn ended up
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ChatTurnOutcome {
    Record { record: FinancialRecord },
    Message { message: ChatMessage },
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ChatMessagesResponse {
    pub messages: Vec<ChatMessage>,
}
