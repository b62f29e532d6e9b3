//! Chat turn model for the agent chat panel.
//!
//! DESIGN
//! ======
//! The transcript is append-only and ordered oldest-first. A send cycle is
//! synchronous: the user turn is appended, the input cleared, and the reply
//! produced by a `Responder` before control returns. No model call happens
//! in this build, so the default responder echoes the prompt back under the
//! agent's name.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::{DateTime, Utc};

/// Author of a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn new(role: ChatRole, content: String, timestamp: DateTime<Utc>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content, timestamp }
    }
}

/// Failure while composing an assistant reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplyError {
    #[error("agent '{agent}' could not reply: {reason}")]
    Unavailable { agent: String, reason: String },
}

/// Produces the assistant reply for the latest user turn.
pub trait Responder {
    /// `history` already includes the user turn being answered.
    fn reply(&self, history: &[ChatTurn]) -> Result<String, ReplyError>;
}

/// Placeholder responder: `"(<agent>) <last user message>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EchoResponder {
    pub agent_name: String,
}

impl Responder for EchoResponder {
    fn reply(&self, history: &[ChatTurn]) -> Result<String, ReplyError> {
        let prompt = history
            .iter()
            .rev()
            .find(|turn| turn.role == ChatRole::User)
            .map(|turn| turn.content.as_str())
            .ok_or_else(|| ReplyError::Unavailable {
                agent: self.agent_name.clone(),
                reason: "no user message to answer".to_owned(),
            })?;
        Ok(format!("({}) {prompt}", self.agent_name))
    }
}

/// Why a send was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Blank,
    Pending,
}

/// Result of one [`ChatState::send`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Both turns were appended.
    Replied,
    /// The user turn was appended but the reply failed.
    ReplyFailed(ReplyError),
    Rejected(RejectReason),
}

/// Transcript, draft input, and pending flag for one conversation.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub turns: Vec<ChatTurn>,
    pub input: String,
    pub pending: bool,
}

impl ChatState {
    /// Whether the send button should be enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    /// Send the current input.
    ///
    /// Blank input (after trimming) and sends while a reply is pending are
    /// no-ops. The pending flag is cleared on every accepted path.
    pub fn send(&mut self, responder: &dyn Responder, now: DateTime<Utc>) -> SendOutcome {
        if self.input.trim().is_empty() {
            return SendOutcome::Rejected(RejectReason::Blank);
        }
        if self.pending {
            return SendOutcome::Rejected(RejectReason::Pending);
        }

        let content = std::mem::take(&mut self.input);
        self.turns.push(ChatTurn::new(ChatRole::User, content, now));
        self.pending = true;

        let outcome = match responder.reply(&self.turns) {
            Ok(reply) => {
                self.turns.push(ChatTurn::new(ChatRole::Assistant, reply, Utc::now()));
                SendOutcome::Replied
            }
            Err(err) => {
                log::error!("error handling message: {err}");
                SendOutcome::ReplyFailed(err)
            }
        };
        self.pending = false;
        outcome
    }

    /// Start a fresh conversation (e.g. after switching agent).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Persona shown in the chat header and used for replies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub system_prompt: &'static str,
    /// Accent color token (e.g. `"orange"`), used as a class modifier.
    pub color: &'static str,
}

impl AgentProfile {
    #[must_use]
    pub fn responder(&self) -> EchoResponder {
        EchoResponder { agent_name: self.name.to_owned() }
    }
}

/// Agents available on the chat page, in display order.
pub static AGENTS: [AgentProfile; 3] = [
    AgentProfile {
        name: "Nova",
        title: "Campaign Strategist",
        system_prompt: "You plan multi-channel campaigns and budgets.",
        color: "orange",
    },
    AgentProfile {
        name: "Echo",
        title: "Copywriter",
        system_prompt: "You write and rewrite ad headlines and body copy.",
        color: "purple",
    },
    AgentProfile {
        name: "Atlas",
        title: "Performance Analyst",
        system_prompt: "You interpret CTR, lift, and survey results.",
        color: "blue",
    },
];

/// Look up an agent by name, falling back to the first one.
#[must_use]
pub fn agent_by_name(name: &str) -> &'static AgentProfile {
    AGENTS.iter().find(|a| a.name == name).unwrap_or(&AGENTS[0])
}
