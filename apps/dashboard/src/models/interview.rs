use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Ai,
    User,
}

/// One utterance in an interview transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Turn {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Ai,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewAction {
    Start,
    Answer,
}

/// POST /mock-interview body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub action: InterviewAction,
    pub message: String,
}

/// POST /mock-interview response. Either field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewReply {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl InterviewReply {
    /// First non-empty of `question`, then `feedback` when allowed.
    pub fn pick(&self, include_feedback: bool) -> Option<&str> {
        non_empty(&self.question).or_else(|| {
            if include_feedback {
                non_empty(&self.feedback)
            } else {
                None
            }
        })
    }
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}
