use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The author of a message.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that steer the model's behavior.
    System,
    /// Text typed by the user.
    User,
    /// Text generated by the model.
    Assistant,
}

impl Role {
    /// Returns the lowercase wire name of the role.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn of a conversation.
///
/// Messages are immutable once created. There is no validation of the
/// content, empty strings are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Creates a message with the given role.
    #[inline]
    pub fn new<S: Into<String>>(role: Role, content: S) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    #[inline]
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    #[inline]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns the role of the message.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the text content of the message.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let msg = Message::assistant("Short ball leg trap");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "role": "assistant", "content": "Short ball leg trap" })
        );

        let parsed: Message =
            serde_json::from_value(json!({ "role": "system", "content": "" }))
                .unwrap();
        assert_eq!(parsed.role(), Role::System);
        assert_eq!(parsed.content(), "");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let parsed = serde_json::from_value::<Message>(
            json!({ "role": "tool", "content": "x" }),
        );
        assert!(parsed.is_err());
    }
}
