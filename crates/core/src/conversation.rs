//! Conversation-related types.

use crease_model::{Message, Role};

/// An ordered transcript of chat turns for one interactive session.
///
/// Insertion order is chronological order. Role alternation is not
/// enforced, so consecutive messages of the same role are allowed.
///
/// A conversation may carry a system *seed*, a preset message that stays
/// at the front of the transcript and survives [`Conversation::clear`].
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Conversation {
    seed: Option<Message>,
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation without a seed.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a conversation that starts with the given seed message.
    #[inline]
    pub fn with_seed(seed: Message) -> Self {
        let mut conversation = Self::default();
        conversation.initialize(Some(seed));
        conversation
    }

    /// Resets the conversation, optionally pre-populated with `seed`.
    ///
    /// This is unconditional: any history is discarded, and the seed
    /// replaces the previous one. Owners that want "create if absent"
    /// semantics must check before calling.
    pub fn initialize(&mut self, seed: Option<Message>) {
        self.seed = seed;
        self.clear();
    }

    /// Appends a message with the given role to the end.
    #[inline]
    pub fn append<S: Into<String>>(&mut self, role: Role, content: S) {
        self.push(Message::new(role, content));
    }

    /// Appends a message to the end.
    #[inline]
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drops all turns, returning to the seeded (or empty) state.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.messages.extend(self.seed.clone());
    }

    /// Returns the full history, seed included.
    ///
    /// This is what gets submitted to the model.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the messages that should be shown to the user, which are
    /// all messages except system instructions.
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|msg| msg.role() != Role::System)
    }

    /// Returns the seed message, if any.
    #[inline]
    pub fn seed(&self) -> Option<&Message> {
        self.seed.as_ref()
    }

    /// Returns the number of messages, seed included.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there is no message at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of messages appended after the seed.
    #[inline]
    pub fn turn_count(&self) -> usize {
        self.messages.len() - usize::from(self.seed.is_some())
    }
}
