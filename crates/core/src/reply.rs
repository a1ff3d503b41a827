/// Post-processing applied to model replies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplyPolicy {
    /// Keep only the first `n` whitespace-separated words.
    pub word_limit: Option<usize>,
    /// Canned reply used when no model backend is available.
    pub fallback: Option<String>,
}

impl ReplyPolicy {
    /// Shapes a raw model reply according to this policy.
    pub fn shape(&self, reply: &str) -> String {
        match self.word_limit {
            Some(limit) => reply
                .split_whitespace()
                .take(limit)
                .collect::<Vec<_>>()
                .join(" "),
            None => reply.to_owned(),
        }
    }
}
