/// The address a local Ollama server listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Builder for [`OllamaConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OllamaConfigBuilder {
    model: String,
    base_url: Option<String>,
}

impl OllamaConfigBuilder {
    /// Creates a builder for the given model name, e.g. `gemma3:4b`.
    #[inline]
    pub fn with_model<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            base_url: None,
        }
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> OllamaConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        OllamaConfig {
            model: self.model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Configuration for the Ollama provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OllamaConfig {
    pub(crate) model: String,
    pub(crate) base_url: String,
}

impl OllamaConfig {
    /// Returns the model name.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the base URL, without a trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OllamaConfigBuilder::with_model("gemma3:4b").build();
        assert_eq!(config.model(), "gemma3:4b");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.chat_url(), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_trailing_slash() {
        let config = OllamaConfigBuilder::with_model("gemma3:4b")
            .with_base_url("http://gpu-box:11434/")
            .build();
        assert_eq!(config.chat_url(), "http://gpu-box:11434/api/chat");
    }
}
