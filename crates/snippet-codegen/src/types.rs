//! Snippet formats and rendered output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five presentation formats a snippet can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnippetFormat {
    /// Client call listing synced records of one model.
    ListRecords,
    /// Client call triggering an action with an input payload.
    TriggerAction,
    /// Raw HTTP request as a curl command.
    Curl,
    /// Client call starting a sync.
    StartSync,
    /// Client call setting connection metadata.
    SetMetadata,
}

impl SnippetFormat {
    /// Every format, in documentation order.
    pub const ALL: [Self; 5] = [
        Self::ListRecords,
        Self::TriggerAction,
        Self::Curl,
        Self::StartSync,
        Self::SetMetadata,
    ];

    /// Stable identifier, also used as the template name.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_codegen::SnippetFormat;
    ///
    /// assert_eq!(SnippetFormat::TriggerAction.template_name(), "trigger-action");
    /// ```
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::ListRecords => "list-records",
            Self::TriggerAction => "trigger-action",
            Self::Curl => "curl",
            Self::StartSync => "start-sync",
            Self::SetMetadata => "set-metadata",
        }
    }

    /// Language the rendered text is written in.
    #[must_use]
    pub const fn language(self) -> SnippetLanguage {
        match self {
            Self::Curl => SnippetLanguage::Shell,
            Self::ListRecords | Self::TriggerAction | Self::StartSync | Self::SetMetadata => {
                SnippetLanguage::TypeScript
            }
        }
    }
}

impl fmt::Display for SnippetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// Target syntax of a rendered snippet, for highlighting in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    /// TypeScript using the node client.
    TypeScript,
    /// POSIX shell.
    Shell,
}

impl SnippetLanguage {
    /// Highlighter identifier (`typescript` or `bash`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Shell => "bash",
        }
    }
}

/// A rendered snippet together with what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSnippet {
    /// Format the snippet was rendered in
    pub format: SnippetFormat,
    /// Syntax of `content`
    pub language: SnippetLanguage,
    /// Ready-to-paste text
    pub content: String,
}

impl RenderedSnippet {
    /// Wraps rendered text for `format`.
    #[must_use]
    pub const fn new(format: SnippetFormat, content: String) -> Self {
        Self {
            format,
            language: format.language(),
            content,
        }
    }
}

impl fmt::Display for RenderedSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_curl_is_shell() {
        for format in SnippetFormat::ALL {
            let expected = if format == SnippetFormat::Curl {
                SnippetLanguage::Shell
            } else {
                SnippetLanguage::TypeScript
            };
            assert_eq!(format.language(), expected, "{format}");
        }
    }

    #[test]
    fn test_format_serializes_kebab_case() {
        let json = serde_json::to_string(&SnippetFormat::SetMetadata).unwrap();
        assert_eq!(json, "\"set-metadata\"");
    }

    #[test]
    fn test_rendered_snippet_language_follows_format() {
        let snippet = RenderedSnippet::new(SnippetFormat::Curl, "curl".to_string());
        assert_eq!(snippet.language.as_str(), "bash");
        assert_eq!(snippet.to_string(), "curl");
    }
}
