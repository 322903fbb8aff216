//! Template engine for snippet rendering using Handlebars.
//!
//! Provides a wrapper around Handlebars with the five snippet templates
//! pre-registered. HTML escaping is disabled: snippets are code, and the
//! placeholder markers (`<value>`) must come through untouched.
//!
//! # Examples
//!
//! ```
//! use snippet_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "Hello <{{name}}>").unwrap();
//! let result = engine.render("greeting", &json!({"name": "World"})).unwrap();
//! assert_eq!(result, "Hello <World>");
//! ```

use crate::types::SnippetFormat;
use handlebars::Handlebars;
use serde::Serialize;
use snippet_core::{Error, Result};

const SNIPPET_TEMPLATES: [(SnippetFormat, &str); 5] = [
    (
        SnippetFormat::ListRecords,
        include_str!("../templates/list-records.ts.hbs"),
    ),
    (
        SnippetFormat::TriggerAction,
        include_str!("../templates/trigger-action.ts.hbs"),
    ),
    (SnippetFormat::Curl, include_str!("../templates/curl.sh.hbs")),
    (
        SnippetFormat::StartSync,
        include_str!("../templates/start-sync.ts.hbs"),
    ),
    (
        SnippetFormat::SetMetadata,
        include_str!("../templates/set-metadata.ts.hbs"),
    ),
];

/// Template engine for snippet rendering.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the snippet templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (format, source) in SNIPPET_TEMPLATES {
            handlebars
                .register_template_string(format.template_name(), source)
                .map_err(|e| Error::TemplateError {
                    template: format.template_name().to_string(),
                    message: format!("Failed to register template: {e}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A referenced variable is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template with the same name.
    ///
    /// Registering under a built-in name (for example `curl`) overrides that
    /// snippet's layout.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string("start-sync", "sync {{sync_name}} for {{provider}}")
    ///     .unwrap();
    /// assert!(engine.has_template("start-sync"));
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("Failed to register template: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        for format in SnippetFormat::ALL {
            assert!(engine.has_template(format.template_name()));
        }
    }

    #[test]
    fn test_render_start_sync_template() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "client": {"package": "@nangohq/node", "class_name": "Nango", "binding": "nango"},
            "credential": "sk",
            "provider": "github",
            "sync_name": "issues"
        });

        let rendered = engine.render("start-sync", &context).unwrap();
        assert!(rendered.contains("startSync('github', ['issues'], '<CONNECTION-ID>')"));
    }

    #[test]
    fn test_no_html_escaping() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("raw", "{{value}}")
            .unwrap();

        let rendered = engine
            .render("raw", &json!({"value": "'<a & b>' \"q\""}))
            .unwrap();
        assert_eq!(rendered, "'<a & b>' \"q\"");
    }

    #[test]
    fn test_render_nonexistent_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("nonexistent", &json!({})).unwrap_err();
        assert!(err.is_template_error());
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_strict_mode_fails_on_missing_variable() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("curl", &json!({"verb": "GET"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_invalid_template_syntax() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("invalid", "Hello {{name");
        assert!(result.unwrap_err().is_template_error());
    }

    #[test]
    fn test_custom_template_override() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("override", "Version 1")
            .unwrap();
        engine
            .register_template_string("override", "Version 2")
            .unwrap();

        let result = engine.render("override", &json!({})).unwrap();
        assert_eq!(result, "Version 2");
    }

    #[test]
    fn test_concurrent_template_usage() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateEngine>();
    }
}
