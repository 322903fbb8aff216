//! Placeholder annotation of sample payloads.
//!
//! Sample payloads are pretty-printed as JSON and every string value is
//! wrapped in angle brackets (`"title": "<Bug report>"`) to mark it as
//! something the reader replaces with their own value. Keys, numbers,
//! booleans and nulls are left alone.
//!
//! The first line of a block is emitted as-is and every following line is
//! shifted right by the indent width, so a block dropped into a template
//! slot that is itself indented lines up with the code around it.
//!
//! # Examples
//!
//! ```
//! use snippet_codegen::payload::annotate;
//! use snippet_core::SamplePayload;
//! use serde_json::json;
//!
//! let payload = SamplePayload::from(json!({"x": "y"}));
//! let text = annotate(Some(&payload), false).unwrap();
//! assert_eq!(text, "{\n      \"x\": \"<y>\"\n    }");
//! ```

use crate::escape::{shell_single_quoted, typescript_single_quoted};
use serde_json::Value;
use snippet_core::{Result, SamplePayload};

/// Default continuation indent, matching the snippet templates.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Text body the documentation UI sends for an unset input.
const UNDEFINED_TEXT: &str = "undefined";

/// Annotates `payload` with the default indent.
///
/// See [`PayloadAnnotator::annotate`].
///
/// # Errors
///
/// Returns a serialization error if the payload cannot be pretty-printed.
pub fn annotate(payload: Option<&SamplePayload>, safe: bool) -> Result<String> {
    PayloadAnnotator::default().annotate(payload, safe)
}

/// Turns sample payloads into indented, placeholder-annotated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadAnnotator {
    indent_width: usize,
}

impl Default for PayloadAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl PayloadAnnotator {
    /// Creates an annotator shifting continuation lines by `indent_width`.
    #[must_use]
    pub const fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Renders a payload for a snippet argument slot.
    ///
    /// - `None` renders as empty text.
    /// - A text payload renders as a TypeScript single-quoted literal,
    ///   `'<value>'`, or `'value'` when `safe` is set. Quotes, backslashes
    ///   and line breaks inside it are escaped.
    /// - A structured payload renders as pretty-printed JSON. Unless `safe`
    ///   is set, every string value at every depth becomes `"<value>"`.
    ///
    /// Strings already wrapped as `<...>` are kept as they are, so annotating
    /// an annotated payload changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be pretty-printed.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippet_codegen::payload::PayloadAnnotator;
    /// use snippet_core::SamplePayload;
    ///
    /// let annotator = PayloadAnnotator::new(4);
    /// let text = SamplePayload::from("ticket-id");
    ///
    /// assert_eq!(annotator.annotate(Some(&text), false).unwrap(), "'<ticket-id>'");
    /// assert_eq!(annotator.annotate(Some(&text), true).unwrap(), "'ticket-id'");
    /// assert_eq!(annotator.annotate(None, false).unwrap(), "");
    /// ```
    pub fn annotate(&self, payload: Option<&SamplePayload>, safe: bool) -> Result<String> {
        match payload {
            None => Ok(String::new()),
            Some(SamplePayload::Text(text)) if safe => {
                Ok(format!("'{}'", typescript_single_quoted(text)))
            }
            Some(SamplePayload::Text(text)) => Ok(format!(
                "'{}'",
                typescript_single_quoted(&placeholder(text))
            )),
            Some(SamplePayload::Structured(value)) => self.structured(value, safe),
        }
    }

    /// Renders a payload as a raw HTTP request body for a shell `'...'` word.
    ///
    /// Text payloads are taken to be a ready-made body and used verbatim,
    /// except that empty text and the literal `undefined` count as no body.
    /// Structured payloads are annotated. Single quotes in the result are
    /// escaped for the shell either way.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be pretty-printed.
    pub fn request_body(&self, payload: Option<&SamplePayload>) -> Result<String> {
        let body = match payload {
            Some(SamplePayload::Structured(value)) => self.structured(value, false)?,
            Some(text @ SamplePayload::Text(raw))
                if !text.is_empty_text() && raw != UNDEFINED_TEXT =>
            {
                raw.clone()
            }
            _ => return Ok(String::new()),
        };
        Ok(shell_single_quoted(&body).into_owned())
    }

    fn structured(&self, value: &Value, safe: bool) -> Result<String> {
        let pretty = if safe {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string_pretty(&wrap_placeholders(value))?
        };
        Ok(self.indent_continuation(&pretty))
    }

    fn indent_continuation(&self, text: &str) -> String {
        let pad = " ".repeat(self.indent_width);
        let mut lines = text.lines();
        let mut out = String::with_capacity(text.len() + text.len() / 4);

        if let Some(first) = lines.next() {
            out.push_str(first);
        }
        for line in lines {
            out.push('\n');
            out.push_str(&pad);
            out.push_str(line);
        }
        out
    }
}

fn wrap_placeholders(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(placeholder(text)),
        Value::Array(items) => Value::Array(items.iter().map(wrap_placeholders).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), wrap_placeholders(item)))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

fn placeholder(text: &str) -> String {
    if is_placeholder(text) {
        text.to_string()
    } else {
        format!("<{text}>")
    }
}

fn is_placeholder(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('<') && text.ends_with('>')
}
