//! Named-slot prompt templates.
//!
//! Templates mark slots as `{name}` where `name` is lowercase ASCII and
//! underscores. Rendering substitutes every slot from a [`PromptVars`] map and
//! fails on the first slot without a value, so an incomplete prompt never
//! reaches the completion provider.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

fn slot_pattern() -> &'static Regex {
    static SLOT: OnceLock<Regex> = OnceLock::new();
    SLOT.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("slot pattern compiles"))
}

/// Errors raised while composing a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A slot in the template had no value supplied.
    #[error("template `{template}` is missing a value for slot `{slot}`")]
    MissingSlot {
        /// Template being rendered.
        template: &'static str,
        /// The slot that had no value.
        slot: String,
    },
}

/// Values for template slots, keyed by slot name.
#[derive(Debug, Clone, Default)]
pub struct PromptVars<'a> {
    values: HashMap<&'static str, &'a str>,
}

impl<'a> PromptVars<'a> {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot value, replacing any earlier one.
    pub fn with(mut self, slot: &'static str, value: &'a str) -> Self {
        self.values.insert(slot, value);
        self
    }

    /// Look up a slot value.
    pub fn get(&self, slot: &str) -> Option<&'a str> {
        self.values.get(slot).copied()
    }
}

/// A static prompt template with `{slot}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    text: &'static str,
}

impl PromptTemplate {
    /// Declare a template. `name` only shows up in error messages.
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    /// Template name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Slot names in order of first appearance, without duplicates.
    pub fn slots(&self) -> Vec<&'static str> {
        let mut slots = Vec::new();
        for caps in slot_pattern().captures_iter(self.text) {
            if let Some(slot) = caps.get(1).map(|m| m.as_str()) {
                if !slots.contains(&slot) {
                    slots.push(slot);
                }
            }
        }
        slots
    }

    /// Substitute every slot with its value.
    ///
    /// Values are inserted verbatim; braces inside a value are not expanded.
    /// Values for slots the template does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingSlot`] for the first slot without a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use codeagentix_server::prompts::{PromptTemplate, PromptVars};
    ///
    /// let template = PromptTemplate::new("greeting", "Hello {name}!");
    /// let rendered = template.render(&PromptVars::new().with("name", "{world}")).unwrap();
    /// assert_eq!(rendered, "Hello {world}!");
    /// ```
    pub fn render(&self, vars: &PromptVars<'_>) -> Result<String, PromptError> {
        let mut rendered = String::with_capacity(self.text.len());
        let mut cursor = 0;

        for caps in slot_pattern().captures_iter(self.text) {
            let (Some(whole), Some(slot)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = vars
                .get(slot.as_str())
                .ok_or_else(|| PromptError::MissingSlot {
                    template: self.name,
                    slot: slot.as_str().to_string(),
                })?;
            rendered.push_str(&self.text[cursor..whole.start()]);
            rendered.push_str(value);
            cursor = whole.end();
        }

        rendered.push_str(&self.text[cursor..]);
        Ok(rendered)
    }
}
