use std::ops::Range;

use super::count::{CountStatus, Validity};

/// Live character counter attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Counter {
    pub text: String,
    pub status: CountStatus,
}

/// A text input or textarea on the page.
///
/// Lengths and selections are measured in `char`s. The caret always sits at
/// the end of the value; editing either replaces the selection or works at
/// the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: String,
    placeholder: String,
    max_length: Option<usize>,
    required: bool,
    multiline: bool,
    selection: Option<Range<usize>>,
    /// Count-derived style on the field itself.
    pub status: CountStatus,
    /// Validity marker; only ever set on required fields.
    pub validity: Option<Validity>,
    /// `None` when the page has no counter element for this field.
    pub counter: Option<Counter>,
}

impl Field {
    /// Creates an optional, single-line, uncapped field with a counter element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            placeholder: String::new(),
            max_length: None,
            required: false,
            multiline: false,
            selection: None,
            status: CountStatus::Normal,
            validity: None,
            counter: Some(Counter::default()),
        }
    }

    /// Declares the `maxlength` cap.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Marks the field `required`.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Makes the field a textarea.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Drops the counter element.
    pub fn without_counter(mut self) -> Self {
        self.counter = None;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn cap(&self) -> Option<usize> {
        self.max_length
    }

    pub fn set_cap(&mut self, max: usize) {
        self.max_length = Some(max);
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Length of the value in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the value and drops any selection.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.selection = None;
    }

    /// Current selection, if it spans at least one character.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone().filter(|r| !r.is_empty())
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Selects `range`, clamped to the value.
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.selection = Some(start..end);
    }

    pub fn select_all(&mut self) {
        self.select(0..self.len());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Inserts `text`, replacing the selection if there is one.
    pub fn insert(&mut self, text: &str) {
        match self.selection.take().filter(|r| !r.is_empty()) {
            Some(range) => {
                let start = byte_offset(&self.value, range.start);
                let end = byte_offset(&self.value, range.end);
                self.value.replace_range(start..end, text);
            }
            None => self.value.push_str(text),
        }
    }

    /// Removes the selection, or the last character without one.
    ///
    /// Returns `true` if the value changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        self.value.pop().is_some()
    }

    /// Removes the selected characters. Returns `true` if anything was removed.
    pub fn delete_selection(&mut self) -> bool {
        match self.selection.take().filter(|r| !r.is_empty()) {
            Some(range) => {
                let start = byte_offset(&self.value, range.start);
                let end = byte_offset(&self.value, range.end);
                self.value.replace_range(start..end, "");
                true
            }
            None => false,
        }
    }

    /// Cuts the value down to its first `max` characters.
    pub fn truncate_chars(&mut self, max: usize) {
        let end = byte_offset(&self.value, max);
        self.value.truncate(end);
        self.selection = None;
    }
}

/// Byte offset of the `index`th character, or the string length past the end.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}
