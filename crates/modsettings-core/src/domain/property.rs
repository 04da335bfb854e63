//! Property wrappers shared by all module schemas.
//!
//! Every individual setting inside a module's `properties` object is stored
//! as `{"value": <x>}` rather than a bare value:
//!
//! ```json
//! "fancyzones_highlight_opacity": { "value": 50 }
//! ```
//!
//! The wrapper leaves room for per-setting metadata without changing the
//! shape of existing documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single setting value wrapped as `{"value": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Property<T> {
    #[serde(default)]
    pub value: T,
}

impl<T> Property<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

pub type BoolProperty = Property<bool>;
pub type IntProperty = Property<i32>;
pub type StringProperty = Property<String>;

/// A keyboard shortcut: modifier flags plus a virtual key code.
///
/// `key` is the display text for `code` (e.g. `` "`" `` for code 192).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeySettings {
    pub win: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub code: u32,
    pub key: String,
}

impl HotkeySettings {
    pub fn new(win: bool, ctrl: bool, alt: bool, shift: bool, code: u32, key: &str) -> Self {
        Self {
            win,
            ctrl,
            alt,
            shift,
            code,
            key: key.to_string(),
        }
    }

    /// `true` when no key is bound.
    pub fn is_empty(&self) -> bool {
        self.code == 0
    }
}

impl fmt::Display for HotkeySettings {
    /// Formats as `Win + Ctrl + Alt + Shift + <key>`, omitting unset
    /// modifiers.  Falls back to the hex key code when `key` is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifiers = [
            (self.win, "Win"),
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
        ];
        for (_, label) in modifiers.iter().filter(|(set, _)| *set) {
            write!(f, "{label} + ")?;
        }
        if self.key.is_empty() {
            write!(f, "0x{:02X}", self.code)
        } else {
            f.write_str(&self.key)
        }
    }
}
