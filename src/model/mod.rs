mod count;
mod document;
mod field;
mod key;
mod locale;
mod theme;

pub use count::{CountState, CountStatus, DEFAULT_WARNING_RATIO, Validity};
pub use document::{
    Banner, Document, FloatingWarning, LocaleSelector, TRANSITION_CLASS, TextFade, TextNode,
    ThemeToggle,
};
pub use field::{Counter, Field};
pub use key::{Key, KeyPress};
pub use locale::{Locale, Message};
pub use theme::{Theme, ToggleIcon};
