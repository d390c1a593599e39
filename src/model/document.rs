use std::collections::BTreeSet;

use super::field::Field;
use super::locale::Locale;
use super::theme::{Theme, ToggleIcon};

/// An element whose text has per-locale variants (`data-en` / `data-fil`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub id: String,
    pub text: String,
    pub en: Option<String>,
    pub fil: Option<String>,
}

impl TextNode {
    /// A node carrying both variants, showing the English one.
    pub fn new(id: impl Into<String>, en: impl Into<String>, fil: impl Into<String>) -> Self {
        let en = en.into();
        Self {
            id: id.into(),
            text: en.clone(),
            en: Some(en),
            fil: Some(fil.into()),
        }
    }

    /// The variant declared for `locale`, if any.
    pub fn variant(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.en.as_deref(),
            Locale::Fil => self.fil.as_deref(),
        }
    }
}

/// The theme toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggle {
    pub icon: ToggleIcon,
    pub label: String,
    /// Set for a moment after activation.
    pub pressed: bool,
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self {
            icon: Theme::Light.toggle_icon(),
            label: Theme::Light.toggle_label().to_string(),
            pressed: false,
        }
    }
}

/// The language dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSelector {
    /// Selected option.
    pub value: Locale,
    /// Set for a moment after a selection, while the press animation plays.
    pub pressed: bool,
    pub focused: bool,
}

/// Fade played on localized text after a language change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFade {
    #[default]
    Idle,
    /// Text is dimmed.
    Dimmed,
    /// Opacity is back; the transition is still attached.
    Restoring,
}

/// Floating character-limit notice anchored to a field's group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingWarning {
    pub id: u64,
    pub field: String,
    pub text: String,
}

/// Transient banner shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    /// Set while the reverse animation plays.
    pub exiting: bool,
}

/// Class put on the root while a theme change animates.
pub const TRANSITION_CLASS: &str = "theme-transition";

/// In-memory model of the contact page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub lang: String,
    pub title: String,
    /// Root `data-theme` marker.
    pub theme: Option<Theme>,
    pub root_classes: BTreeSet<String>,
    pub texts: Vec<TextNode>,
    pub fields: Vec<Field>,
    pub toggle: Option<ThemeToggle>,
    pub selector: Option<LocaleSelector>,
    /// Fade state shared by every localized text node.
    pub text_fade: TextFade,
    pub warnings: Vec<FloatingWarning>,
    pub banner: Option<Banner>,
}

impl Document {
    /// An empty page with the given fields.
    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            lang: Locale::En.code().to_string(),
            fields,
            ..Self::default()
        }
    }

    /// The portfolio contact page: name, email, subject and message.
    pub fn contact_page() -> Self {
        let fields = vec![
            Field::new("name").max_length(50).required(),
            Field::new("email").max_length(100).required(),
            Field::new("subject").max_length(100),
            Field::new("message").max_length(1000).required().multiline(),
        ];
        let texts = vec![
            TextNode::new("heading", "Get in Touch", "Makipag-ugnayan"),
            TextNode::new(
                "intro",
                "Have a project in mind or just want to say hello? Send me a message.",
                "May proyekto ka ba o gusto mo lang kumustahin ako? Padalhan mo ako ng mensahe.",
            ),
            TextNode::new("label-name", "Name", "Pangalan"),
            TextNode::new("label-email", "Email", "Email"),
            TextNode::new("label-subject", "Subject", "Paksa"),
            TextNode::new("label-message", "Message", "Mensahe"),
            TextNode::new("submit", "Send Message", "Ipadala ang Mensahe"),
        ];
        Self {
            lang: Locale::En.code().to_string(),
            title: Locale::En.title().to_string(),
            texts,
            fields,
            toggle: Some(ThemeToggle::default()),
            selector: Some(LocaleSelector::default()),
            ..Self::default()
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Current text of a localizable node.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.text.as_str())
    }

    /// Counter text for a field, if it has a counter.
    pub fn counter_text(&self, field: &str) -> Option<&str> {
        self.field(field)
            .and_then(|f| f.counter.as_ref())
            .map(|c| c.text.as_str())
    }

    /// The visible warning for a field, if any.
    pub fn warning_for(&self, field: &str) -> Option<&FloatingWarning> {
        self.warnings.iter().find(|w| w.field == field)
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}
