use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Display language of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (`en`).
    #[default]
    En,
    /// Filipino (`fil`).
    Fil,
}

/// Built-in strings that are not carried by `data-en`/`data-fil` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Floating notice shown when a keystroke or paste hits a field's cap.
    CharLimitReached,
    /// Banner shown after the contact form is submitted.
    SubmitSuccess,
}

static FILIPINO_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(fil|tl)([-_.]|$)").expect("valid hardcoded regex"));

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fil];

    /// The code written to the store and to the document's `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fil => "fil",
        }
    }

    /// Parses a stored locale code. Anything other than `en`/`fil` is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fil" => Some(Self::Fil),
            _ => None,
        }
    }

    /// Picks a locale from a browsing-environment language tag.
    ///
    /// Filipino and Tagalog tags (`fil`, `fil-PH`, `tl_PH.UTF-8`, ...) select
    /// [`Locale::Fil`]; everything else, including no tag at all, is English.
    pub fn detect(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if FILIPINO_TAG_RE.is_match(tag.trim()) => Self::Fil,
            _ => Self::En,
        }
    }

    /// The other locale of the pair.
    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Fil,
            Self::Fil => Self::En,
        }
    }

    /// Short uppercase label for selectors and status bars.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fil => "FIL",
        }
    }

    /// Document title. Both locales currently share one title.
    pub fn title(self) -> &'static str {
        match self {
            Self::En | Self::Fil => "Quimba - Portfolio",
        }
    }

    /// Localized text for a built-in message.
    pub fn message(self, message: Message) -> &'static str {
        match (self, message) {
            (Self::En, Message::CharLimitReached) => "Character limit reached!",
            (Self::Fil, Message::CharLimitReached) => "Naabot na ang limitasyon ng mga karakter!",
            (Self::En, Message::SubmitSuccess) => "Thank you! Your message has been sent.",
            (Self::Fil, Message::SubmitSuccess) => "Salamat! Ang inyong mensahe ay naipadala na.",
        }
    }

    /// Placeholder for one of the contact form's named fields.
    ///
    /// Returns `None` for fields outside the fixed contact-form set.
    pub fn placeholder(self, field: &str) -> Option<&'static str> {
        let text = match (self, field) {
            (Self::En, "name") => "Enter your name",
            (Self::En, "email") => "Enter your email",
            (Self::En, "subject") => "Enter subject",
            (Self::En, "message") => "Enter your message",
            (Self::Fil, "name") => "Ilagay ang inyong pangalan",
            (Self::Fil, "email") => "Ilagay ang inyong email",
            (Self::Fil, "subject") => "Ilagay ang paksa",
            (Self::Fil, "message") => "Ilagay ang inyong mensahe",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- codes ---

    #[test]
    fn code_round_trips_through_from_code() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Locale::from_code("tl"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn other_flips() {
        assert_eq!(Locale::En.other(), Locale::Fil);
        assert_eq!(Locale::Fil.other(), Locale::En);
    }

    // --- detect ---

    #[test]
    fn detect_filipino_tags() {
        assert_eq!(Locale::detect(Some("fil")), Locale::Fil);
        assert_eq!(Locale::detect(Some("fil-PH")), Locale::Fil);
        assert_eq!(Locale::detect(Some("tl")), Locale::Fil);
        assert_eq!(Locale::detect(Some("tl_PH.UTF-8")), Locale::Fil);
        assert_eq!(Locale::detect(Some("FIL-ph")), Locale::Fil);
    }

    #[test]
    fn detect_other_tags_default_to_english() {
        assert_eq!(Locale::detect(None), Locale::En);
        assert_eq!(Locale::detect(Some("")), Locale::En);
        assert_eq!(Locale::detect(Some("en-US")), Locale::En);
        assert_eq!(Locale::detect(Some("tlh")), Locale::En);
        assert_eq!(Locale::detect(Some("filler")), Locale::En);
    }

    #[quickcheck]
    fn detect_never_panics(tag: String) -> bool {
        let _ = Locale::detect(Some(&tag));
        true
    }

    // --- strings ---

    #[test]
    fn messages_differ_between_locales() {
        for message in [Message::CharLimitReached, Message::SubmitSuccess] {
            assert_ne!(Locale::En.message(message), Locale::Fil.message(message));
        }
    }

    #[test]
    fn placeholders_cover_contact_fields_only() {
        for field in ["name", "email", "subject", "message"] {
            assert!(Locale::En.placeholder(field).is_some());
            assert!(Locale::Fil.placeholder(field).is_some());
        }
        assert_eq!(Locale::En.placeholder("phone"), None);
    }

    #[test]
    fn built_in_strings() {
        assert_eq!(
            Locale::Fil.message(Message::CharLimitReached),
            "Naabot na ang limitasyon ng mga karakter!"
        );
        assert_eq!(
            Locale::En.message(Message::SubmitSuccess),
            "Thank you! Your message has been sent."
        );
        assert_eq!(
            Locale::Fil.message(Message::SubmitSuccess),
            "Salamat! Ang inyong mensahe ay naipadala na."
        );
        assert_eq!(Locale::En.placeholder("subject"), Some("Enter subject"));
        assert_eq!(
            Locale::Fil.placeholder("name"),
            Some("Ilagay ang inyong pangalan")
        );
        assert_eq!(Locale::Fil.title(), "Quimba - Portfolio");
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(Locale::Fil.to_string(), "fil");
    }
}
