//! Reads the page [`Environment`] from the process environment.

use crate::page::Environment;

/// Locale variables in precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Builds the environment from the real process environment.
#[mutants::skip]
pub fn detect_environment() -> Environment {
    environment_from(|name| std::env::var(name).ok())
}

/// Builds the environment from an arbitrary variable lookup.
///
/// The language tag is the first set locale variable that is not `C` or
/// `POSIX`. Dark preference comes from `COLORFGBG`; without it the
/// preference is light.
pub fn environment_from(var: impl Fn(&str) -> Option<String>) -> Environment {
    let language = LOCALE_VARS
        .iter()
        .filter_map(|name| var(name))
        .find(|value| !matches!(value.as_str(), "" | "C" | "POSIX"));
    let prefers_dark = var("COLORFGBG").is_some_and(|v| colorfgbg_is_dark(&v));
    Environment {
        language,
        prefers_dark,
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). Backgrounds 0-6 and 8
/// are the dark half of the 16-colour palette.
pub fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 0..=6 | 8))
}
