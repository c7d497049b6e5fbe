use dioxus::prelude::*;

/// Theme families available to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    /// Dark navy theme with a gold accent.
    #[default]
    Midnight,
    /// Light document-reading theme.
    Paper,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[ThemeFamily::Midnight, ThemeFamily::Paper];

impl ThemeFamily {
    /// Key used in `config.toml` and as the `data-theme` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Midnight => "midnight",
            ThemeFamily::Paper => "paper",
        }
    }

    /// Parse a family key string, falling back to Midnight.
    pub fn from_key(s: &str) -> Self {
        match s {
            "paper" => ThemeFamily::Paper,
            _ => ThemeFamily::Midnight,
        }
    }
}

/// Apply the configured theme to the document root on startup.
///
/// Call this once in the top-level App component.
#[component]
pub fn ThemeSeed(family: ThemeFamily) -> Element {
    use_effect(move || set_theme(family));

    rsx! {}
}

/// Set the `data-theme` attribute on `<html>`.
pub fn set_theme(family: ThemeFamily) {
    let theme = family.as_str();
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{theme}');"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_family_default_is_midnight() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Midnight);
    }

    #[test]
    fn theme_family_as_str_roundtrip() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
    }

    #[test]
    fn theme_family_from_key_unknown_falls_back() {
        assert_eq!(ThemeFamily::from_key("cyberpunk"), ThemeFamily::Midnight);
        assert_eq!(ThemeFamily::from_key(""), ThemeFamily::Midnight);
    }
}
