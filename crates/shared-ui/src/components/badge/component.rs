use dioxus::prelude::*;

/// Visual variant for badges.
///
/// The tone variants (`Success`, `Warning`, `Info`, `Danger`) carry status
/// colors; `Secondary` is the neutral fallback and the default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
    Success,
    Warning,
    Info,
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Info => "info",
            BadgeVariant::Danger => "danger",
        }
    }
}

/// A small inline label for statuses and priorities.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_variant_as_data_style() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Warning, "Ожидает" }
        });
        assert!(html.contains(r#"data-style="warning""#), "{html}");
        assert!(html.contains("Ожидает"));
    }

    #[test]
    fn default_variant_is_neutral() {
        assert_eq!(BadgeVariant::default().class(), "secondary");
    }
}
