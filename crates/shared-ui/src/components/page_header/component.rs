use dioxus::prelude::*;

/// Page header container: a heading block plus optional action buttons.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

/// Title and subtitle column of the page header.
#[component]
pub fn PageHeading(children: Element) -> Element {
    rsx! {
        div { class: "page-heading", {children} }
    }
}

/// Page title element rendered as an h2 (the sidebar brand owns the h1).
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "page-title", {children} }
    }
}

/// Muted line under the page title.
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "page-subtitle", {children} }
    }
}

/// Container for action buttons in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
