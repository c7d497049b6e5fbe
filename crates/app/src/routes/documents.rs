use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::{mock, Document, Section};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent};

use super::Panel;

#[component]
pub fn DocumentsPanel() -> Element {
    let documents = mock::documents();

    rsx! {
        Panel { section: Section::Documents,
            div { class: "panel-stack",
                for document in documents {
                    DocumentCard { key: "{document.id}", document: document.clone() }
                }
            }
        }
    }
}

#[component]
fn DocumentCard(document: Document) -> Element {
    rsx! {
        Card { interactive: true,
            CardContent { class: "card-content-padded",
                div { class: "row-between",
                    div { class: "card-identity",
                        div { class: "icon-tile",
                            Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 }
                        }
                        div {
                            h3 { class: "item-title", "{document.name}" }
                            p { class: "item-meta", "{document.meta_line()}" }
                        }
                    }
                    div { class: "row-actions",
                        Badge { variant: BadgeVariant::Outline, "{document.status}" }
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small,
                            Icon::<LdDownload> { icon: LdDownload, width: 18, height: 18 }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::render_dashboard;

    #[test]
    fn documents_show_meta_line_and_outline_status() {
        let html = render_dashboard(Section::Documents);
        assert!(html.contains("Иск • 25.11.2025"));
        assert!(html.contains("Подписан"));
        assert_eq!(html.matches(r#"data-style="outline""#).count(), 3);
    }
}
