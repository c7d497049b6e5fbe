use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBookOpen;
use dioxus_free_icons::Icon;
use shared_types::{mock, Section};
use shared_ui::{Card, CardContent};

use super::Panel;

#[component]
pub fn ReferencePanel() -> Element {
    rsx! {
        Panel { section: Section::Reference,
            div { class: "panel-grid", "data-columns": "3",
                for category in mock::reference_categories() {
                    Card { key: "{category.name}", interactive: true,
                        CardContent { class: "card-content-padded",
                            div { class: "card-identity",
                                div { class: "icon-tile",
                                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 }
                                }
                                div {
                                    h3 { class: "item-title", "{category.name}" }
                                    p { class: "item-meta", "{category.articles_label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
