use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdEye};
use dioxus_free_icons::Icon;
use shared_types::{mock, Client, Section};
use shared_ui::{
    AvatarSize, AvatarTone, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent,
    InitialsAvatar, Separator,
};

use super::{tone_badge_variant, Panel};

#[component]
pub fn ClientsPanel() -> Element {
    let clients = mock::clients();

    rsx! {
        Panel { section: Section::Clients,
            div { class: "panel-grid", "data-columns": "2",
                for client in clients {
                    ClientCard { key: "{client.id}", client: client.clone() }
                }
            }
        }
    }
}

#[component]
fn ClientCard(client: Client) -> Element {
    let status_variant = tone_badge_variant(client.status_tone());

    rsx! {
        Card { interactive: true,
            CardContent { class: "card-content-padded",
                div { class: "row-between",
                    div { class: "card-identity",
                        InitialsAvatar {
                            initials: client.initials(),
                            size: AvatarSize::Large,
                            tone: AvatarTone::Tinted,
                        }
                        div {
                            h3 { class: "item-title", "{client.name}" }
                            p { class: "item-meta", "{client.phone}" }
                        }
                    }
                    Badge { variant: status_variant, "{client.status_label()}" }
                }
                Separator {}
                div { class: "row-between",
                    div { class: "muted-line",
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                        span { "{client.cases_label()}" }
                    }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small,
                        Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}
