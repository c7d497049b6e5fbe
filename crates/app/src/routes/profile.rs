use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSettings;
use dioxus_free_icons::Icon;
use shared_types::{mock, Section};
use shared_ui::{
    AvatarSize, AvatarTone, Button, ButtonVariant, Card, CardContent, InitialsAvatar,
};

use super::Panel;

#[component]
pub fn ProfilePanel() -> Element {
    let consultant = mock::consultant();

    rsx! {
        Panel { section: Section::Profile,
            Card {
                CardContent { class: "card-content-roomy",
                    div { class: "profile-layout",
                        InitialsAvatar {
                            initials: consultant.initials(),
                            size: AvatarSize::ExtraLarge,
                            tone: AvatarTone::Primary,
                        }
                        div { class: "profile-body",
                            div {
                                h3 { class: "profile-name", "{consultant.name}" }
                                p { class: "item-meta", "{consultant.title}" }
                            }
                            dl { class: "profile-details",
                                for (label, value) in consultant.details() {
                                    div { key: "{label}",
                                        dt { "{label}" }
                                        dd { "{value}" }
                                    }
                                }
                            }
                            Button { variant: ButtonVariant::Primary,
                                Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                "Редактировать профиль"
                            }
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
    fn profile_details_are_listed() {
        let html = render_dashboard(Section::Profile);
        assert!(html.contains("a.sokolov@legalhub.ru"));
        assert!(html.contains("Специализация"));
        assert!(html.contains("8 лет"));
        assert!(html.contains("Редактировать профиль"));
    }
}
