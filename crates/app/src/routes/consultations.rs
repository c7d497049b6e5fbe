use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdVideo};
use dioxus_free_icons::Icon;
use shared_types::{initials, mock, Consultation, Meeting, Section};
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, InitialsAvatar,
};

use super::{tone_badge_variant, Panel};

/// Open consultations followed by the upcoming meetings list.
#[component]
pub fn ConsultationsPanel() -> Element {
    let consultations = mock::consultations();
    let meetings = mock::upcoming_meetings();

    rsx! {
        Panel { section: Section::Consultations,
            div { class: "panel-grid", "data-columns": "3",
                for consultation in consultations {
                    ConsultationCard { key: "{consultation.id}", consultation: consultation.clone() }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                        "Предстоящие встречи"
                    }
                }
                CardContent {
                    div { class: "meeting-list",
                        for (idx, meeting) in meetings.into_iter().enumerate() {
                            UpcomingMeetingRow { key: "{idx}", meeting: meeting.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConsultationCard(consultation: Consultation) -> Element {
    let status_variant = tone_badge_variant(consultation.status_tone());
    let priority_variant = tone_badge_variant(consultation.priority_tone());

    rsx! {
        Card { interactive: true,
            CardHeader {
                div { class: "card-identity",
                    InitialsAvatar { initials: initials(&consultation.client) }
                    div {
                        CardTitle { "{consultation.client}" }
                        CardDescription { "{consultation.case}" }
                    }
                }
            }
            CardContent {
                div { class: "card-stack",
                    div { class: "badge-row",
                        Badge { variant: status_variant, "{consultation.status_label()}" }
                        Badge { variant: priority_variant, "{consultation.priority_label()}" }
                    }
                    div { class: "muted-line",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        span { "{consultation.next_meeting}" }
                    }
                    Button { variant: ButtonVariant::Soft, full_width: true,
                        Icon::<LdVideo> { icon: LdVideo, width: 18, height: 18 }
                        "Видеозвонок"
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingMeetingRow(meeting: Meeting) -> Element {
    rsx! {
        div { class: "meeting-row",
            div { class: "meeting-row-main",
                div { class: "meeting-when",
                    p { class: "meeting-time", "{meeting.time}" }
                    p { class: "meeting-date", "{meeting.date}" }
                }
                div {
                    p { class: "meeting-client", "{meeting.client}" }
                    p { class: "meeting-kind", "{meeting.kind}" }
                }
            }
            Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small,
                Icon::<LdVideo> { icon: LdVideo, width: 20, height: 20 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::render_dashboard;

    #[test]
    fn lists_every_consultation_with_badges() {
        let html = render_dashboard(Section::Consultations);
        for consultation in mock::consultations() {
            assert!(html.contains(&consultation.case), "{}", consultation.case);
            assert!(html.contains(&consultation.next_meeting));
        }
        assert!(html.contains(r#"data-style="danger""#));
        assert!(html.contains(r#"data-style="success""#));
        assert!(html.contains("Высокий"));
        assert!(html.contains("Средний"));
        assert!(html.contains("Низкий"));
    }

    #[test]
    fn shows_upcoming_meetings() {
        let html = render_dashboard(Section::Consultations);
        assert!(html.contains("Предстоящие встречи"));
        for meeting in mock::upcoming_meetings() {
            assert!(html.contains(&meeting.date), "{}", meeting.date);
        }
    }
}
