use dioxus::prelude::*;
use shared_types::{meetings_for_day, mock, FeatureFlags, Meeting, Section};
use shared_ui::{
    day_key, today, Badge, BadgeVariant, Calendar, CalendarGrid, CalendarHeader,
    CalendarMonthTitle, CalendarNavigation, CalendarNextMonthButton, CalendarPreviousMonthButton,
    Card, CardContent, CardHeader, CardTitle, Date,
};

use super::{use_dashboard, Panel};

/// Month calendar plus the meetings for the selected day.
///
/// The list ignores the selected day unless `filter_meetings_by_date` is on.
#[component]
pub fn CalendarPanel() -> Element {
    let mut state = use_dashboard();
    let flags = try_use_context::<FeatureFlags>().unwrap_or_default();
    let mut view_date = use_signal(|| {
        let selected = *state.selected_date.peek();
        selected.unwrap_or_else(|| today(state.utc_offset_hours))
    });

    let selected = *state.selected_date.read();
    let meetings = meetings_for_day(
        &mock::upcoming_meetings(),
        selected.map(day_key),
        flags.filter_meetings_by_date,
    );
    let no_meetings = meetings.is_empty();

    rsx! {
        Panel { section: Section::Calendar,
            div { class: "panel-grid", "data-columns": "2",
                Card {
                    CardContent { class: "card-content-padded",
                        Calendar {
                            selected_date: state.selected_date,
                            on_date_change: move |date: Option<Date>| {
                                tracing::debug!(?date, "calendar date selected");
                                state.selected_date.set(date);
                            },
                            view_date: view_date,
                            on_view_change: move |new_view: Date| view_date.set(new_view),
                            CalendarHeader {
                                CalendarNavigation {
                                    CalendarPreviousMonthButton { "\u{2039}" }
                                    CalendarMonthTitle {}
                                    CalendarNextMonthButton { "\u{203a}" }
                                }
                            }
                            CalendarGrid {}
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "События на выбранную дату" }
                    }
                    CardContent {
                        div { class: "meeting-list",
                            if no_meetings {
                                p { class: "item-meta", "Нет событий" }
                            }
                            for (idx, meeting) in meetings.iter().enumerate() {
                                DayMeeting { key: "{idx}", meeting: meeting.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DayMeeting(meeting: Meeting) -> Element {
    rsx! {
        div { class: "meeting-row", "data-meeting": "{meeting.date}",
            div { class: "row-between",
                p { class: "meeting-client", "{meeting.time}" }
                Badge { variant: BadgeVariant::Outline, "{meeting.kind}" }
            }
            p { class: "meeting-kind", "{meeting.client}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::render_dashboard;
    use crate::routes::DashboardState;
    use pretty_assertions::assert_eq;
    use shared_ui::Month;

    #[test]
    fn meeting_list_is_static_by_default() {
        // The selected day defaults to today, which matches none of the
        // fixture dates, yet every meeting is listed.
        let html = render_dashboard(Section::Calendar);
        assert_eq!(html.matches("data-meeting=").count(), 3);
        assert!(html.contains("События на выбранную дату"));
        assert!(!html.contains("Нет событий"));
    }

    fn provide_calendar_state(day: Option<Date>, filter: bool) {
        use_context_provider(|| FeatureFlags { filter_meetings_by_date: filter });
        use_context_provider(|| DashboardState {
            section: Signal::new(Section::Calendar),
            selected_date: Signal::new(day),
            utc_offset_hours: 3,
        });
    }

    /// Calendar panel with a fixed selected day of December 2025.
    #[component]
    fn CalendarOn(day: u8, filter: bool) -> Element {
        provide_calendar_state(Date::from_calendar_date(2025, Month::December, day).ok(), filter);
        rsx! { CalendarPanel {} }
    }

    #[component]
    fn CalendarWithoutSelection() -> Element {
        provide_calendar_state(None, true);
        rsx! { CalendarPanel {} }
    }

    fn render_calendar(day: u8, filter: bool) -> String {
        dioxus_ssr::render_element(rsx! { CalendarOn { day, filter } })
    }

    #[test]
    fn selected_day_without_filter_lists_everything() {
        let html = render_calendar(2, false);
        assert_eq!(html.matches("data-meeting=").count(), 3);
    }

    #[test]
    fn filter_keeps_only_the_selected_day() {
        let html = render_calendar(2, true);
        assert_eq!(html.matches("data-meeting=").count(), 1);
        assert_eq!(html.matches(r#"data-meeting="02.12.2025""#).count(), 1);
        assert!(html.contains("Смирнова А."));
        assert!(!html.contains("Иванов П."));
        assert!(!html.contains("Нет событий"));
    }

    #[test]
    fn filter_follows_each_fixture_day() {
        for (day, date) in [(1, "01.12.2025"), (3, "03.12.2025")] {
            let html = render_calendar(day, true);
            assert_eq!(html.matches("data-meeting=").count(), 1, "{date}");
            assert!(html.contains(&format!(r#"data-meeting="{date}""#)), "{date}");
        }
    }

    #[test]
    fn filtered_day_without_meetings_shows_empty_state() {
        let html = render_calendar(5, true);
        assert_eq!(html.matches("data-meeting=").count(), 0);
        assert!(html.contains("Нет событий"));
    }

    #[test]
    fn filter_with_no_selected_day_shows_empty_state() {
        let html = dioxus_ssr::render_element(rsx! { CalendarWithoutSelection {} });
        assert_eq!(html.matches("data-meeting=").count(), 0);
        assert!(html.contains("Нет событий"));
    }
}
