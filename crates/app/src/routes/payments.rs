use dioxus::prelude::*;
use shared_types::{mock, PaymentSummary, Section};
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use super::Panel;

/// Invoice totals: expected, received and overdue.
#[component]
pub fn PaymentsPanel() -> Element {
    let summaries = mock::payment_summaries();

    rsx! {
        Panel { section: Section::Payments,
            div { class: "panel-grid", "data-columns": "3",
                for summary in summaries {
                    PaymentCard { key: "{summary.title}", summary: summary.clone() }
                }
            }
        }
    }
}

#[component]
fn PaymentCard(summary: PaymentSummary) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { class: "stat-title", "{summary.title}" }
            }
            CardContent {
                p { class: "stat-value", "data-tone": summary.tone.as_str(), "{summary.amount}" }
                p { class: "stat-caption", "{summary.caption}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::render_dashboard;

    #[test]
    fn amounts_are_tone_colored() {
        let html = render_dashboard(Section::Payments);
        assert!(html.contains("₽ 250,000"));
        assert!(html.contains(r#"data-tone="warning""#));
        assert!(html.contains(r#"data-tone="success""#));
        assert!(html.contains(r#"data-tone="danger""#));
        assert!(html.contains("1 счет просрочен"));
    }
}
