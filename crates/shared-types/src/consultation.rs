use serde::{Deserialize, Serialize};

use crate::tone::{priority_tone, status_tone, Tone};

/// An open consultation with a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: u32,
    pub client: String,
    /// Case label, e.g. "Трудовой спор".
    pub case: String,
    pub status: String,
    /// Display timestamp, e.g. "2025-12-01 14:00".
    pub next_meeting: String,
    pub priority: String,
}

impl Consultation {
    pub fn status_tone(&self) -> Tone {
        status_tone(&self.status)
    }

    pub fn priority_tone(&self) -> Tone {
        priority_tone(&self.priority)
    }

    pub fn status_label(&self) -> &'static str {
        match self.status.as_str() {
            "active" => "Активно",
            _ => "Ожидает",
        }
    }

    pub fn priority_label(&self) -> &'static str {
        match self.priority.as_str() {
            "high" => "Высокий",
            "medium" => "Средний",
            _ => "Низкий",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consultation(status: &str, priority: &str) -> Consultation {
        Consultation {
            id: 1,
            client: "Иванов Петр".to_string(),
            case: "Трудовой спор".to_string(),
            status: status.to_string(),
            next_meeting: "2025-12-01 14:00".to_string(),
            priority: priority.to_string(),
        }
    }

    #[test]
    fn labels_follow_status_and_priority() {
        let c = consultation("active", "high");
        assert_eq!(c.status_label(), "Активно");
        assert_eq!(c.priority_label(), "Высокий");

        let c = consultation("pending", "medium");
        assert_eq!(c.status_label(), "Ожидает");
        assert_eq!(c.priority_label(), "Средний");

        let c = consultation("pending", "low");
        assert_eq!(c.priority_label(), "Низкий");
    }

    #[test]
    fn unknown_values_keep_fallback_labels_and_neutral_tone() {
        let c = consultation("archived", "urgent");
        assert_eq!(c.status_label(), "Ожидает");
        assert_eq!(c.priority_label(), "Низкий");
        assert_eq!(c.status_tone(), Tone::Neutral);
        assert_eq!(c.priority_tone(), Tone::Neutral);
    }
}
