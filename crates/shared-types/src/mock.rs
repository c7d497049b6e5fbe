//! In-memory fixtures backing every dashboard panel.
//!
//! Nothing here is persisted or mutated; each call builds a fresh copy.

use crate::{
    Client, ConsultantProfile, Consultation, Document, Meeting, PaymentSummary,
    ReferenceCategory, Tone,
};

pub fn consultations() -> Vec<Consultation> {
    vec![
        consultation(1, "Иванов Петр", "Трудовой спор", "active", "2025-12-01 14:00", "high"),
        consultation(2, "Смирнова Анна", "Защита прав потребителей", "active", "2025-12-02 10:00", "medium"),
        consultation(3, "ООО \"Альфа\"", "Корпоративное право", "pending", "2025-12-03 16:00", "low"),
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        client(1, "Иванов Петр Сергеевич", 2, "active", "+7 (999) 123-45-67"),
        client(2, "Смирнова Анна Владимировна", 1, "active", "+7 (999) 234-56-78"),
        client(3, "ООО \"Альфа\"", 3, "pending", "+7 (999) 345-67-89"),
        client(4, "Петров Михаил Иванович", 1, "completed", "+7 (999) 456-78-90"),
    ]
}

pub fn upcoming_meetings() -> Vec<Meeting> {
    vec![
        meeting("14:00", "Иванов П.", "Видеоконсультация", "01.12.2025"),
        meeting("10:00", "Смирнова А.", "Очная встреча", "02.12.2025"),
        meeting("16:00", "ООО \"Альфа\"", "Видеоконсультация", "03.12.2025"),
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        document(1, "Исковое заявление - Иванов П.", "25.11.2025", "Иск", "На подписании"),
        document(2, "Договор консультирования - Смирнова А.", "20.11.2025", "Договор", "Подписан"),
        document(3, "Доверенность - ООО \"Альфа\"", "18.11.2025", "Доверенность", "В работе"),
    ]
}

pub fn reference_categories() -> Vec<ReferenceCategory> {
    [
        "Трудовое право",
        "Гражданское право",
        "Корпоративное право",
        "Налоговое право",
        "Семейное право",
        "Административное право",
    ]
    .into_iter()
    .map(|name| ReferenceCategory { name: name.to_string() })
    .collect()
}

pub fn payment_summaries() -> Vec<PaymentSummary> {
    vec![
        payment("Ожидается", "₽ 250,000", "3 счета в ожидании", Tone::Warning),
        payment("Получено", "₽ 820,000", "12 счетов оплачено", Tone::Success),
        payment("Просрочено", "₽ 45,000", "1 счет просрочен", Tone::Danger),
    ]
}

pub fn consultant() -> ConsultantProfile {
    ConsultantProfile {
        name: "Александр Соколов".to_string(),
        title: "Юрист-консультант".to_string(),
        email: "a.sokolov@legalhub.ru".to_string(),
        phone: "+7 (999) 000-00-00".to_string(),
        specialization: "Трудовое право".to_string(),
        experience: "8 лет".to_string(),
    }
}

// ── Builders ────────────────────────────────────────────────────────

fn consultation(
    id: u32,
    client: &str,
    case: &str,
    status: &str,
    next_meeting: &str,
    priority: &str,
) -> Consultation {
    Consultation {
        id,
        client: client.to_string(),
        case: case.to_string(),
        status: status.to_string(),
        next_meeting: next_meeting.to_string(),
        priority: priority.to_string(),
    }
}

fn client(id: u32, name: &str, cases: u32, status: &str, phone: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        cases,
        status: status.to_string(),
        phone: phone.to_string(),
    }
}

fn meeting(time: &str, client: &str, kind: &str, date: &str) -> Meeting {
    Meeting {
        time: time.to_string(),
        client: client.to_string(),
        kind: kind.to_string(),
        date: date.to_string(),
    }
}

fn document(id: u32, name: &str, date: &str, kind: &str, status: &str) -> Document {
    Document {
        id,
        name: name.to_string(),
        date: date.to_string(),
        kind: kind.to_string(),
        status: status.to_string(),
    }
}

fn payment(title: &str, amount: &str, caption: &str, tone: Tone) -> PaymentSummary {
    PaymentSummary {
        title: title.to_string(),
        amount: amount.to_string(),
        caption: caption.to_string(),
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::calendar::parse_display_date;

    const CONSULTATION_STATUSES: &[&str] = &["active", "pending"];
    const CONSULTATION_PRIORITIES: &[&str] = &["high", "medium", "low"];
    const CLIENT_STATUSES: &[&str] = &["active", "pending", "completed"];

    #[test]
    fn fixture_sizes() {
        assert_eq!(consultations().len(), 3);
        assert_eq!(clients().len(), 4);
        assert_eq!(upcoming_meetings().len(), 3);
        assert_eq!(documents().len(), 3);
        assert_eq!(reference_categories().len(), 6);
        assert_eq!(payment_summaries().len(), 3);
    }

    #[test]
    fn fixture_literals_are_valid() {
        for c in consultations() {
            assert!(CONSULTATION_STATUSES.contains(&c.status.as_str()), "{}", c.status);
            assert!(CONSULTATION_PRIORITIES.contains(&c.priority.as_str()), "{}", c.priority);
        }
        for c in clients() {
            assert!(CLIENT_STATUSES.contains(&c.status.as_str()), "{}", c.status);
        }
        for m in upcoming_meetings() {
            assert!(parse_display_date(&m.date).is_ok(), "{}", m.date);
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: std::collections::HashSet<u32> = clients().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), clients().len());
        let ids: std::collections::HashSet<u32> = consultations().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), consultations().len());
    }

    #[test]
    fn payment_tones() {
        let tones: Vec<Tone> = payment_summaries().iter().map(|p| p.tone).collect();
        assert_eq!(tones, vec![Tone::Warning, Tone::Success, Tone::Danger]);
    }
}
