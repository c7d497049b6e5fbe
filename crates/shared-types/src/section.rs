use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// Top-level navigation target of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Consultations,
    Documents,
    Payments,
    Clients,
    Calendar,
    Reference,
    Profile,
}

/// All sections in sidebar order.
pub const ALL_SECTIONS: &[Section] = &[
    Section::Consultations,
    Section::Documents,
    Section::Payments,
    Section::Clients,
    Section::Calendar,
    Section::Reference,
    Section::Profile,
];

impl Section {
    /// Stable identifier used in config files and `data-section` attributes.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Consultations => "consultations",
            Section::Documents => "documents",
            Section::Payments => "payments",
            Section::Clients => "clients",
            Section::Calendar => "calendar",
            Section::Reference => "reference",
            Section::Profile => "profile",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Consultations => "Консультации",
            Section::Documents => "Документы",
            Section::Payments => "Платежи",
            Section::Clients => "Клиенты",
            Section::Calendar => "Календарь",
            Section::Reference => "Справочник",
            Section::Profile => "Профиль",
        }
    }

    /// Subtitle shown under the panel title.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::Consultations => "Активные дела и встречи с клиентами",
            Section::Documents => "Управление юридическими документами",
            Section::Payments => "История платежей и счета",
            Section::Clients => "База клиентов и их дела",
            Section::Calendar => "Планирование встреч и консультаций",
            Section::Reference => "Правовая база и документация",
            Section::Profile => "Настройки учетной записи",
        }
    }

    /// Label of the primary header action, for panels that have one.
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Section::Consultations => Some("Новая консультация"),
            Section::Documents => Some("Загрузить документ"),
            Section::Payments => Some("Создать счет"),
            Section::Clients => Some("Добавить клиента"),
            Section::Calendar | Section::Reference | Section::Profile => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SECTIONS
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| AppError::unknown_section(format!("no section named '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_section_is_consultations() {
        assert_eq!(Section::default(), Section::Consultations);
    }

    #[test]
    fn seven_sections_in_sidebar_order() {
        let ids: Vec<&str> = ALL_SECTIONS.iter().map(Section::id).collect();
        assert_eq!(
            ids,
            vec!["consultations", "documents", "payments", "clients", "calendar", "reference", "profile"]
        );
    }

    #[test]
    fn id_roundtrip() {
        for section in ALL_SECTIONS {
            assert_eq!(section.id().parse::<Section>().unwrap(), *section);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = "billing".parse::<Section>().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::UnknownSection);
        assert!("Consultations".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn only_list_panels_have_header_actions() {
        assert_eq!(Section::Clients.action_label(), Some("Добавить клиента"));
        assert_eq!(Section::Calendar.action_label(), None);
        assert_eq!(Section::Reference.action_label(), None);
        assert_eq!(Section::Profile.action_label(), None);
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&Section::Reference).unwrap();
        assert_eq!(json, "\"reference\"");
    }
}
