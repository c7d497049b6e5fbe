use serde::{Deserialize, Serialize};

use crate::text::initials;

/// The signed-in consultant shown in the sidebar footer and profile panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub experience: String,
}

impl ConsultantProfile {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Label/value pairs for the profile details grid.
    pub fn details(&self) -> [(&'static str, &str); 4] {
        [
            ("Email", self.email.as_str()),
            ("Телефон", self.phone.as_str()),
            ("Специализация", self.specialization.as_str()),
            ("Опыт работы", self.experience.as_str()),
        ]
    }
}
