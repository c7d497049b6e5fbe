use serde::{Deserialize, Serialize};

use crate::text::{case_count_label, initials};
use crate::tone::{status_tone, Tone};

/// A client record in the client base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub cases: u32,
    pub status: String,
    pub phone: String,
}

impl Client {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn cases_label(&self) -> String {
        case_count_label(self.cases)
    }

    pub fn status_tone(&self) -> Tone {
        status_tone(&self.status)
    }

    pub fn status_label(&self) -> &'static str {
        match self.status.as_str() {
            "active" => "Активен",
            "pending" => "Ожидает",
            _ => "Завершен",
        }
    }
}
