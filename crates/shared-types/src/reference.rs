use serde::{Deserialize, Serialize};

/// Article count shown on every reference category card.
pub const ARTICLES_PER_CATEGORY: u32 = 45;

/// A category of the legal reference base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCategory {
    pub name: String,
}

impl ReferenceCategory {
    pub fn articles_label(&self) -> String {
        format!("{ARTICLES_PER_CATEGORY} статей")
    }
}
