use serde::{Deserialize, Serialize};

/// A legal document in the documents panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub name: String,
    /// "DD.MM.YYYY"
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text workflow label, e.g. "На подписании".
    pub status: String,
}

impl Document {
    /// Secondary line under the document name: "Иск • 25.11.2025".
    pub fn meta_line(&self) -> String {
        format!("{} • {}", self.kind, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_line_joins_kind_and_date() {
        let doc = Document {
            id: 1,
            name: "Исковое заявление - Иванов П.".to_string(),
            date: "25.11.2025".to_string(),
            kind: "Иск".to_string(),
            status: "На подписании".to_string(),
        };
        assert_eq!(doc.meta_line(), "Иск • 25.11.2025");
    }
}
