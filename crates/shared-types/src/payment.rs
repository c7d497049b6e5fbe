use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// One of the invoice summary cards in the payments panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub title: String,
    /// Preformatted amount, e.g. "₽ 250,000".
    pub amount: String,
    pub caption: String,
    pub tone: Tone,
}
