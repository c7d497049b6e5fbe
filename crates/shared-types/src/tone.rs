use serde::{Deserialize, Serialize};

/// Style token a badge or highlighted value is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Info,
    Danger,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Info => "info",
            Tone::Danger => "danger",
            Tone::Neutral => "neutral",
        }
    }
}

/// Resolve a record status to its badge tone.
///
/// Matching is exact; anything but `active`, `pending` or `completed` is
/// [`Tone::Neutral`].
pub fn status_tone(status: &str) -> Tone {
    match status {
        "active" => Tone::Success,
        "pending" => Tone::Warning,
        "completed" => Tone::Info,
        _ => Tone::Neutral,
    }
}

/// Resolve a consultation priority to its badge tone.
///
/// Matching is exact; anything but `high`, `medium` or `low` is
/// [`Tone::Neutral`].
pub fn priority_tone(priority: &str) -> Tone {
    match priority {
        "high" => Tone::Danger,
        "medium" => Tone::Warning,
        "low" => Tone::Info,
        _ => Tone::Neutral,
    }
}
