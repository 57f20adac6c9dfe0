use serde::{Deserialize, Serialize};

/// Semantic color of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Neutral,
}

impl BadgeTone {
    /// Class name consumed by the host stylesheet
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Danger => "badge--error",
            BadgeTone::Info => "badge--info",
            BadgeTone::Accent => "badge--accent",
            BadgeTone::Neutral => "badge--neutral",
        }
    }
}
