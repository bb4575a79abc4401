use serde::Serialize;

/// Fetch lifecycle shared by every page controller:
/// `Idle -> Loading -> {Ready, Failed}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
