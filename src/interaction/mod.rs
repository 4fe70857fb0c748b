use serde::{Deserialize, Serialize};

/// The two user activation controls the chart exposes.
///
/// Every activation steps all fill levels by the fixed amount, clamped to
/// each glyph's container. There is no debounce or throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlInput {
    Increase,
    Decrease,
}

impl ControlInput {
    /// Resolves the stable external control id ("increase" / "decrease")
    /// used by hosts that key widgets by string id.
    #[must_use]
    pub fn from_control_id(id: &str) -> Option<Self> {
        match id {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            _ => None,
        }
    }

    #[must_use]
    pub fn control_id(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}
