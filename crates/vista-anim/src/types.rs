//! Shared value types for animation construction.

use std::fmt;

use serde::{Deserialize, Serialize};
use vista_view::ViewHandle;

/// Navigation direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Back,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// Platform style tag keying the animation builder to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Ios,
    #[default]
    Md,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Md => write!(f, "md"),
        }
    }
}

/// Everything a builder needs to construct one transition animation.
///
/// This is the animation-facing projection of a transition request; builders
/// never see the request itself.
#[derive(Debug, Clone)]
pub struct AnimationPlan {
    /// View becoming visible.
    pub entering: ViewHandle,
    /// View being hidden; absent for the first view in a stack.
    pub leaving: Option<ViewHandle>,
    pub direction: Direction,
    /// Explicit duration override in milliseconds, if the caller set one.
    pub duration_ms: Option<u64>,
    pub mode: Mode,
}
