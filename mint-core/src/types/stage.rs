//! Mint Stage State Machine
//!
//! Progress marker for one mint attempt. Transitions are one-directional and
//! non-retryable: a terminated attempt is never resumed, the user starts a
//! fresh one instead.
//!
//! ```text
//! not_started ──→ minting ──→ minted
//!                    │
//!                    └──→ failed
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MintError, MintResult};

/// Mint attempt progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MintStage {
    /// Idle / editing - nothing submitted yet
    #[default]
    NotStarted,
    /// Uploads and the listing transaction are in flight
    Minting,
    /// Listing confirmed - attempt complete
    Minted,
    /// An upload or the transaction failed - attempt abandoned
    Failed,
}

impl MintStage {
    /// True when no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Minted | Self::Failed)
    }

    /// Whether the machine may move from `self` to `target`
    pub fn can_transition_to(&self, target: MintStage) -> bool {
        matches!(
            (self, target),
            (Self::NotStarted, Self::Minting)
                | (Self::Minting, Self::Minted)
                | (Self::Minting, Self::Failed)
        )
    }

    /// Transition to `target`, rejecting anything outside the table above
    pub fn transition_to(&mut self, target: MintStage) -> MintResult<()> {
        if !self.can_transition_to(target) {
            return Err(MintError::StageTransition {
                from: *self,
                to: target,
            });
        }
        *self = target;
        Ok(())
    }

    /// Human-readable stage label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Minting => "minting",
            Self::Minted => "minted",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for MintStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let mut stage = MintStage::NotStarted;
        stage.transition_to(MintStage::Minting).unwrap();
        stage.transition_to(MintStage::Minted).unwrap();
        assert!(stage.is_terminal());
    }

    #[test]
    fn test_failure_transition() {
        let mut stage = MintStage::Minting;
        stage.transition_to(MintStage::Failed).unwrap();
        assert!(stage.is_terminal());
    }

    #[test]
    fn test_no_resumption_from_terminal() {
        for terminal in [MintStage::Minted, MintStage::Failed] {
            for target in [
                MintStage::NotStarted,
                MintStage::Minting,
                MintStage::Minted,
                MintStage::Failed,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn test_cannot_skip_minting() {
        assert!(!MintStage::NotStarted.can_transition_to(MintStage::Minted));
        assert!(!MintStage::NotStarted.can_transition_to(MintStage::Failed));
    }

    #[test]
    fn test_transition_error_names_states() {
        let mut stage = MintStage::Minted;
        let err = stage.transition_to(MintStage::Minting).unwrap_err();
        assert!(err.to_string().contains("minted"));
        assert!(err.to_string().contains("minting"));
    }
}
