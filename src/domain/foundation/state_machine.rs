//! State machine trait for workspace phases.
//!
//! Both the generation phase and the export phase are short linear
//! sequences. The trait keeps their transition tables in one shape so the
//! reducer can ask "is this move legal" without matching on pairs itself.

use super::ValidationError;

/// Trait for phase enums that represent state machines.
///
/// ```ignore
/// let next = ExportStatus::Ready.transition_to(ExportStatus::Exporting)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "phase_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
