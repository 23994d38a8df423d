//! Mutation outcomes and toast copy for movie actions.

use crate::models::ToastKind;

/// Result of reconciling an optimistic mutation with the remote call.
///
/// Local state already reflects the change by the time this is produced;
/// `LocalOnly` records that the server never confirmed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote call succeeded; local and server state agree.
    Confirmed,
    /// The remote call failed; local state diverges from the server.
    LocalOnly {
        /// Failure detail from the transport.
        reason: String,
    },
}

impl MutationOutcome {
    /// Whether the server confirmed the mutation.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Toast copy for a delete that has already been applied locally.
#[must_use]
pub fn delete_feedback(outcome: &MutationOutcome, title: &str) -> (ToastKind, String) {
    match outcome {
        MutationOutcome::Confirmed => (ToastKind::Success, format!("Deleted {title}")),
        MutationOutcome::LocalOnly { reason } => (
            ToastKind::Error,
            format!("Removed {title} from this view, but the server did not confirm: {reason}"),
        ),
    }
}

/// Toast copy for an update that has already been applied locally.
#[must_use]
pub fn update_feedback(outcome: &MutationOutcome, title: &str) -> (ToastKind, String) {
    match outcome {
        MutationOutcome::Confirmed => (ToastKind::Success, format!("Updated {title}")),
        MutationOutcome::LocalOnly { reason } => (
            ToastKind::Error,
            format!("Kept your edits to {title} locally, but the server did not confirm: {reason}"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_outcomes_read_as_success() {
        let (kind, message) = delete_feedback(&MutationOutcome::Confirmed, "Heat");
        assert_eq!(kind, ToastKind::Success);
        assert!(message.contains("Heat"));
        assert!(MutationOutcome::Confirmed.is_confirmed());
    }

    #[test]
    fn local_only_outcomes_carry_the_reason() {
        let outcome = MutationOutcome::LocalOnly {
            reason: "request failed (503)".to_string(),
        };
        let (kind, message) = update_feedback(&outcome, "Heat");
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains("did not confirm"));
        assert!(message.contains("503"));
        assert!(!outcome.is_confirmed());
    }
}
