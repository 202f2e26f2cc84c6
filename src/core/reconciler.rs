use crate::models::{InteractionStatus, ReactionAction};

/// What the store should do with a reaction, decided from the pair's
/// current state. The store executes this inside one transaction while
/// holding the pair lock, so the decision cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// New status for the (initiator, target) record, if it changes at all
    pub write: Option<InteractionStatus>,
    /// Promote the reciprocal (target, initiator) record to matched too
    pub promote_reciprocal: bool,
    /// Status reported back to the initiator
    pub report: InteractionStatus,
}

impl Decision {
    fn keep(report: InteractionStatus) -> Self {
        Self {
            write: None,
            promote_reciprocal: false,
            report,
        }
    }

    fn write(status: InteractionStatus) -> Self {
        Self {
            write: Some(status),
            promote_reciprocal: false,
            report: status,
        }
    }

    fn promote() -> Self {
        Self {
            write: Some(InteractionStatus::Matched),
            promote_reciprocal: true,
            report: InteractionStatus::Matched,
        }
    }
}

/// The canonical reconciliation rule.
///
/// State lattice for the (initiator, target) record:
///
/// ```text
///   (absent) ──interested──▶ interested ──▶ matched   (terminal)
///      │                        │
///      └────────pass────────────┴─────────▶ pass      (terminal)
/// ```
///
/// - `pass` is terminal: a later `interested` from the same initiator does
///   not overwrite it, and the standing `pass` is reported back.
/// - `matched` is terminal: no action downgrades it.
/// - An un-reciprocated `interested` may still be withdrawn with a `pass`.
/// - Interest is promoted to `matched` on both records exactly when the
///   reciprocal record already carries `interested`.
pub fn decide(
    existing: Option<InteractionStatus>,
    action: ReactionAction,
    reciprocal: Option<InteractionStatus>,
) -> Decision {
    match existing {
        Some(InteractionStatus::Matched) => Decision::keep(InteractionStatus::Matched),
        Some(InteractionStatus::Pass) => Decision::keep(InteractionStatus::Pass),
        None | Some(InteractionStatus::Interested) => match action {
            ReactionAction::Pass => Decision::write(InteractionStatus::Pass),
            ReactionAction::Interested => {
                if reciprocal == Some(InteractionStatus::Interested) {
                    Decision::promote()
                } else {
                    Decision::write(InteractionStatus::Interested)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InteractionStatus::{Interested, Matched, Pass};
    use ReactionAction as Act;

    #[test]
    fn test_first_interest_is_recorded() {
        let d = decide(None, Act::Interested, None);
        assert_eq!(d.write, Some(Interested));
        assert!(!d.promote_reciprocal);
        assert_eq!(d.report, Interested);
    }

    #[test]
    fn test_reciprocal_interest_promotes_both() {
        let d = decide(None, Act::Interested, Some(Interested));
        assert_eq!(d.write, Some(Matched));
        assert!(d.promote_reciprocal);
        assert_eq!(d.report, Matched);
    }

    #[test]
    fn test_reciprocal_pass_does_not_promote() {
        let d = decide(None, Act::Interested, Some(Pass));
        assert_eq!(d.write, Some(Interested));
        assert!(!d.promote_reciprocal);
    }

    #[test]
    fn test_pass_is_terminal() {
        let d = decide(Some(Pass), Act::Interested, Some(Interested));
        assert_eq!(d.write, None);
        assert!(!d.promote_reciprocal);
        assert_eq!(d.report, Pass);
    }

    #[test]
    fn test_repeated_pass_is_idempotent() {
        let d = decide(Some(Pass), Act::Pass, None);
        assert_eq!(d.write, None);
        assert_eq!(d.report, Pass);
    }

    #[test]
    fn test_matched_is_never_downgraded() {
        for action in [Act::Interested, Act::Pass] {
            let d = decide(Some(Matched), action, Some(Matched));
            assert_eq!(d.write, None);
            assert_eq!(d.report, Matched);
        }
    }

    #[test]
    fn test_interest_can_be_withdrawn() {
        let d = decide(Some(Interested), Act::Pass, None);
        assert_eq!(d.write, Some(Pass));
        assert_eq!(d.report, Pass);
    }

    #[test]
    fn test_repeated_interest_stays_pending() {
        let d = decide(Some(Interested), Act::Interested, None);
        assert_eq!(d.write, Some(Interested));
        assert_eq!(d.report, Interested);
    }
}
