use std::collections::{HashMap, HashSet};

use crate::models::{Application, Interaction, InteractionStatus, MatchSummary, MatchedProfile};

/// Build the match list a user sees from their raw interaction records.
///
/// Records arrive newest-first from the store. Rules, in order:
/// - a mutual pair produces one row even when both directed records are
///   present (first record per partner wins);
/// - an `interested` record is only shown when the user initiated it —
///   incoming interest surfaces in the discovery feed, never here;
/// - records whose counterpart profile is missing are skipped.
pub fn assemble(
    user_id: &str,
    records: &[Interaction],
    profiles: &HashMap<String, Application>,
) -> Vec<MatchSummary> {
    let mut summaries = Vec::new();
    let mut mutual_partners: HashSet<&str> = HashSet::new();

    for record in records {
        let other_id = if record.initiator_id == user_id {
            record.target_id.as_str()
        } else {
            record.initiator_id.as_str()
        };

        if record.status == InteractionStatus::Matched && mutual_partners.contains(other_id) {
            continue;
        }

        let Some(other) = profiles.get(other_id) else {
            tracing::warn!(
                "Skipping interaction {}: profile for {} not found",
                record.id,
                other_id
            );
            continue;
        };

        match record.status {
            InteractionStatus::Matched => {
                summaries.push(MatchSummary {
                    id: record.id,
                    user_id_1: record.initiator_id.clone(),
                    user_id_2: record.target_id.clone(),
                    status: record.status,
                    created_at: record.created_at,
                    is_mutual_match: true,
                    is_user_interested: true,
                    is_other_interested: true,
                    other_user: MatchedProfile::from(other),
                });
                mutual_partners.insert(other_id);
            }
            InteractionStatus::Interested if record.initiator_id == user_id => {
                summaries.push(MatchSummary {
                    id: record.id,
                    user_id_1: record.initiator_id.clone(),
                    user_id_2: record.target_id.clone(),
                    status: record.status,
                    created_at: record.created_at,
                    is_mutual_match: false,
                    is_user_interested: true,
                    is_other_interested: false,
                    other_user: MatchedProfile::from(other),
                });
            }
            _ => {}
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationStatus;
    use uuid::Uuid;

    fn profile(user_id: &str) -> Application {
        Application {
            user_id: user_id.to_string(),
            cwid: None,
            full_name: Some(format!("User {}", user_id)),
            discord: Some(format!("{}#1234", user_id)),
            skill_level: None,
            hackathon_experience: None,
            hear_about_us: None,
            why_attend: None,
            project_experience: None,
            future_plans: None,
            fun_fact: None,
            self_description: None,
            links: None,
            teammates: None,
            referral_email: None,
            dietary_restrictions_extra: None,
            tshirt_size: None,
            agree_to_terms: true,
            status: ApplicationStatus::Submitted,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn record(from: &str, to: &str, status: InteractionStatus) -> Interaction {
        Interaction {
            id: Uuid::new_v4(),
            initiator_id: from.to_string(),
            target_id: to.to_string(),
            status,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_mutual_pair_is_deduplicated() {
        let records = vec![
            record("a", "b", InteractionStatus::Matched),
            record("b", "a", InteractionStatus::Matched),
        ];
        let profiles = HashMap::from([("b".to_string(), profile("b"))]);

        let summaries = assemble("a", &records, &profiles);
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].is_mutual_match);
        assert_eq!(summaries[0].other_user.user_id, "b");
    }

    #[test]
    fn test_incoming_interest_is_not_listed() {
        let records = vec![record("b", "a", InteractionStatus::Interested)];
        let profiles = HashMap::from([("b".to_string(), profile("b"))]);

        let summaries = assemble("a", &records, &profiles);
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_outgoing_interest_is_pending() {
        let records = vec![record("a", "b", InteractionStatus::Interested)];
        let profiles = HashMap::from([("b".to_string(), profile("b"))]);

        let summaries = assemble("a", &records, &profiles);
        assert_eq!(summaries.len(), 1);
        assert!(!summaries[0].is_mutual_match);
        assert!(summaries[0].is_user_interested);
        assert!(!summaries[0].is_other_interested);
    }

    #[test]
    fn test_missing_profile_is_skipped() {
        let records = vec![
            record("a", "gone", InteractionStatus::Matched),
            record("a", "b", InteractionStatus::Interested),
        ];
        let profiles = HashMap::from([("b".to_string(), profile("b"))]);

        let summaries = assemble("a", &records, &profiles);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].other_user.user_id, "b");
    }
}
