use std::collections::HashSet;

use crate::models::{Application, ApplicationStatus, PublicProfile};

/// Clamp a client-requested feed limit to the configured window
pub fn clamp_limit(requested: Option<u16>, default_limit: u16, max_limit: u16) -> usize {
    requested.unwrap_or(default_limit).min(max_limit).max(1) as usize
}

/// Select discovery-feed candidates for a requester.
///
/// Candidates arrive newest-update-first from the store. Excluded:
/// - the requester themself;
/// - anyone the requester already has an interaction record with,
///   whatever its status;
/// - anything that is not a submitted application.
pub fn select_candidates(
    requester: &str,
    candidates: &[Application],
    interacted: &HashSet<String>,
    limit: usize,
) -> Vec<PublicProfile> {
    candidates
        .iter()
        .filter(|app| app.user_id != requester)
        .filter(|app| !interacted.contains(&app.user_id))
        .filter(|app| app.status == ApplicationStatus::Submitted)
        .take(limit)
        .map(PublicProfile::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(user_id: &str) -> Application {
        Application {
            user_id: user_id.to_string(),
            cwid: None,
            full_name: Some(format!("User {}", user_id)),
            discord: None,
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

    #[test]
    fn test_requester_is_never_included() {
        let candidates = vec![submitted("a"), submitted("b")];
        let feed = select_candidates("a", &candidates, &HashSet::new(), 10);
        assert!(feed.iter().all(|p| p.user_id != "a"));
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_interacted_users_are_excluded() {
        let candidates = vec![submitted("b"), submitted("c"), submitted("d")];
        let interacted = HashSet::from(["b".to_string(), "d".to_string()]);
        let feed = select_candidates("a", &candidates, &interacted, 10);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].user_id, "c");
    }

    #[test]
    fn test_limit_is_applied() {
        let candidates: Vec<Application> =
            (0..30).map(|i| submitted(&format!("u{}", i))).collect();
        let feed = select_candidates("a", &candidates, &HashSet::new(), 10);
        assert_eq!(feed.len(), 10);
    }

    #[test]
    fn test_unsubmitted_applications_are_filtered() {
        let mut draft = submitted("b");
        draft.status = ApplicationStatus::InProgress;
        let candidates = vec![draft, submitted("c")];
        let feed = select_candidates("a", &candidates, &HashSet::new(), 10);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].user_id, "c");
    }

    #[test]
    fn test_clamp_limit_window() {
        assert_eq!(clamp_limit(None, 10, 50), 10);
        assert_eq!(clamp_limit(Some(5), 10, 50), 5);
        assert_eq!(clamp_limit(Some(500), 10, 50), 50);
        assert_eq!(clamp_limit(Some(0), 10, 50), 1);
    }
}
