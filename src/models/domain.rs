use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a hackathon application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    NotStarted,
    InProgress,
    Submitted,
    Accepted,
    Waitlisted,
    Confirmed,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::NotStarted => "not_started",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Waitlisted => "waitlisted",
            ApplicationStatus::Confirmed => "confirmed",
        }
    }
}

/// A participant's application record, one per user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub cwid: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(rename = "skillLevel", default)]
    pub skill_level: Option<String>,
    #[serde(rename = "hackathonExperience", default)]
    pub hackathon_experience: Option<String>,
    #[serde(rename = "hearAboutUs", default)]
    pub hear_about_us: Option<String>,
    #[serde(rename = "whyAttend", default)]
    pub why_attend: Option<String>,
    #[serde(rename = "projectExperience", default)]
    pub project_experience: Option<String>,
    #[serde(rename = "futurePlans", default)]
    pub future_plans: Option<String>,
    #[serde(rename = "funFact", default)]
    pub fun_fact: Option<String>,
    #[serde(rename = "selfDescription", default)]
    pub self_description: Option<String>,
    #[serde(default)]
    pub links: Option<String>,
    #[serde(default)]
    pub teammates: Option<String>,
    #[serde(rename = "referralEmail", default)]
    pub referral_email: Option<String>,
    #[serde(rename = "dietaryRestrictionsExtra", default)]
    pub dietary_restrictions_extra: Option<String>,
    #[serde(rename = "tshirtSize", default)]
    pub tshirt_size: Option<String>,
    #[serde(rename = "agreeToTerms", default)]
    pub agree_to_terms: bool,
    pub status: ApplicationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Status of a directed interaction between two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "interaction_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InteractionStatus {
    Interested,
    Pass,
    Matched,
}

impl InteractionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionStatus::Interested => "interested",
            InteractionStatus::Pass => "pass",
            InteractionStatus::Matched => "matched",
        }
    }
}

/// The two actions a participant can take on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Interested,
    Pass,
}

impl From<ReactionAction> for InteractionStatus {
    fn from(value: ReactionAction) -> Self {
        match value {
            ReactionAction::Interested => InteractionStatus::Interested,
            ReactionAction::Pass => InteractionStatus::Pass,
        }
    }
}

/// A directed interaction record keyed by (initiator, target)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Uuid,
    #[serde(rename = "initiatorId")]
    pub initiator_id: String,
    #[serde(rename = "targetId")]
    pub target_id: String,
    pub status: InteractionStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Profile fields shown in the discovery feed (no contact info)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "skillLevel")]
    pub skill_level: Option<String>,
    #[serde(rename = "hackathonExperience")]
    pub hackathon_experience: Option<String>,
    #[serde(rename = "projectExperience")]
    pub project_experience: Option<String>,
    #[serde(rename = "funFact")]
    pub fun_fact: Option<String>,
    #[serde(rename = "selfDescription")]
    pub self_description: Option<String>,
    #[serde(rename = "futurePlans")]
    pub future_plans: Option<String>,
}

impl From<&Application> for PublicProfile {
    fn from(app: &Application) -> Self {
        Self {
            user_id: app.user_id.clone(),
            full_name: app.full_name.clone(),
            skill_level: app.skill_level.clone(),
            hackathon_experience: app.hackathon_experience.clone(),
            project_experience: app.project_experience.clone(),
            fun_fact: app.fun_fact.clone(),
            self_description: app.self_description.clone(),
            future_plans: app.future_plans.clone(),
        }
    }
}

/// Partner profile as shown in the match list; contact fields are included
/// because the pair has (or may soon have) a mutual match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "skillLevel")]
    pub skill_level: String,
    #[serde(rename = "hackathonExperience")]
    pub hackathon_experience: String,
    #[serde(rename = "projectExperience")]
    pub project_experience: String,
    #[serde(rename = "funFact")]
    pub fun_fact: String,
    #[serde(rename = "selfDescription")]
    pub self_description: String,
    #[serde(rename = "futurePlans")]
    pub future_plans: String,
    pub discord: String,
    pub links: String,
}

const NOT_SPECIFIED: &str = "Not specified";

fn or_not_specified(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

impl From<&Application> for MatchedProfile {
    fn from(app: &Application) -> Self {
        Self {
            user_id: app.user_id.clone(),
            full_name: app
                .full_name
                .clone()
                .unwrap_or_else(|| "Anonymous User".to_string()),
            skill_level: or_not_specified(&app.skill_level),
            hackathon_experience: or_not_specified(&app.hackathon_experience),
            project_experience: or_not_specified(&app.project_experience),
            fun_fact: or_not_specified(&app.fun_fact),
            self_description: or_not_specified(&app.self_description),
            future_plans: or_not_specified(&app.future_plans),
            discord: or_not_specified(&app.discord),
            links: or_not_specified(&app.links),
        }
    }
}

/// One row of the match list: a mutual match or an outgoing pending interest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: Uuid,
    #[serde(rename = "userId1")]
    pub user_id_1: String,
    #[serde(rename = "userId2")]
    pub user_id_2: String,
    pub status: InteractionStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "isMutualMatch")]
    pub is_mutual_match: bool,
    #[serde(rename = "isUserInterested")]
    pub is_user_interested: bool,
    #[serde(rename = "isOtherInterested")]
    pub is_other_interested: bool,
    #[serde(rename = "otherUser")]
    pub other_user: MatchedProfile,
}
