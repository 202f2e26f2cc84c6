use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ApplicationStatus, ReactionAction};

/// Payload for saving or submitting an application.
///
/// All profile fields are optional free text; a draft save may carry any
/// subset. `status` is only honored on the draft-save path and never moves
/// an application backwards.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct SaveApplicationRequest {
    #[validate(length(max = 64))]
    #[serde(default)]
    pub cwid: Option<String>,
    #[validate(length(max = 256))]
    #[serde(alias = "full_name", rename = "fullName", default)]
    pub full_name: Option<String>,
    #[validate(length(max = 256))]
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(alias = "skill_level", rename = "skillLevel", default)]
    pub skill_level: Option<String>,
    #[serde(
        alias = "hackathon_experience",
        rename = "hackathonExperience",
        default
    )]
    pub hackathon_experience: Option<String>,
    #[serde(alias = "hear_about_us", rename = "hearAboutUs", default)]
    pub hear_about_us: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(alias = "why_attend", rename = "whyAttend", default)]
    pub why_attend: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(alias = "project_experience", rename = "projectExperience", default)]
    pub project_experience: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(alias = "future_plans", rename = "futurePlans", default)]
    pub future_plans: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(alias = "fun_fact", rename = "funFact", default)]
    pub fun_fact: Option<String>,
    #[validate(length(max = 4000))]
    #[serde(alias = "self_description", rename = "selfDescription", default)]
    pub self_description: Option<String>,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub links: Option<String>,
    #[serde(default)]
    pub teammates: Option<String>,
    #[validate(email)]
    #[serde(alias = "referral_email", rename = "referralEmail", default)]
    pub referral_email: Option<String>,
    #[serde(
        alias = "dietary_restrictions_extra",
        rename = "dietaryRestrictionsExtra",
        default
    )]
    pub dietary_restrictions_extra: Option<String>,
    #[serde(alias = "tshirt_size", rename = "tshirtSize", default)]
    pub tshirt_size: Option<String>,
    #[serde(alias = "agree_to_terms", rename = "agreeToTerms", default)]
    pub agree_to_terms: bool,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

/// Request to react to another participant's profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReactRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: String,
    pub action: ReactionAction,
}

/// Query parameters for the discovery feed
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedQuery {
    #[serde(default)]
    pub limit: Option<u16>,
}
