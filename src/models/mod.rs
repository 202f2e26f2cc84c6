// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Application, ApplicationStatus, Interaction, InteractionStatus, MatchSummary, MatchedProfile,
    PublicProfile, ReactionAction,
};
pub use requests::{FeedQuery, ReactRequest, SaveApplicationRequest};
pub use responses::{
    ApplicationListResponse, ApplicationResponse, ErrorResponse, FeedResponse, HealthResponse,
    ReactResponse, SaveApplicationResponse,
};
