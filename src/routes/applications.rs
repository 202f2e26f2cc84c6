use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{
    ApplicationListResponse, ApplicationResponse, ApplicationStatus, SaveApplicationRequest,
    SaveApplicationResponse,
};
use crate::routes::{ApiError, AppState};
use crate::services::Identity;

/// Configure application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/applications", web::get().to(list_submitted))
        .route("/applications/me", web::get().to(get_own))
        .route("/applications/me", web::put().to(save_own))
        .route("/applications/me/submit", web::post().to(submit_own))
        .route("/applications/me/confirm", web::post().to(confirm_attendance))
        .route("/applications/me/decline", web::post().to(decline_attendance));
}

/// Get the caller's own application
///
/// GET /api/v1/applications/me
async fn get_own(
    state: web::Data<AppState>,
    identity: Identity,
) -> Result<HttpResponse, ApiError> {
    let application = state.store.get_application(&identity.user_id).await?;
    Ok(HttpResponse::Ok().json(ApplicationResponse { application }))
}

/// Save the caller's application draft
///
/// PUT /api/v1/applications/me
///
/// Upserts every profile field. The payload may carry an early-stage status
/// (`not_started`, `in_progress`, `submitted`); decision statuses are set by
/// organizers, never by the applicant.
async fn save_own(
    state: web::Data<AppState>,
    identity: Identity,
    req: web::Json<SaveApplicationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    if let Some(status) = req.status {
        if matches!(
            status,
            ApplicationStatus::Accepted
                | ApplicationStatus::Waitlisted
                | ApplicationStatus::Confirmed
        ) {
            return Err(ApiError::bad_request(format!(
                "status {} cannot be set directly",
                status.as_str()
            )));
        }
    }

    tracing::info!("Saving application draft for user {}", identity.user_id);

    let application = state
        .store
        .upsert_application(&identity.user_id, &req, req.status)
        .await?;

    Ok(HttpResponse::Ok().json(SaveApplicationResponse {
        success: true,
        application,
    }))
}

/// Save and submit the caller's application in one step
///
/// POST /api/v1/applications/me/submit
async fn submit_own(
    state: web::Data<AppState>,
    identity: Identity,
    req: web::Json<SaveApplicationRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    tracing::info!("Submitting application for user {}", identity.user_id);

    let application = state
        .store
        .upsert_application(&identity.user_id, &req, Some(ApplicationStatus::Submitted))
        .await?;

    Ok(HttpResponse::Ok().json(SaveApplicationResponse {
        success: true,
        application,
    }))
}

/// Confirm attendance after acceptance
///
/// POST /api/v1/applications/me/confirm
async fn confirm_attendance(
    state: web::Data<AppState>,
    identity: Identity,
) -> Result<HttpResponse, ApiError> {
    let application = state
        .store
        .transition_status(
            &identity.user_id,
            ApplicationStatus::Accepted,
            ApplicationStatus::Confirmed,
        )
        .await?;

    Ok(HttpResponse::Ok().json(SaveApplicationResponse {
        success: true,
        application,
    }))
}

/// Decline attendance after acceptance
///
/// POST /api/v1/applications/me/decline
async fn decline_attendance(
    state: web::Data<AppState>,
    identity: Identity,
) -> Result<HttpResponse, ApiError> {
    let application = state
        .store
        .transition_status(
            &identity.user_id,
            ApplicationStatus::Accepted,
            ApplicationStatus::Waitlisted,
        )
        .await?;

    Ok(HttpResponse::Ok().json(SaveApplicationResponse {
        success: true,
        application,
    }))
}

/// List every submitted application, newest update first
///
/// GET /api/v1/applications
async fn list_submitted(
    state: web::Data<AppState>,
    _identity: Identity,
) -> Result<HttpResponse, ApiError> {
    let applications = state.store.list_submitted().await?;

    tracing::debug!("Returning {} submitted applications", applications.len());

    Ok(HttpResponse::Ok().json(ApplicationListResponse {
        success: true,
        timestamp: chrono::Utc::now(),
        applications,
    }))
}
