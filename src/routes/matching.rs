use std::collections::HashSet;

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core;
use crate::models::{
    FeedQuery, FeedResponse, HealthResponse, MatchSummary, ReactRequest, ReactResponse,
};
use crate::routes::{ApiError, AppState};
use crate::services::{CacheKey, Identity};

/// Configure matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/react", web::post().to(react))
        .route("/matches", web::get().to(list_matches))
        .route("/matches/discover", web::get().to(discover));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let pg_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// React to another participant's profile
///
/// POST /api/v1/matches/react
///
/// Request body:
/// ```json
/// {
///   "targetUserId": "string",
///   "action": "interested|pass"
/// }
/// ```
///
/// The response reports the pair's effective status after reconciliation:
/// `matched` when the interest was mutual, otherwise the standing status of
/// the caller's own record.
async fn react(
    state: web::Data<AppState>,
    identity: Identity,
    req: web::Json<ReactRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    tracing::info!(
        "User {} reacting {:?} to {}",
        identity.user_id,
        req.action,
        req.target_user_id
    );

    let status = state
        .store
        .react(&identity.user_id, &req.target_user_id, req.action)
        .await?;

    // Cached reads on both sides are stale now
    for user_id in [&identity.user_id, &req.target_user_id] {
        if let Err(e) = state.cache.invalidate_user(user_id).await {
            tracing::warn!("Failed to invalidate cache for {}: {}", user_id, e);
        }
    }

    Ok(HttpResponse::Ok().json(ReactResponse { status }))
}

/// List the caller's matches: mutual pairs plus their own pending interests
///
/// GET /api/v1/matches
async fn list_matches(
    state: web::Data<AppState>,
    identity: Identity,
) -> Result<HttpResponse, ApiError> {
    let user_id = &identity.user_id;

    let cache_key = CacheKey::matches(user_id);
    if let Ok(cached) = state.cache.get::<Vec<MatchSummary>>(&cache_key).await {
        tracing::debug!("Serving match list for {} from cache", user_id);
        return Ok(HttpResponse::Ok().json(cached));
    }

    if state.store.get_application(user_id).await?.is_none() {
        return Err(ApiError::not_found(format!(
            "no application for user {}",
            user_id
        )));
    }

    let records = state.store.list_interactions_for(user_id).await?;

    let partner_ids: Vec<String> = records
        .iter()
        .map(|record| {
            if record.initiator_id == *user_id {
                record.target_id.clone()
            } else {
                record.initiator_id.clone()
            }
        })
        .collect::<HashSet<String>>()
        .into_iter()
        .collect();

    let profiles = state.store.get_applications_by_ids(&partner_ids).await?;

    let summaries = core::matches::assemble(user_id, &records, &profiles);

    tracing::info!(
        "Returning {} match rows for user {} (from {} records)",
        summaries.len(),
        user_id,
        records.len()
    );

    if let Err(e) = state.cache.set(&cache_key, &summaries).await {
        tracing::warn!("Failed to cache match list for {}: {}", user_id, e);
    }

    Ok(HttpResponse::Ok().json(summaries))
}

/// Discovery feed: submitted profiles the caller has not interacted with
///
/// GET /api/v1/matches/discover?limit=N
async fn discover(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = &identity.user_id;
    let limit = core::feed::clamp_limit(
        query.limit,
        state.feed.default_limit,
        state.feed.max_limit,
    );

    // Only the default window is cached; explicit limits always hit the store
    let use_cache = query.limit.is_none();
    let cache_key = CacheKey::feed(user_id);

    if use_cache {
        if let Ok(cached) = state.cache.get::<FeedResponse>(&cache_key).await {
            tracing::debug!("Serving feed for {} from cache", user_id);
            return Ok(HttpResponse::Ok().json(cached));
        }
    }

    if state.store.get_application(user_id).await?.is_none() {
        return Err(ApiError::not_found(format!(
            "no application for user {}",
            user_id
        )));
    }

    let interacted = state.store.get_interacted_ids(user_id).await?;
    let candidates = state.store.list_submitted().await?;

    tracing::debug!(
        "Feed for {}: {} candidates, {} excluded",
        user_id,
        candidates.len(),
        interacted.len()
    );

    let potential_matches = core::feed::select_candidates(user_id, &candidates, &interacted, limit);

    let response = FeedResponse { potential_matches };

    if use_cache {
        if let Err(e) = state.cache.set(&cache_key, &response).await {
            tracing::warn!("Failed to cache feed for {}: {}", user_id, e);
        }
    }

    tracing::info!(
        "Returning {} potential matches for user {}",
        response.potential_matches.len(),
        user_id
    );

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
