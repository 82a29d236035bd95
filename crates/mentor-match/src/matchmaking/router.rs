use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::directory::{DirectoryError, DirectoryStore};
use super::domain::{
    MentorFilter, MentorProfile, OpportunityListing, SlotId, StudentProfile, UserId,
};
use super::service::{MatchmakingService, ServiceError};

/// Router builder exposing matching, recommendation, analytics, and booking endpoints.
pub fn matchmaking_router<D>(service: Arc<MatchmakingService<D>>) -> Router
where
    D: DirectoryStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/students/:student_id/mentors",
            get(mentor_matches_handler::<D>),
        )
        .route(
            "/api/v1/students/:student_id/opportunities",
            get(opportunities_handler::<D>),
        )
        .route("/api/v1/match", post(match_handler::<D>))
        .route(
            "/api/v1/opportunities/recommend",
            post(recommend_handler::<D>),
        )
        .route("/api/v1/analytics", get(analytics_handler::<D>))
        .route(
            "/api/v1/slots/:slot_id/bookings",
            post(booking_handler::<D>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub student: Option<StudentProfile>,
    #[serde(default)]
    pub mentor: Option<MentorProfile>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub opportunities: Vec<OpportunityListing>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub student_id: UserId,
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::UnknownStudent(_) | ServiceError::Directory(DirectoryError::NotFound) => {
            StatusCode::NOT_FOUND
        }
        ServiceError::Directory(DirectoryError::SlotFull) => StatusCode::CONFLICT,
        ServiceError::Directory(DirectoryError::Unavailable(_)) => {
            warn!(%error, "directory unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn mentor_matches_handler<D>(
    State(service): State<Arc<MatchmakingService<D>>>,
    Path(student_id): Path<String>,
    Query(filter): Query<MentorFilter>,
) -> Response
where
    D: DirectoryStore + 'static,
{
    match service.mentor_matches(&UserId(student_id)) {
        Ok(ranked) => (StatusCode::OK, Json(filter.apply(ranked))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn opportunities_handler<D>(
    State(service): State<Arc<MatchmakingService<D>>>,
    Path(student_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Response
where
    D: DirectoryStore + 'static,
{
    match service.recommended_opportunities(&UserId(student_id), query.limit) {
        Ok(scored) => (StatusCode::OK, Json(scored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn match_handler<D>(
    State(service): State<Arc<MatchmakingService<D>>>,
    Json(request): Json<MatchRequest>,
) -> Response
where
    D: DirectoryStore + 'static,
{
    let result = service
        .matcher()
        .score(request.student.as_ref(), request.mentor.as_ref());
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn recommend_handler<D>(
    State(service): State<Arc<MatchmakingService<D>>>,
    Json(request): Json<RecommendRequest>,
) -> Response
where
    D: DirectoryStore + 'static,
{
    let recommender = service.recommender();
    let scored = match request.limit {
        Some(limit) => recommender.recommend_top(&request.student, &request.opportunities, limit),
        None => recommender.recommend(&request.student, &request.opportunities),
    };
    (StatusCode::OK, Json(scored)).into_response()
}

pub(crate) async fn analytics_handler<D>(
    State(service): State<Arc<MatchmakingService<D>>>,
    Query(query): Query<AnalyticsQuery>,
) -> Response
where
    D: DirectoryStore + 'static,
{
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());
    match service.analytics(today) {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn booking_handler<D>(
    State(service): State<Arc<MatchmakingService<D>>>,
    Path(slot_id): Path<String>,
    Json(request): Json<BookingRequest>,
) -> Response
where
    D: DirectoryStore + 'static,
{
    match service.book_session(&SlotId(slot_id), &request.student_id) {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(error) => error_response(error),
    }
}
