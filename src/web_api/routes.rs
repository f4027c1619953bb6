//! API Routes

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::facility_store::UpdateLotRequest;
use crate::models::ApiResponse;
use crate::state::AppState;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(super::health_check))
        // Parking lots
        .route("/api/parking-lots", get(list_parking_lots))
        .route("/api/parking-lots/:id", get(get_parking_lot))
        .route("/api/parking-lots/:id", put(update_parking_lot))
        // CCTV cameras
        .route("/api/cctv-cameras", get(list_cctv_cameras))
        .route("/api/cctv-cameras/:id", get(get_cctv_camera))
        // Statistics
        .route("/api/statistics", get(get_statistics))
        .with_state(state)
}

// ========================================
// Parking Lot Handlers
// ========================================

async fn list_parking_lots(State(state): State<AppState>) -> impl IntoResponse {
    match state.facility.list_lots().await {
        Ok(lots) => Json(ApiResponse::success(lots)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn get_parking_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.facility.get_lot(id).await {
        Ok(lot) => Json(ApiResponse::success(lot)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn update_parking_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLotRequest>,
) -> impl IntoResponse {
    match state.facility.update_lot(id, req).await {
        Ok(lot) => Json(ApiResponse::with_message(
            lot,
            "Parking lot updated successfully",
        ))
        .into_response(),
        Err(e) => e.into_response(),
    }
}

// ========================================
// CCTV Camera Handlers
// ========================================

async fn list_cctv_cameras(State(state): State<AppState>) -> impl IntoResponse {
    match state.facility.list_cameras().await {
        Ok(cameras) => Json(ApiResponse::success(cameras)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn get_cctv_camera(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.facility.get_camera(id).await {
        Ok(camera) => Json(ApiResponse::success(camera)).into_response(),
        Err(e) => e.into_response(),
    }
}

// ========================================
// Statistics Handler
// ========================================

async fn get_statistics(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats.compute_statistics().await {
        Ok(stats) => Json(ApiResponse::success(stats)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility_store::{FacilityRepository, FacilityService};
    use crate::kv_store::MemoryKvStore;
    use crate::state::AppConfig;
    use crate::stats_service::StatsService;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Router, Arc<FacilityService>) {
        let repo = FacilityRepository::new(Arc::new(MemoryKvStore::new()));
        let facility = Arc::new(FacilityService::new(repo.clone()));
        let stats = Arc::new(StatsService::new(repo));
        let state = AppState {
            config: AppConfig::default(),
            facility: facility.clone(),
            stats,
        };
        (create_router(state), facility)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_always_ok() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_list_parking_lots_uninitialized_returns_404() {
        let (app, _) = app();
        let response = app
            .oneshot(
                Request::get("/api/parking-lots")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No parking data found");
    }

    #[tokio::test]
    async fn test_list_parking_lots_after_seed() {
        let (app, facility) = app();
        facility.ensure_seeded().await.unwrap();

        let response = app
            .oneshot(
                Request::get("/api/parking-lots")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["totalSpaces"], 120);
    }

    #[tokio::test]
    async fn test_get_parking_lot_by_id_and_missing() {
        let (app, facility) = app();
        facility.ensure_seeded().await.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/parking-lots/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["id"], 2);
        assert_eq!(body["data"]["occupiedSpaces"], 62);

        let response = app
            .oneshot(
                Request::get("/api/parking-lots/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Parking lot not found");
    }

    #[tokio::test]
    async fn test_update_parking_lot_ignores_disallowed_fields() {
        let (app, facility) = app();
        facility.ensure_seeded().await.unwrap();

        // totalSpaces is not in the allow-list and must survive unchanged
        let response = app
            .oneshot(
                Request::put("/api/parking-lots/1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"occupiedSpaces": 40, "status": "busy", "totalSpaces": 9999, "name": "hijacked"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Parking lot updated successfully");
        assert_eq!(body["data"]["occupiedSpaces"], 40);
        assert_eq!(body["data"]["status"], "busy");
        assert_eq!(body["data"]["totalSpaces"], 120);
        assert_eq!(body["data"]["name"], "City Hall Lot A");
    }

    #[tokio::test]
    async fn test_update_parking_lot_unknown_id_returns_404() {
        let (app, facility) = app();
        facility.ensure_seeded().await.unwrap();

        let response = app
            .oneshot(
                Request::put("/api/parking-lots/42")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"occupiedSpaces": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_and_get_cctv_cameras() {
        let (app, facility) = app();
        facility.ensure_seeded().await.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/cctv-cameras")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["status"], "active");

        let response = app
            .oneshot(
                Request::get("/api/cctv-cameras/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "CCTV camera not found");
    }

    #[tokio::test]
    async fn test_statistics_endpoint() {
        let (app, facility) = app();
        facility.ensure_seeded().await.unwrap();

        let response = app
            .oneshot(Request::get("/api/statistics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // Seed fleet: 120+80+150 spaces, 85+62+134 occupied
        assert_eq!(body["data"]["totalSpaces"], 350);
        assert_eq!(body["data"]["occupiedSpaces"], 281);
        assert_eq!(body["data"]["availableSpaces"], 69);
        assert_eq!(body["data"]["occupancyRate"], 80);
        assert_eq!(body["data"]["activeCCTV"], 3);
        assert_eq!(body["data"]["totalCCTV"], 3);
        assert_eq!(body["data"]["totalParkingLots"], 3);
    }

    #[tokio::test]
    async fn test_statistics_without_parking_data_returns_404() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/api/statistics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No parking data found");
    }
}
