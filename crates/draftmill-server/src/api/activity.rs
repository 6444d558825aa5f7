use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_db_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ActivityItem {
    pub id: i64,
    pub campaign_id: i64,
    pub action: String,
    pub status: String,
    pub message: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ActivityQuery {
    pub limit: Option<i64>,
}

pub(super) async fn list_activity(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ApiResponse<Vec<ActivityItem>>>, ApiError> {
    let rows = draftmill_db::activity::list_recent(&state.pool, normalize_limit(query.limit))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| ActivityItem {
            id: row.id,
            campaign_id: row.campaign_id,
            action: row.action,
            status: row.status,
            message: row.message,
            data: row.data,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
