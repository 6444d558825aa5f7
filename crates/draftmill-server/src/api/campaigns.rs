use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CampaignItem {
    pub id: i64,
    pub name: String,
    pub campaign_type: String,
    pub keywords: Vec<String>,
    pub frequency: String,
    pub settings: Value,
    pub status: String,
    pub last_run_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

pub(super) async fn list_campaigns(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<CampaignItem>>>, ApiError> {
    let rows = draftmill_db::campaigns::list_campaigns(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| CampaignItem {
            id: row.id,
            name: row.name,
            campaign_type: row.campaign_type,
            keywords: draftmill_db::campaigns::split_keywords(&row.keywords),
            frequency: row.frequency,
            settings: row.settings,
            status: row.status,
            last_run_at: row.last_run_at,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
