use axum::{extract::State, Json};

use crate::database::ActivityCatalog;
use crate::services::activities_service::{self, ActivitiesView};

pub async fn activities_handler(State(catalog): State<ActivityCatalog>) -> Json<ActivitiesView> {
    Json(activities_service::list_activities(&catalog))
}
