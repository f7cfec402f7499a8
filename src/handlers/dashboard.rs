use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use crate::api::ApiClient;
use crate::errors::{AppError, render};
use crate::models::student::{DirectorySummary, StudentFilter, filter_students};
use crate::templates_structs::{DashboardTemplate, FilterLink};

#[derive(Deserialize)]
pub struct DirectoryQuery {
    q: Option<String>,
    filter: Option<String>,
}

/// Student directory. A failed fetch renders the loaded-but-empty state
/// with zeroed summary counts; there is no retry or user-facing banner.
pub async fn index(
    api: web::Data<ApiClient>,
    query: web::Query<DirectoryQuery>,
) -> Result<HttpResponse, AppError> {
    let students = match api.list_students().await {
        Ok(list) => list,
        Err(e) => {
            log::error!("failed to fetch student directory: {e}");
            Vec::new()
        }
    };

    let now_ms = Utc::now().timestamp_millis();
    let summary = DirectorySummary::compute(&students, now_ms);

    let active_filter = StudentFilter::from_query(query.filter.as_deref().unwrap_or(""));
    let search = query.q.clone().unwrap_or_default();
    let filtered = filter_students(&students, active_filter, &search, now_ms);

    let tmpl = DashboardTemplate {
        summary,
        students: filtered,
        filters: FilterLink::build(active_filter),
        active_filter,
        search,
    };
    render(tmpl)
}
