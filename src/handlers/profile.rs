use actix_web::{HttpResponse, web};
use askama::Template;

use crate::api::ApiClient;
use crate::errors::{AppError, render};
use crate::models::interaction::{ActionKind, InteractionViews};
use crate::templates_structs::{ProfileTemplate, StudentLoadErrorTemplate};

/// Student profile. The student record and interaction list are fetched
/// concurrently; if either fails (transport or non-2xx), the whole load
/// fails and an error state naming the requested id is rendered.
pub async fn show(
    api: web::Data<ApiClient>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let loaded = tokio::try_join!(api.get_student(&id), api.list_interactions(&id));
    let (student, interactions) = match loaded {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("failed to load student {id}: {e}");
            let tmpl = StudentLoadErrorTemplate { student_id: id };
            return Ok(HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(tmpl.render()?));
        }
    };

    let progress_percent = student.progress_percent();
    let advisory = student.advisory();
    let tmpl = ProfileTemplate {
        student,
        views: InteractionViews::partition(interactions),
        progress_percent,
        advisory,
        action_kinds: ActionKind::ALL,
    };
    render(tmpl)
}
