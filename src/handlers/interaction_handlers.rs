//! Form handlers for the profile's mutating operations. Every handler
//! answers 303 back to the profile, which refetches the interaction list —
//! the server-rendered equivalent of "wait for confirmation, then reload".
//! Upstream write failures are logged and swallowed: the user lands back on
//! the profile with the list unchanged.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::models::interaction::{
    ActionKind, InteractionKind, NewInteraction, NoteUpdate, TEAM_ATTRIBUTION,
};

fn back_to_profile(student_id: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/student/{student_id}")))
        .finish()
}

#[derive(Deserialize)]
pub struct ActionForm {
    pub action: String,
    pub subtype: String,
    pub details: String,
}

/// Log a communication, mock email, or scheduled task from the modal.
/// The page blocks empty fields with an alert; this check is the backstop.
pub async fn log_action(
    api: web::Data<ApiClient>,
    path: web::Path<String>,
    form: web::Form<ActionForm>,
) -> Result<HttpResponse, AppError> {
    let student_id = path.into_inner();

    let Some(kind) = ActionKind::from_form_value(&form.action) else {
        log::warn!(
            "ignoring unknown action kind '{}' for student {student_id}",
            form.action
        );
        return Ok(back_to_profile(&student_id));
    };
    if form.subtype.trim().is_empty() || form.details.trim().is_empty() {
        log::warn!("rejecting {} with empty fields for student {student_id}", form.action);
        return Ok(back_to_profile(&student_id));
    }

    let new = NewInteraction {
        kind: kind.persisted_kind(),
        subtype: form.subtype.clone(),
        details: form.details.clone(),
        timestamp: Utc::now().timestamp_millis(),
        team_member: TEAM_ATTRIBUTION.to_string(),
        student_id: student_id.clone(),
    };
    if let Err(e) = api.create_interaction(&student_id, &new).await {
        log::error!("failed to log action for student {student_id}: {e}");
    }
    Ok(back_to_profile(&student_id))
}

#[derive(Deserialize)]
pub struct NoteForm {
    pub details: String,
}

/// Add an internal note (kind "Note", subtype "Internal").
pub async fn add_note(
    api: web::Data<ApiClient>,
    path: web::Path<String>,
    form: web::Form<NoteForm>,
) -> Result<HttpResponse, AppError> {
    let student_id = path.into_inner();

    if form.details.trim().is_empty() {
        return Ok(back_to_profile(&student_id));
    }

    let new = NewInteraction {
        kind: InteractionKind::Note,
        subtype: "Internal".to_string(),
        details: form.details.clone(),
        timestamp: Utc::now().timestamp_millis(),
        team_member: TEAM_ATTRIBUTION.to_string(),
        student_id: student_id.clone(),
    };
    if let Err(e) = api.create_interaction(&student_id, &new).await {
        log::error!("failed to add note for student {student_id}: {e}");
    }
    Ok(back_to_profile(&student_id))
}

/// Save an edited note. The note keeps its id; the backend stamps the new
/// `last_updated` value we send, which drives the "(Edited)" marker.
pub async fn update_note(
    api: web::Data<ApiClient>,
    path: web::Path<(String, String)>,
    form: web::Form<NoteForm>,
) -> Result<HttpResponse, AppError> {
    let (student_id, note_id) = path.into_inner();

    if form.details.trim().is_empty() {
        return Ok(back_to_profile(&student_id));
    }

    let update = NoteUpdate {
        details: form.details.clone(),
        team_member: format!("{TEAM_ATTRIBUTION} (Edited)"),
        last_updated: Utc::now().timestamp_millis(),
    };
    if let Err(e) = api.update_note(&note_id, &update).await {
        log::error!("failed to update note {note_id} for student {student_id}: {e}");
    }
    Ok(back_to_profile(&student_id))
}

/// Delete a note by id. No confirmation prompt, matching the original UI.
pub async fn delete_note(
    api: web::Data<ApiClient>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (student_id, note_id) = path.into_inner();

    if let Err(e) = api.delete_note(&note_id).await {
        log::error!("failed to delete note {note_id} for student {student_id}: {e}");
    }
    Ok(back_to_profile(&student_id))
}
