//! Thin client for the backend REST API. One method per endpoint; a non-2xx
//! status from the backend is an error, so callers joining two fetches fail
//! the whole load when either side fails.

use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::interaction::{Interaction, NewInteraction, NoteUpdate};
use crate::models::student::Student;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn check(resp: reqwest::Response, path: &str) -> Result<reqwest::Response, AppError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(AppError::Status(resp.status(), path.to_string()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Ok(Self::check(resp, path).await?.json().await?)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.get_json("/api/students").await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, AppError> {
        self.get_json(&format!("/api/students/{id}")).await
    }

    pub async fn list_interactions(&self, student_id: &str) -> Result<Vec<Interaction>, AppError> {
        self.get_json(&format!("/api/students/{student_id}/interactions"))
            .await
    }

    pub async fn create_interaction(
        &self,
        student_id: &str,
        new: &NewInteraction,
    ) -> Result<Interaction, AppError> {
        let path = format!("/api/students/{student_id}/interactions");
        let resp = self.http.post(self.url(&path)).json(new).send().await?;
        Ok(Self::check(resp, &path).await?.json().await?)
    }

    pub async fn update_note(&self, note_id: &str, update: &NoteUpdate) -> Result<(), AppError> {
        let path = format!("/api/notes/{note_id}");
        let resp = self.http.put(self.url(&path)).json(update).send().await?;
        Self::check(resp, &path).await?;
        Ok(())
    }

    pub async fn delete_note(&self, note_id: &str) -> Result<(), AppError> {
        let path = format!("/api/notes/{note_id}");
        let resp = self.http.delete(self.url(&path)).send().await?;
        Self::check(resp, &path).await?;
        Ok(())
    }
}
