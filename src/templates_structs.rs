// Template context structures for Askama templates.

use askama::Template;

use crate::models::interaction::{ActionKind, InteractionViews};
use crate::models::student::{DirectorySummary, Student, StudentFilter};

/// One quick-filter button on the dashboard.
pub struct FilterLink {
    pub label: &'static str,
    pub value: &'static str,
    pub active: bool,
}

impl FilterLink {
    pub fn build(active: StudentFilter) -> Vec<FilterLink> {
        StudentFilter::ALL
            .iter()
            .map(|f| FilterLink {
                label: f.label(),
                value: f.query_value(),
                active: *f == active,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub summary: DirectorySummary,
    pub students: Vec<Student>,
    pub filters: Vec<FilterLink>,
    pub active_filter: StudentFilter,
    pub search: String,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub student: Student,
    pub views: InteractionViews,
    pub progress_percent: i64,
    pub advisory: &'static str,
    pub action_kinds: [ActionKind; 3],
}

#[derive(Template)]
#[template(path = "errors/student_load.html")]
pub struct StudentLoadErrorTemplate {
    pub student_id: String,
}
