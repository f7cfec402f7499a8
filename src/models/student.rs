use serde::Deserialize;

use super::format_millis;

/// A student counts as "active" if seen within the last 30 days.
pub const ACTIVE_WINDOW_MS: i64 = 30 * 86_400_000;
/// A student counts as "not contacted" after 7 days without activity.
pub const CONTACT_WINDOW_MS: i64 = 7 * 86_400_000;
/// Intent scores above this are treated as high intent.
pub const HIGH_INTENT_THRESHOLD: i64 = 70;

/// Application progress checklist. The backend seeds these sparsely, so
/// every field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub colleges_selected_count: i64,
    #[serde(default)]
    pub essays_started_count: i64,
    #[serde(default)]
    pub resume_uploaded: bool,
    #[serde(default)]
    pub activities_added_count: i64,
}

/// A lead tracked by the CRM. Owned by the backend; this layer only reads.
///
/// `app_status` is an open set ("Exploring", "Shortlisting", "Applying",
/// "Submitted" observed), so it stays a string rather than an enum. The
/// directory endpoint strips `progress`; only the single-student endpoint
/// includes it.
#[derive(Debug, Clone, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub grade_level: String,
    #[serde(default)]
    pub app_status: String,
    #[serde(default)]
    pub high_intent_score: i64,
    #[serde(default)]
    pub last_active_timestamp: Option<i64>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub sat_e: Option<i64>,
    #[serde(default)]
    pub sat_m: Option<i64>,
    #[serde(default)]
    pub act: Option<i64>,
    #[serde(default)]
    pub needs_essay_help: bool,
    #[serde(default)]
    pub progress: Option<Progress>,
}

impl Student {
    /// Application progress as a percentage. Submitted is always 100; any
    /// other status accumulates 20 points per completed step and caps at 99
    /// so only a submitted application can display 100%.
    pub fn progress_percent(&self) -> i64 {
        if self.app_status == "Submitted" {
            return 100;
        }
        let progress = self.progress.clone().unwrap_or_default();
        let mut score = 0;
        if progress.colleges_selected_count > 0 {
            score += 20;
        }
        if progress.essays_started_count > 0 {
            score += 20;
        }
        if progress.resume_uploaded {
            score += 20;
        }
        if progress.activities_added_count > 0 {
            score += 20;
        }
        if self.app_status == "Applying" {
            score += 20;
        }
        score.min(99)
    }

    /// Canned advisory text shown on the profile. Rule-based, not a real
    /// inference.
    pub fn advisory(&self) -> &'static str {
        if self.app_status == "Submitted" {
            "This student is highly engaged, has excellent scores, and is tracking well. Focus on yield."
        } else if self.high_intent_score < 40 {
            "Low engagement, low scores. Needs a basic follow-up call to re-engage with the platform and confirm goals."
        } else {
            "High intent score, but slow essay progress. Needs an intervention on the writing stage. Recommend using essay resources communication tool."
        }
    }

    pub fn is_active(&self, now_ms: i64) -> bool {
        matches!(self.last_active_timestamp, Some(ts) if now_ms - ts <= ACTIVE_WINDOW_MS)
    }

    pub fn last_active_display(&self) -> String {
        match self.last_active_timestamp {
            Some(ts) => format_millis(ts),
            None => "Never".to_string(),
        }
    }

    /// CSS badge class suffix: the status with spaces stripped.
    pub fn status_class(&self) -> String {
        self.app_status.replace(' ', "")
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or("N/A")
    }

    pub fn gpa_display(&self) -> String {
        match self.gpa {
            Some(gpa) => gpa.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn sat_e_display(&self) -> String {
        score_display(self.sat_e)
    }

    pub fn sat_m_display(&self) -> String {
        score_display(self.sat_m)
    }

    pub fn act_display(&self) -> String {
        score_display(self.act)
    }
}

fn score_display(score: Option<i64>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => "N/A".to_string(),
    }
}

/// Summary counters shown above the directory, always computed from the
/// full collection rather than the filtered one.
#[derive(Debug, Clone, Default)]
pub struct DirectorySummary {
    pub total_students: usize,
    pub active_students: usize,
    pub essay_stage: usize,
    pub high_intent: usize,
}

impl DirectorySummary {
    pub fn compute(students: &[Student], now_ms: i64) -> Self {
        Self {
            total_students: students.len(),
            active_students: students.iter().filter(|s| s.is_active(now_ms)).count(),
            essay_stage: students
                .iter()
                .filter(|s| s.app_status == "Applying")
                .count(),
            high_intent: students
                .iter()
                .filter(|s| s.high_intent_score > HIGH_INTENT_THRESHOLD)
                .count(),
        }
    }
}

/// Directory quick filters. At most one is active at a time; the selection
/// lives in the URL query string, not in process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentFilter {
    All,
    NotContacted,
    HighIntent,
    NeedsEssayHelp,
}

impl StudentFilter {
    pub const ALL: [StudentFilter; 4] = [
        StudentFilter::All,
        StudentFilter::NotContacted,
        StudentFilter::HighIntent,
        StudentFilter::NeedsEssayHelp,
    ];

    /// Parse the `filter` query parameter. Anything unrecognized falls back
    /// to `All`.
    pub fn from_query(value: &str) -> Self {
        match value {
            "not_contacted" => StudentFilter::NotContacted,
            "high_intent" => StudentFilter::HighIntent,
            "needs_essay_help" => StudentFilter::NeedsEssayHelp,
            _ => StudentFilter::All,
        }
    }

    pub fn query_value(self) -> &'static str {
        match self {
            StudentFilter::All => "all",
            StudentFilter::NotContacted => "not_contacted",
            StudentFilter::HighIntent => "high_intent",
            StudentFilter::NeedsEssayHelp => "needs_essay_help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudentFilter::All => "All",
            StudentFilter::NotContacted => "Not Contacted",
            StudentFilter::HighIntent => "High Intent",
            StudentFilter::NeedsEssayHelp => "Needs Essay Help",
        }
    }

    /// Category predicate. A student with no activity timestamp is neither
    /// active nor "not contacted", matching the original front-end.
    pub fn matches(self, student: &Student, now_ms: i64) -> bool {
        match self {
            StudentFilter::All => true,
            StudentFilter::NotContacted => {
                matches!(student.last_active_timestamp, Some(ts) if now_ms - ts > CONTACT_WINDOW_MS)
            }
            StudentFilter::HighIntent => student.high_intent_score > HIGH_INTENT_THRESHOLD,
            StudentFilter::NeedsEssayHelp => student.needs_essay_help,
        }
    }
}

/// Apply the category filter, then a case-insensitive substring search over
/// name or email. Source order is preserved.
pub fn filter_students(
    students: &[Student],
    filter: StudentFilter,
    search: &str,
    now_ms: i64,
) -> Vec<Student> {
    let needle = search.to_lowercase();
    students
        .iter()
        .filter(|s| filter.matches(s, now_ms))
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
