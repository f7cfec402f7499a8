use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::format_millis;

/// Attribution string recorded on every interaction this layer creates.
pub const TEAM_ATTRIBUTION: &str = "Admin User (You)";

/// Wire-level interaction type. "Activity" and "Document" are produced by
/// the backend only; this layer writes "Communication" and "Note".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    Activity,
    Document,
    Communication,
    Note,
    /// Anything the backend sends that we don't know. Dropped from all
    /// three profile views.
    #[serde(other)]
    Unknown,
}

fn default_kind() -> InteractionKind {
    InteractionKind::Unknown
}

/// One recorded event on a student's timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: InteractionKind,
    #[serde(default)]
    pub subtype: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub team_member: Option<String>,
    #[serde(default)]
    pub student_id: String,
    /// Set by the backend when a note is edited.
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl Interaction {
    pub fn timestamp_display(&self) -> String {
        match self.timestamp {
            Some(ts) => format_millis(ts),
            None => "Unknown".to_string(),
        }
    }

    /// "by <team member>" for attributed entries, "(System)" otherwise.
    pub fn attribution(&self) -> String {
        match self.team_member.as_deref() {
            Some(member) if !member.is_empty() => format!("by {member}"),
            _ => "(System)".to_string(),
        }
    }

    pub fn author_display(&self) -> &str {
        match self.team_member.as_deref() {
            Some(member) if !member.is_empty() => member,
            _ => "Unknown",
        }
    }

    /// Communication entries get a call icon instead of a mail icon when
    /// the subtype mentions a call or meeting.
    pub fn is_call_or_meeting(&self) -> bool {
        let subtype = self.subtype.to_lowercase();
        subtype.contains("call") || subtype.contains("meeting")
    }

    pub fn edited(&self) -> bool {
        self.last_updated.is_some()
    }
}

/// The three profile views. Partitioning is total and disjoint over the
/// known kinds; each view is sorted descending by timestamp (absent
/// timestamps sort last, ties keep input order).
#[derive(Debug, Default)]
pub struct InteractionViews {
    pub timeline: Vec<Interaction>,
    pub communications: Vec<Interaction>,
    pub notes: Vec<Interaction>,
}

impl InteractionViews {
    pub fn partition(interactions: Vec<Interaction>) -> Self {
        let mut views = Self::default();
        for item in interactions {
            match item.kind {
                InteractionKind::Activity | InteractionKind::Document => {
                    views.timeline.push(item)
                }
                InteractionKind::Communication => views.communications.push(item),
                InteractionKind::Note => views.notes.push(item),
                InteractionKind::Unknown => {
                    log::warn!("dropping interaction {} with unknown type", item.id)
                }
            }
        }
        for view in [
            &mut views.timeline,
            &mut views.communications,
            &mut views.notes,
        ] {
            view.sort_by_key(|i| Reverse(i.timestamp.unwrap_or(0)));
        }
        views
    }
}

/// The three profile actions offered by the modal. Several UI actions
/// collapse into two persisted kinds; `persisted_kind` makes that mapping
/// explicit and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    LogCommunication,
    TriggerEmail,
    ScheduleTask,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::LogCommunication,
        ActionKind::TriggerEmail,
        ActionKind::ScheduleTask,
    ];

    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "log_communication" => Some(ActionKind::LogCommunication),
            "trigger_email" => Some(ActionKind::TriggerEmail),
            "schedule_task" => Some(ActionKind::ScheduleTask),
            _ => None,
        }
    }

    pub fn form_value(self) -> &'static str {
        match self {
            ActionKind::LogCommunication => "log_communication",
            ActionKind::TriggerEmail => "trigger_email",
            ActionKind::ScheduleTask => "schedule_task",
        }
    }

    pub fn persisted_kind(self) -> InteractionKind {
        match self {
            ActionKind::LogCommunication | ActionKind::TriggerEmail => {
                InteractionKind::Communication
            }
            // Tasks/reminders are saved as internal notes.
            ActionKind::ScheduleTask => InteractionKind::Note,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ActionKind::LogCommunication => "Log Call/Meeting",
            ActionKind::TriggerEmail => "Trigger Follow-up Email (Mock)",
            ActionKind::ScheduleTask => "Schedule Reminder/Task",
        }
    }

    pub fn modal_title(self) -> &'static str {
        match self {
            ActionKind::LogCommunication => "Log Call/Meeting",
            ActionKind::TriggerEmail => "Mock Follow-up Email",
            ActionKind::ScheduleTask => "Schedule Reminder/Task",
        }
    }

    pub fn subtype_placeholder(self) -> &'static str {
        match self {
            ActionKind::LogCommunication => "e.g., Follow-up Call, Team Meeting",
            ActionKind::TriggerEmail => "e.g., Sent Essay Guide, Application Reminder",
            ActionKind::ScheduleTask => "e.g., Follow up on essays, Check resume",
        }
    }
}

/// POST body for `/api/students/{id}/interactions`.
#[derive(Debug, Serialize)]
pub struct NewInteraction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub subtype: String,
    pub details: String,
    pub timestamp: i64,
    pub team_member: String,
    pub student_id: String,
}

/// PUT body for `/api/notes/{id}`.
#[derive(Debug, Serialize)]
pub struct NoteUpdate {
    pub details: String,
    pub team_member: String,
    pub last_updated: i64,
}
