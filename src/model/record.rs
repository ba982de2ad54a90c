// File: ./src/model/record.rs
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Task priority as stored by the remote tracker.
/// Every command gets a priority; unrecognized input keeps the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum Priority {
    Alta,
    #[default]
    Media,
    Baja,
}

impl Priority {
    /// Name the external store expects for this value.
    /// The store schema labels the default tier "Normal".
    pub fn store_name(&self) -> &'static str {
        match self {
            Priority::Alta => "Alta",
            Priority::Media => "Normal",
            Priority::Baja => "Baja",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.store_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum Status {
    #[default]
    SinEmpezar,
    EnCurso,
    Listo,
}

impl Status {
    pub fn store_name(&self) -> &'static str {
        match self {
            Status::SinEmpezar => "Sin empezar",
            Status::EnCurso => "En curso",
            Status::Listo => "Listo",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.store_name())
    }
}

/// How far ahead of the task moment the reminder fires.
/// Manual means the reminder moment coincides with the task moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum ReminderLead {
    #[default]
    Manual,
    OneDayBefore,
    OneHourBefore,
}

impl ReminderLead {
    pub fn store_name(&self) -> &'static str {
        match self {
            ReminderLead::Manual => "Manual",
            ReminderLead::OneDayBefore => "1 día antes",
            ReminderLead::OneHourBefore => "1 hora antes",
        }
    }

    /// Duration subtracted from the task moment, when this lead implies one.
    pub fn lead_duration(&self) -> Option<Duration> {
        match self {
            ReminderLead::Manual => None,
            ReminderLead::OneDayBefore => Some(Duration::days(1)),
            ReminderLead::OneHourBefore => Some(Duration::hours(1)),
        }
    }
}

impl fmt::Display for ReminderLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.store_name())
    }
}

/// Metadata pulled out of the command title before date resolution.
/// Every field always has a value; defaults apply when no keyword matched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedMetadata {
    pub priority: Priority,
    pub status: Status,
    pub reminder_lead: ReminderLead,
    pub list_label: Option<String>,
}

/// The unit handed to the external task store. One command produces one
/// record, or several sharing everything but the title when list-splitting
/// applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub title: String,
    pub priority: Priority,
    pub status: Status,
    pub reminder_lead: ReminderLead,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_moment: Option<DateTime<Tz>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_moment: Option<DateTime<Tz>>,
}
