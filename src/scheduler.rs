// File: ./src/scheduler.rs
//
// Classifies a reminder moment against "now": imminent reminders (inside
// the soon window) get a wait interval and a countdown phrase for an
// immediate deferred fire; everything else is left to the external polling
// cycle. The deferred timer itself lives outside the core; this module only
// emits the decision data.
use crate::model::record::{Priority, TaskRecord};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use log::debug;
use serde::Serialize;

/// Ceiling under which a reminder counts as imminent: 65 minutes.
pub const DEFAULT_SOON_WINDOW_SECS: i64 = 3900;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingDecision {
    pub wait_seconds: i64,
    pub is_soon: bool,
    pub message: String,
}

/// Emits a decision only when the reminder falls strictly inside
/// (0, soon_window_secs). Waits of a minute or more are phrased in minutes,
/// rounded up by one when the leftover exceeds 30 seconds.
pub fn decide(
    reminder_moment: Option<DateTime<Tz>>,
    now: DateTime<Tz>,
    soon_window_secs: i64,
) -> Option<SchedulingDecision> {
    let reminder = reminder_moment?;
    let wait = (reminder - now).num_seconds();
    if wait <= 0 || wait >= soon_window_secs {
        debug!("reminder not imminent (wait {}s)", wait);
        return None;
    }

    let message = if wait >= 60 {
        let mut minutes = wait / 60;
        if wait % 60 > 30 {
            minutes += 1;
        }
        format!("Done. I'll remind you in {} minutes.", minutes)
    } else {
        format!("Done. I'll remind you in {} seconds.", wait)
    };
    debug!("reminder imminent in {}s", wait);

    Some(SchedulingDecision {
        wait_seconds: wait,
        is_soon: true,
        message,
    })
}

/// Notification line for a due reminder, as handed to the outbound chat
/// collaborator. High-priority tasks get the red marker.
pub fn reminder_digest(record: &TaskRecord) -> String {
    let icon = if record.priority == Priority::Alta {
        "🔴"
    } else {
        "🔵"
    };
    let hora = record
        .reminder_moment
        .map(|dt| dt.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "Hora?".to_string());
    format!(
        "{icon} RECORDATORIO {icon}\n\n📌 {}\n⏰ {hora}\n🚨 Prioridad: {}",
        record.title, record.priority
    )
}

/// Query window for the external reminder poller: still-pending reminders
/// from the last 24 hours up to 2 hours ahead.
pub fn polling_window(now: DateTime<Tz>) -> (DateTime<Tz>, DateTime<Tz>) {
    (now - Duration::hours(24), now + Duration::hours(2))
}
