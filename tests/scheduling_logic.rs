// Tests for the imminent-reminder scheduling decision and its boundaries.
use avisame::model::{Priority, ReminderLead, Status, TaskRecord};
use avisame::scheduler::{DEFAULT_SOON_WINDOW_SECS, decide, polling_window, reminder_digest};
use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;

fn monday_9am() -> DateTime<Tz> {
    let tz: Tz = "America/Lima".parse().unwrap();
    tz.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

fn record_with_reminder(reminder: Option<DateTime<Tz>>) -> TaskRecord {
    TaskRecord {
        title: "Comprar pan".to_string(),
        priority: Priority::Media,
        status: Status::SinEmpezar,
        reminder_lead: ReminderLead::Manual,
        list_label: None,
        task_moment: reminder,
        reminder_moment: reminder,
    }
}

#[test]
fn test_fifty_minutes_is_soon() {
    let now = monday_9am();
    let decision = decide(
        Some(now + Duration::minutes(50)),
        now,
        DEFAULT_SOON_WINDOW_SECS,
    )
    .unwrap();

    assert!(decision.is_soon);
    assert_eq!(decision.wait_seconds, 3000);
    assert_eq!(decision.message, "Done. I'll remind you in 50 minutes.");
}

#[test]
fn test_remainder_over_thirty_seconds_rounds_up() {
    let now = monday_9am();
    let decision = decide(
        Some(now + Duration::seconds(3031)),
        now,
        DEFAULT_SOON_WINDOW_SECS,
    )
    .unwrap();
    assert_eq!(decision.message, "Done. I'll remind you in 51 minutes.");

    let decision = decide(
        Some(now + Duration::seconds(3030)),
        now,
        DEFAULT_SOON_WINDOW_SECS,
    )
    .unwrap();
    assert_eq!(decision.message, "Done. I'll remind you in 50 minutes.");
}

#[test]
fn test_under_a_minute_is_phrased_in_seconds() {
    let now = monday_9am();
    let decision = decide(
        Some(now + Duration::seconds(45)),
        now,
        DEFAULT_SOON_WINDOW_SECS,
    )
    .unwrap();
    assert_eq!(decision.wait_seconds, 45);
    assert_eq!(decision.message, "Done. I'll remind you in 45 seconds.");
}

#[test]
fn test_exactly_one_minute() {
    let now = monday_9am();
    let decision = decide(
        Some(now + Duration::seconds(60)),
        now,
        DEFAULT_SOON_WINDOW_SECS,
    )
    .unwrap();
    // The countdown phrase always says "minutes", even for one.
    assert_eq!(decision.message, "Done. I'll remind you in 1 minutes.");
}

#[test]
fn test_window_boundaries_are_strict() {
    let now = monday_9am();
    // At or past the reminder moment: nothing to schedule.
    assert!(decide(Some(now), now, DEFAULT_SOON_WINDOW_SECS).is_none());
    assert!(decide(Some(now - Duration::minutes(5)), now, DEFAULT_SOON_WINDOW_SECS).is_none());
    // Exactly at the ceiling: left to the polling cycle.
    assert!(
        decide(
            Some(now + Duration::seconds(DEFAULT_SOON_WINDOW_SECS)),
            now,
            DEFAULT_SOON_WINDOW_SECS
        )
        .is_none()
    );
    // One second inside the ceiling still fires.
    assert!(
        decide(
            Some(now + Duration::seconds(DEFAULT_SOON_WINDOW_SECS - 1)),
            now,
            DEFAULT_SOON_WINDOW_SECS
        )
        .is_some()
    );
}

#[test]
fn test_absent_reminder_yields_no_decision() {
    assert!(decide(None, monday_9am(), DEFAULT_SOON_WINDOW_SECS).is_none());
}

#[test]
fn test_configured_ceiling_is_respected() {
    let now = monday_9am();
    assert!(decide(Some(now + Duration::seconds(150)), now, 100).is_none());
    assert!(decide(Some(now + Duration::seconds(50)), now, 100).is_some());
}

#[test]
fn test_digest_marks_high_priority() {
    let now = monday_9am();
    let mut record = record_with_reminder(Some(now + Duration::hours(7)));
    record.priority = Priority::Alta;

    let digest = reminder_digest(&record);
    assert!(digest.contains("🔴"));
    assert!(digest.contains("Comprar pan"));
    assert!(digest.contains("04:00 PM"));
    assert!(digest.contains("Prioridad: Alta"));

    record.priority = Priority::Media;
    let digest = reminder_digest(&record);
    assert!(digest.contains("🔵"));
    assert!(digest.contains("Prioridad: Normal"));
}

#[test]
fn test_digest_without_reminder_moment() {
    let record = record_with_reminder(None);
    assert!(reminder_digest(&record).contains("Hora?"));
}

#[test]
fn test_polling_window_spans_past_day_and_next_two_hours() {
    let now = monday_9am();
    let (start, end) = polling_window(now);
    assert_eq!(start, now - Duration::hours(24));
    assert_eq!(end, now + Duration::hours(2));
}
