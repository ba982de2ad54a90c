// Date/time resolution scenarios against a fixed "now":
// Monday 2024-01-01 09:00 in America/Lima.
use avisame::controller::process_command;
use avisame::model::{Priority, ReminderLead};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use chrono_tz::Tz;

const PLACEHOLDER: &str = "Tarea sin nombre";

fn monday_9am() -> DateTime<Tz> {
    let tz: Tz = "America/Lima".parse().unwrap();
    tz.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    let tz: Tz = "America/Lima".parse().unwrap();
    tz.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn single(input: &str) -> avisame::model::TaskRecord {
    let records = process_command(input, monday_9am(), PLACEHOLDER).unwrap();
    assert_eq!(records.len(), 1);
    records.into_iter().next().unwrap()
}

#[test]
fn test_tomorrow_with_explicit_time() {
    let record = single("Comprar pan # mañana a las 10am");
    assert_eq!(record.title, "Comprar pan");
    assert_eq!(record.task_moment, Some(at(2024, 1, 2, 10, 0)));
}

#[test]
fn test_weekday_with_pm_time_and_priority() {
    let record = single("Reunión importante # el viernes a las 3pm");
    assert_eq!(record.priority, Priority::Alta);
    assert_eq!(record.title, "Reunión");
    assert_eq!(record.task_moment, Some(at(2024, 1, 5, 15, 0)));
}

#[test]
fn test_heuristic_today_keeps_original_title() {
    let record = single("hoy a las 5pm llamar a mamá");
    assert_eq!(record.title, "hoy a las 5pm llamar a mamá");
    assert_eq!(record.task_moment, Some(at(2024, 1, 1, 17, 0)));
}

#[test]
fn test_unparsable_date_leaves_moments_absent() {
    let record = single("recordar comprar leche");
    assert!(record.task_moment.is_none());
    assert!(record.reminder_moment.is_none());
    assert_eq!(record.reminder_lead, ReminderLead::Manual);
}

#[test]
fn test_day_after_tomorrow() {
    let record = single("Pagar recibo # pasado mañana a las 8am");
    assert_eq!(record.task_moment, Some(at(2024, 1, 3, 8, 0)));
}

#[test]
fn test_weekday_is_always_strictly_future() {
    // "now" is a Monday; "el lunes" must land on the NEXT Monday.
    let record = single("Limpiar casa # el lunes");
    let moment = record.task_moment.unwrap();
    assert_eq!(moment.weekday(), Weekday::Mon);
    assert_eq!(moment.date_naive(), at(2024, 1, 8, 0, 0).date_naive());
}

#[test]
fn test_weekday_without_time_keeps_time_of_day() {
    let record = single("Limpiar casa # el sábado");
    let moment = record.task_moment.unwrap();
    assert_eq!(moment.weekday(), Weekday::Sat);
    assert_eq!(moment, at(2024, 1, 6, 9, 0));
}

#[test]
fn test_relative_duration_number_words() {
    assert_eq!(
        single("Tomar pastilla # en dos horas").task_moment,
        Some(at(2024, 1, 1, 11, 0))
    );
    assert_eq!(
        single("Tomar pastilla # en media hora").task_moment,
        Some(at(2024, 1, 1, 9, 30))
    );
    assert_eq!(
        single("Sacar torta # en 10 minutos").task_moment,
        Some(at(2024, 1, 1, 9, 10))
    );
}

#[test]
fn test_relative_duration_seconds() {
    let record = single("Revisar horno # en 45 segundos");
    let moment = record.task_moment.unwrap();
    assert_eq!(moment.hour(), 9);
    assert_eq!(moment.minute(), 0);
    assert_eq!(moment.second(), 45);
}

#[test]
fn test_half_hour_without_en_goes_through_fallback() {
    let record = single("Tomar pastilla # media hora");
    assert_eq!(record.task_moment, Some(at(2024, 1, 1, 9, 30)));
}

#[test]
fn test_explicit_date_with_month_name() {
    let record = single("Cita médica # 15 de marzo a las 9am");
    assert_eq!(record.task_moment, Some(at(2024, 3, 15, 9, 0)));
}

#[test]
fn test_explicit_date_with_year() {
    let record = single("Renovar pasaporte # 15 de marzo de 2025");
    assert_eq!(record.task_moment, Some(at(2025, 3, 15, 0, 0)));
}

#[test]
fn test_iso_date() {
    let record = single("Viaje # 2024-06-01");
    assert_eq!(record.task_moment, Some(at(2024, 6, 1, 0, 0)));
}

#[test]
fn test_bare_time_means_today() {
    let record = single("Llamar a Ana a las 4pm");
    assert_eq!(record.task_moment, Some(at(2024, 1, 1, 16, 0)));
}

#[test]
fn test_twelve_am_becomes_midnight() {
    let record = single("Tomar tren a las 12 am");
    assert_eq!(record.task_moment, Some(at(2024, 1, 1, 0, 0)));
}

#[test]
fn test_time_with_minutes_and_period_words() {
    let record = single("Cena # mañana a las 8:30 de la noche");
    assert_eq!(record.task_moment, Some(at(2024, 1, 2, 20, 30)));
}

#[test]
fn test_title_time_override_wins_last() {
    // The clause resolves the day, the title supplies the hour.
    let record = single("entregar informe a las 11am # el viernes");
    assert_eq!(record.task_moment, Some(at(2024, 1, 5, 11, 0)));
}

#[test]
fn test_one_day_lead_subtracts_exactly_one_day() {
    let record = single("Comprar pan un día antes # mañana a las 10am");
    assert_eq!(record.reminder_lead, ReminderLead::OneDayBefore);
    assert_eq!(record.task_moment, Some(at(2024, 1, 2, 10, 0)));
    assert_eq!(record.reminder_moment, Some(at(2024, 1, 1, 10, 0)));
}

#[test]
fn test_one_hour_lead_subtracts_exactly_one_hour() {
    let record = single("Llamar cliente una hora antes # hoy a las 5pm");
    assert_eq!(record.reminder_lead, ReminderLead::OneHourBefore);
    assert_eq!(record.task_moment, Some(at(2024, 1, 1, 17, 0)));
    assert_eq!(record.reminder_moment, Some(at(2024, 1, 1, 16, 0)));
}

#[test]
fn test_manual_lead_reminder_equals_task_moment() {
    let record = single("Comprar pan # mañana a las 10am");
    assert_eq!(record.reminder_moment, record.task_moment);
}

#[test]
fn test_oversized_relative_duration_degrades_to_no_moment() {
    // Quantities beyond what a duration can hold must not abort the pipeline.
    let record = single("Tarea # en 99999999999999999999 horas");
    assert!(record.task_moment.is_none());
    assert!(record.reminder_moment.is_none());

    let record = single("Tarea en 99999999999999999999 minutos");
    assert!(record.task_moment.is_none());
}

#[test]
fn test_empty_command_is_rejected() {
    assert!(process_command("", monday_9am(), PLACEHOLDER).is_err());
    assert!(process_command("   ", monday_9am(), PLACEHOLDER).is_err());
}
