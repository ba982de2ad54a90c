// File: ./src/controller.rs
//
// Orchestrates the interpretation pipeline: split title from rule clause,
// extract metadata, normalize the title, resolve the task and reminder
// moments, and expand list-style commands into individual records.
//
// The whole pipeline is a pure function of the input and the injected
// "now"; it holds no shared state and is safe to run concurrently for
// independent commands.
use crate::model::dates;
use crate::model::parser;
use crate::model::record::TaskRecord;
use anyhow::{Result, bail};
use chrono::DateTime;
use chrono_tz::Tz;
use log::info;

/// Interprets one raw command into one or more task records.
///
/// The only hard failure is an empty command; unparsable dates and
/// unrecognized keywords degrade to absent fields and defaults.
pub fn process_command(
    input: &str,
    now: DateTime<Tz>,
    placeholder_title: &str,
) -> Result<Vec<TaskRecord>> {
    if input.trim().is_empty() {
        bail!("Empty command");
    }

    let (raw_title, rule_clause) = parser::split_title_and_rule(input);
    let (meta, working_title) = parser::extract_metadata(&raw_title);
    let title = parser::normalize_title(&working_title, placeholder_title);

    let task_moment = dates::resolve_task_moment(&rule_clause, &title, now);
    let reminder_moment = dates::compute_reminder_moment(task_moment, meta.reminder_lead);

    let base = TaskRecord {
        title: title.clone(),
        priority: meta.priority,
        status: meta.status,
        reminder_lead: meta.reminder_lead,
        list_label: meta.list_label.clone(),
        task_moment,
        reminder_moment,
    };

    // A list label plus several comma/conjunction-separated items expands
    // into one record per item, sharing metadata and schedule.
    let records = if meta.list_label.is_some() {
        let items = parser::split_list_items(&title);
        if items.len() > 1 {
            items
                .into_iter()
                .map(|item| TaskRecord {
                    title: item,
                    ..base.clone()
                })
                .collect()
        } else {
            vec![base]
        }
    } else {
        vec![base]
    };

    info!("interpreted {} record(s) from command", records.len());
    Ok(records)
}
