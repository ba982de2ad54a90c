// File: ./src/model/mod.rs
pub mod adapter;
pub mod dates;
pub mod parser;
pub mod record;

pub use record::{Priority, ReminderLead, Status, TaskRecord};
