use anyhow::{Result, bail};
use avisame::config::Config;
use avisame::model::adapter;
use avisame::{cli, controller, paths, scheduler};
use chrono::Utc;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        cli::print_help(&args[0]);
        return Ok(());
    }

    let mut config_path: Option<PathBuf> = None;
    let mut decide = false;
    let mut command_words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" if i + 1 < args.len() => {
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--decide" | "-d" => {
                decide = true;
                i += 1;
            }
            flag if flag.starts_with('-') && command_words.is_empty() => {
                bail!("Unknown flag '{}', see --help", flag);
            }
            _ => {
                command_words.push(args[i].clone());
                i += 1;
            }
        }
    }

    if command_words.is_empty() {
        cli::print_help(&args[0]);
        return Ok(());
    }

    let config = load_config(config_path)?;
    let tz = config.tz()?;
    let now = Utc::now().with_timezone(&tz);

    let command = command_words.join(" ");
    let records = controller::process_command(&command, now, &config.placeholder_title)?;

    for record in &records {
        let payload = adapter::to_store_properties(record);
        println!("{}", serde_json::to_string_pretty(&payload)?);

        if decide
            && let Some(decision) = scheduler::decide(record.reminder_moment, now, config.soon_window_secs)
        {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
    }

    Ok(())
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    let path = match explicit {
        Some(p) => p,
        None => paths::default_config_file()?,
    };
    match Config::load(&path) {
        Ok(config) => Ok(config),
        Err(e) if Config::is_missing_config_error(&e) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}
