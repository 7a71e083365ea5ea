use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use formcheck::backend::{ProgressStore, RestBackend};
use formcheck::checks::{evaluate, next_weight_check, ComplianceState};
use formcheck::compare::select_comparisons;
use formcheck::config::Config;
use formcheck::poses::{required_poses, Pose};

enum Command {
    Status,
    LogWeight(f64),
    Upload { pose: Pose, file: PathBuf },
    Compare,
}

struct Args {
    config_path: Option<PathBuf>,
    command: Command,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("formcheck {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            flag if flag.starts_with('-') => {
                eprintln!("Unknown argument: {}", flag);
                print_help();
                std::process::exit(1);
            }
            value => positional.push(value.to_string()),
        }
        i += 1;
    }

    let command = match positional.first().map(String::as_str) {
        None | Some("status") => Command::Status,
        Some("log-weight") => {
            let Some(raw) = positional.get(1) else {
                eprintln!("Error: log-weight requires a weight in kg");
                std::process::exit(1);
            };
            match raw.parse::<f64>() {
                Ok(kg) => Command::LogWeight(kg),
                Err(_) => {
                    eprintln!("Error: '{}' is not a valid weight", raw);
                    std::process::exit(1);
                }
            }
        }
        Some("upload") => {
            let (Some(pose_str), Some(file)) = (positional.get(1), positional.get(2)) else {
                eprintln!("Error: upload requires a pose and an image file");
                std::process::exit(1);
            };
            let Some(pose) = Pose::from_str(pose_str) else {
                eprintln!("Unknown pose: {}", pose_str);
                eprintln!("Poses: front-arms-down, front-biceps, side-left-arms-down, side-left-arms-forward, side-right-arms-down, side-right-arms-forward, back-arms-down, back-arms-extended, back-biceps");
                std::process::exit(1);
            };
            Command::Upload {
                pose,
                file: PathBuf::from(file),
            }
        }
        Some("compare") => Command::Compare,
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            std::process::exit(1);
        }
    };

    Args {
        config_path,
        command,
    }
}

fn print_help() {
    println!(
        r#"formcheck - periodic compliance tracker for fitness progress checks

USAGE:
    formcheck [OPTIONS] [COMMAND]

COMMANDS:
    status              Show due dates and overdue state (default)
    log-weight <KG>     Log today's weight
    upload <POSE> <FILE>
                        Upload a progress photo for today
    compare             Show first/previous/current photos per pose

OPTIONS:
    --config, -c PATH   Path to config file
    --version, -V       Show version
    --help, -h          Show this help message

ENVIRONMENT:
    FORMCHECK_LOG       Log level (trace, debug, info, warn, error)
"#
    );
}

fn main() -> Result<()> {
    let args = parse_args();
    let config = Config::load(args.config_path.as_deref())?;
    formcheck::logging::init(config.log_dir.clone())?;

    if config.backend.user_id.is_empty() {
        bail!("No user_id configured; set backend.user_id in the config file");
    }

    let backend = RestBackend::new(&config.backend);
    let user_id = config.backend.user_id.clone();
    let today = Local::now().date_naive();

    match args.command {
        Command::Status => cmd_status(&backend, &user_id, today),
        Command::LogWeight(kg) => cmd_log_weight(&backend, &user_id, today, kg),
        Command::Upload { pose, file } => cmd_upload(&backend, &user_id, today, pose, &file),
        Command::Compare => cmd_compare(&backend, &user_id),
    }
}

fn load_state(
    backend: &dyn ProgressStore,
    user_id: &str,
    today: NaiveDate,
) -> Result<ComplianceState> {
    let gender = backend.fetch_gender(user_id)?;
    let required = required_poses(gender);
    let weights = backend.fetch_weight_logs(user_id)?;
    let photos = backend.fetch_progress_photos(user_id)?;
    Ok(evaluate(&weights, &photos, &required, today))
}

fn cmd_status(backend: &dyn ProgressStore, user_id: &str, today: NaiveDate) -> Result<()> {
    let state = load_state(backend, user_id, today)?;

    println!("Periodic checks as of {}", today);
    println!(
        "  Weekly weight check: next due {} [{}]",
        state.next_weight_check,
        if state.weight_overdue { "overdue" } else { "up to date" }
    );
    println!(
        "  4-week photo check:  next due {} [{}]",
        state.next_photo_check,
        if state.photos_overdue { "overdue" } else { "up to date" }
    );

    println!("Required poses:");
    for status in &state.per_pose {
        let note = match status.latest {
            None => "missing".to_string(),
            Some(date) if status.recent => format!("ok, last {}", date),
            Some(date) => format!("stale, last {}", date),
        };
        println!("  {:28} {}", status.pose.display_name(), note);
    }

    Ok(())
}

fn cmd_log_weight(
    backend: &dyn ProgressStore,
    user_id: &str,
    today: NaiveDate,
    kg: f64,
) -> Result<()> {
    if !kg.is_finite() || kg <= 0.0 {
        bail!("Please enter a valid weight in kg");
    }

    backend.upsert_weight_log(user_id, today, kg)?;
    let weights = backend.fetch_weight_logs(user_id)?;
    println!(
        "Logged {} kg for {}. Next weight check due {}.",
        kg,
        today,
        next_weight_check(&weights, today)
    );
    Ok(())
}

fn cmd_upload(
    backend: &dyn ProgressStore,
    user_id: &str,
    today: NaiveDate,
    pose: Pose,
    file: &std::path::Path,
) -> Result<()> {
    let image = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let url = backend.upload_photo(user_id, pose, today, &image)?;
    println!("Uploaded {} for {}: {}", pose.display_name(), today, url);
    Ok(())
}

fn cmd_compare(backend: &dyn ProgressStore, user_id: &str) -> Result<()> {
    let gender = backend.fetch_gender(user_id)?;
    let required = required_poses(gender);
    let photos = backend.fetch_progress_photos(user_id)?;

    for (pose, slots) in select_comparisons(&photos, &required) {
        println!("{}", pose.display_name());
        if slots.is_empty() {
            println!("  no photos yet");
            continue;
        }

        match &slots.first {
            Some(first) => println!("  first:    {}  {}", first.check_date, first.photo_url),
            None => println!("  first:    none"),
        }
        match slots.previous.as_ref() {
            Some(previous) if slots.show_previous() => {
                println!("  previous: {}  {}", previous.check_date, previous.photo_url);
            }
            _ => println!("  previous: no previous check"),
        }
        match slots.current.as_ref() {
            Some(current) if slots.show_current() => {
                println!("  current:  {}  {}", current.check_date, current.photo_url);
            }
            Some(_) => println!("  current:  same as previous"),
            None => println!("  current:  none"),
        }
    }

    Ok(())
}
