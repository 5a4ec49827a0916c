#![warn(clippy::pedantic)]

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result, bail};
use atl_domain::{
    Clock, HistoryRepository, ItemID, LogEntry, ProfileRepository, ProgramRepository, Service,
    SessionID, find_last, progress_hint,
};
use atl_storage::{Storage, file::FileStore, record};
use chrono::Local;
use clap::Parser;
use log::{debug, info};

use cli::{Cli, Command, LogArgs};

mod cli;

fn setup_logging(level: Option<log::LevelFilter>) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn);
    builder.parse_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn data_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(dirs::data_local_dir()
            .context("failed to determine the local data directory, use --data-dir")?
            .join("atl")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let data_dir = data_dir(cli.data_dir)?;
    info!("using data directory {}", data_dir.display());

    let service = Service::new(Storage::new(FileStore::new(data_dir)));
    run(&service, cli.command, &mut std::io::stdout().lock())
}

fn run<R, C>(service: &Service<R, C>, command: Command, out: &mut impl Write) -> Result<()>
where
    R: ProfileRepository + ProgramRepository + HistoryRepository,
    C: Clock,
{
    debug!("running {command:?}");
    match command {
        Command::Generate { profile } => {
            let profile = profile.apply(service.get_profile()?)?;
            service.set_profile(&profile)?;
            let program = service.generate_program(&profile)?;
            print_json(out, &record::Program::from(&program))
        }
        Command::Show => {
            let program = service
                .get_program()?
                .context("no program stored, run `atl generate` first")?;
            print_json(out, &record::Program::from(&program))
        }
        Command::Next => {
            let Some(session) = service.next_session()? else {
                bail!("no program stored, run `atl generate` first");
            };
            let entries = service.get_log_entries()?;
            writeln!(out, "{} ({})", session.label, session.id)?;
            for item in &session.items {
                match find_last(&entries, &session.id, &item.id) {
                    Some(last) => {
                        writeln!(out, "  {} {} (last: {})", item.id, item.name, last.result)?;
                    }
                    None => writeln!(out, "  {} {}", item.id, item.name)?,
                }
            }
            Ok(())
        }
        Command::Log(args) => log_result(service, args, out),
        Command::Profile { profile, save } => {
            let profile = profile.apply(service.get_profile()?)?;
            if save {
                service.set_profile(&profile)?;
            }
            print_json(out, &record::Profile::from(&profile))
        }
    }
}

fn log_result<R, C>(service: &Service<R, C>, args: LogArgs, out: &mut impl Write) -> Result<()>
where
    R: ProfileRepository + ProgramRepository + HistoryRepository,
    C: Clock,
{
    let program = service
        .get_program()?
        .context("no program stored, run `atl generate` first")?;
    let session_id = SessionID::from(args.session.clone());
    let session = program
        .session(&session_id)
        .with_context(|| format!("unknown session {session_id}"))?;
    let item_id = ItemID::from(args.item.clone());
    let item = session
        .item(&item_id)
        .with_context(|| format!("unknown item {item_id} in session {session_id}"))?;

    let entries = service.get_log_entries()?;
    let result = args.result(item)?;
    let hint = progress_hint(
        item,
        find_last(&entries, &session.id, &item.id),
        args.clean,
        result.reps(),
    );

    let timestamp = service.clock().now();
    service.add_log_entry(LogEntry {
        timestamp,
        date: timestamp.with_timezone(&Local).date_naive(),
        session_id: session.id.clone(),
        session_label: session.label.clone(),
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        result: result.clone(),
        clean: args.clean,
        notes: args.notes,
    })?;

    writeln!(out, "{}: {result}", item.name)?;
    writeln!(out, "{hint}")?;
    Ok(())
}

fn print_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
