//! Interactive ChronoTasks driver.
//!
//! # Responsibility
//! - Provide a line-oriented front end over `chronotasks_core`.
//! - Render notifications drained from the store after every command.

use anyhow::{bail, Context, Result};
use chronotasks_core::{
    default_log_level, flush_logs, init_logging, CoreConfig, Dimension, LogSink, QueueSink, SystemClock, Task,
    TaskStore, TimeFilter, DIMENSIONS,
};
use clap::Parser;
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "chronotasks", version, about = "The Interdimensional Task Manager")]
struct Args {
    /// TOML file with core settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; stderr when omitted.
    #[arg(long)]
    log_dir: Option<String>,
    /// Start with the built-in demo tasks.
    #[arg(long)]
    demo: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(String),
    Done(usize),
    Remove(usize),
    Recur(usize),
    Dimension(Dimension),
    Filter(TimeFilter),
    List,
    Dimensions,
    Dismiss,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb {
        "add" => Command::Add(rest.to_string()),
        "done" => Command::Done(parse_position(rest)?),
        "rm" => Command::Remove(parse_position(rest)?),
        "recur" => Command::Recur(parse_position(rest)?),
        "dim" => Command::Dimension(rest.parse()?),
        "filter" => Command::Filter(rest.parse()?),
        "list" | "ls" => Command::List,
        "dims" => Command::Dimensions,
        "dismiss" => Command::Dismiss,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}`; try `help`"),
    };
    Ok(command)
}

fn parse_position(value: &str) -> Result<usize> {
    let position: usize = value
        .parse()
        .with_context(|| format!("expected a list position, got `{value}`"))?;
    if position == 0 {
        bail!("list positions start at 1");
    }
    Ok(position)
}

fn load_config(args: &Args) -> Result<CoreConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config `{}`", path.display()))?;
            CoreConfig::from_toml_str(&text)?
        }
        None => CoreConfig::default(),
    };
    if args.demo {
        config.seed_demo_tasks = true;
    }
    Ok(config)
}

fn visible_task(store: &TaskStore, position: usize) -> Result<Task> {
    let visible = store.visible_tasks();
    match visible.get(position - 1) {
        Some(task) => Ok((*task).clone()),
        None => bail!("no task at position {position}; {} listed", visible.len()),
    }
}

fn print_list(out: &mut impl Write, store: &TaskStore) -> io::Result<()> {
    let view = store.view();
    let info = view.active_dimension.info();
    writeln!(out, "[{}] {}", info.name, view.time_filter.title())?;

    let visible = view.visible();
    if visible.is_empty() {
        writeln!(out, "  {}", view.time_filter.empty_message())?;
    }
    for (index, task) in visible.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        let due = task
            .due_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "No due date".to_string());
        let recurring = if task.recurring { " (recurring)" } else { "" };
        writeln!(
            out,
            "  {:>2}. [{mark}] {} - {due}{recurring}",
            index + 1,
            task.title
        )?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  add <title>        create a task in the active dimension")?;
    writeln!(out, "  done <n>           toggle completion of listed task n")?;
    writeln!(out, "  rm <n>             delete listed task n")?;
    writeln!(out, "  recur <n>          toggle recurring on listed task n")?;
    writeln!(out, "  dim <id>           travel to cyber|magic|void")?;
    writeln!(out, "  filter <name>      today|tomorrow|upcoming|archived")?;
    writeln!(out, "  list | dims | dismiss | help | quit")
}

/// Runs one command. Returns `false` when the session should end.
fn execute(out: &mut impl Write, store: &mut TaskStore, command: Command) -> Result<bool> {
    match command {
        Command::Add(title) => {
            let dimension = store.active_dimension();
            store.add_task(&title, dimension)?;
        }
        Command::Done(position) => {
            let task = visible_task(store, position)?;
            store.complete_task(task.id)?;
        }
        Command::Remove(position) => {
            let task = visible_task(store, position)?;
            store.delete_task(task.id)?;
        }
        Command::Recur(position) => {
            let task = visible_task(store, position)?;
            store.toggle_recurring(task.id)?;
        }
        Command::Dimension(target) => {
            if store.select_dimension(target) {
                writeln!(out, "opening portal to {}...", target.display_name())?;
                if let Some(wait) = store.transition_remaining() {
                    std::thread::sleep(wait);
                }
                store.poll_transition();
            } else {
                writeln!(out, "already in {}", store.active_dimension().display_name())?;
            }
        }
        Command::Filter(filter) => {
            store.set_time_filter(filter);
            print_list(out, store)?;
        }
        Command::List => print_list(out, store)?,
        Command::Dimensions => {
            for info in &DIMENSIONS {
                let marker = if info.id == store.active_dimension() {
                    "*"
                } else {
                    " "
                };
                writeln!(
                    out,
                    "{marker} {:<6} {:<15} {}",
                    info.id.as_str(),
                    info.name,
                    info.description
                )?;
            }
        }
        Command::Dismiss => store.dismiss_achievement(),
        Command::Help => print_help(out)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, args.log_dir.as_deref())?;

    let result = run(&args);
    if let Err(err) = &result {
        error!("event=cli_exit module=cli status=error error={err}");
    }
    flush_logs();
    result
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let queue = Arc::new(QueueSink::new());
    let mut store = TaskStore::with_config(SystemClock, &config);
    store.subscribe(Arc::new(LogSink));
    store.subscribe(queue.clone());
    info!(
        "event=cli_start module=cli status=ok tasks={} version={}",
        store.len(),
        chronotasks_core::core_version()
    );

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "ChronoTasks - type `help` for commands")?;
    print_list(&mut out, &store)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let keep_going = match parse_command(&line) {
            Ok(command) => match execute(&mut out, &mut store, command) {
                Ok(keep_going) => keep_going,
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    true
                }
            },
            Err(err) => {
                writeln!(out, "error: {err}")?;
                true
            }
        };

        for notification in queue.drain() {
            writeln!(out, "* {notification}")?;
        }
        if store.achievement().is_open() {
            writeln!(out, "* type `dismiss` to continue your journey")?;
        }
        if !keep_going {
            break;
        }
    }

    Ok(())
}
