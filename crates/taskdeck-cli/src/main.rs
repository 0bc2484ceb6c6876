//! # taskdeck-cli
//!
//! Command-line driver for the taskdeck client. Wires together settings,
//! logging, the session store, the API client, and the task collection
//! manager, and exposes the operations as subcommands.

#![deny(unsafe_code)]

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use taskdeck_api::{ApiClient, ApiConfig};
use taskdeck_auth::SessionStore;
use taskdeck_core::Task;
use taskdeck_forms::{LoginForm, RegisterForm};
use taskdeck_settings::load_settings;
use taskdeck_tasks::{TaskError, TaskFilter, TaskManager, TaskSort};

/// Taskdeck task management client.
#[derive(Parser, Debug)]
#[command(name = "taskdeck", about = "Task management client")]
struct Cli {
    /// Override the API base URL from settings.
    #[arg(long)]
    base_url: Option<String>,

    /// Minimum log level when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new account.
    Register { username: String, password: String },
    /// Log in and store the session token.
    Login { username: String, password: String },
    /// Clear the stored session token.
    Logout,
    /// List tasks.
    List {
        /// Filter: all, completed, or notCompleted.
        #[arg(long, default_value = "all")]
        filter: String,
        /// Sort: date (most recent first) or title.
        #[arg(long, default_value = "date")]
        sort: String,
    },
    /// Create a task.
    Add { title: String, description: String },
    /// Edit a task's title and description.
    Edit {
        id: String,
        title: String,
        description: String,
    },
    /// Delete a task.
    Rm { id: String },
    /// Toggle a task's completion state.
    Toggle { id: String },
    /// Subtask operations.
    Subtask {
        #[command(subcommand)]
        command: SubtaskCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SubtaskCommand {
    /// Add a subtask to a task.
    Add { task_id: String, title: String },
    /// Toggle a subtask's completion state.
    Toggle { task_id: String, subtask_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    taskdeck_core::init_subscriber(&cli.log_level);

    let mut settings = load_settings().context("failed to load settings")?;
    if let Some(url) = cli.base_url {
        settings.api.base_url = url;
    }
    tracing::debug!(base_url = %settings.api.base_url, "resolved settings");

    let session = Arc::new(SessionStore::new(Path::new(&settings.data_dir)));
    let config = ApiConfig {
        base_url: settings.api.base_url.clone(),
        timeout_ms: settings.api.timeout_ms,
    };
    let api = ApiClient::new(config, session.clone()).context("failed to build API client")?;

    match cli.command {
        Command::Register { username, password } => {
            let mut form = RegisterForm::new();
            form.username = username;
            form.password = password;
            if form.submit(&api).await.is_err() {
                bail!(form.error.unwrap_or_else(|| "Error registering user".to_string()));
            }
            println!(
                "{}",
                form.success
                    .unwrap_or_else(|| "User registered successfully".to_string())
            );
        }

        Command::Login { username, password } => {
            let mut form = LoginForm::new();
            form.username = username;
            form.password = password;
            if form.submit(&api, &session).await.is_err() {
                bail!(form.error.unwrap_or_else(|| "Invalid credentials".to_string()));
            }
            println!("Logged in");
        }

        Command::Logout => {
            session.clear().context("failed to clear session")?;
            println!("Logged out");
        }

        Command::List { filter, sort } => {
            let filter: TaskFilter = filter.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let sort: TaskSort = sort.parse().map_err(|e: String| anyhow::anyhow!(e))?;

            let mut manager = TaskManager::new(api, session);
            manager.load().await?;
            manager.set_filter(filter);
            manager.set_sort(sort);
            for task in manager.visible() {
                println!("{}", format_task(task));
            }
        }

        Command::Add { title, description } => {
            let mut manager = TaskManager::new(api, session);
            manager.load().await?;
            if let Err(e) = manager.create(&title, &description).await {
                return Err(field_error_report(&manager, e));
            }
            println!("Task added");
        }

        Command::Edit {
            id,
            title,
            description,
        } => {
            let mut manager = TaskManager::new(api, session);
            manager.load().await?;
            manager.start_edit(&id)?;
            if let Err(e) = manager.update(&id, &title, &description).await {
                return Err(field_error_report(&manager, e));
            }
            println!("Task updated");
        }

        Command::Rm { id } => {
            let mut manager = TaskManager::new(api, session);
            manager.load().await?;
            manager.remove(&id).await?;
            println!("Task deleted");
        }

        Command::Toggle { id } => {
            let mut manager = TaskManager::new(api, session);
            manager.load().await?;
            manager.toggle_completion(&id).await?;
            let state = manager.get(&id).is_some_and(|t| t.completed);
            println!("Task marked {}", if state { "completed" } else { "open" });
        }

        Command::Subtask { command } => {
            let mut manager = TaskManager::new(api, session);
            manager.load().await?;
            match command {
                SubtaskCommand::Add { task_id, title } => {
                    manager.add_subtask(&task_id, &title).await?;
                    println!("Subtask added");
                }
                SubtaskCommand::Toggle {
                    task_id,
                    subtask_id,
                } => {
                    manager
                        .toggle_subtask_completion(&task_id, &subtask_id)
                        .await?;
                    println!("Subtask toggled");
                }
            }
        }
    }

    Ok(())
}

/// Turn a create/update failure into a CLI error, preferring the
/// field-level messages when validation was what failed.
fn field_error_report(manager: &TaskManager, err: TaskError) -> anyhow::Error {
    if let TaskError::Validation(_) = err {
        let errors = manager.field_errors();
        let messages: Vec<String> = [errors.title.clone(), errors.description.clone()]
            .into_iter()
            .flatten()
            .collect();
        if !messages.is_empty() {
            return anyhow::anyhow!(messages.join("; "));
        }
    }
    err.into()
}

/// One-line rendering of a task and its subtasks.
fn format_task(task: &Task) -> String {
    let mut line = format!(
        "[{}] {}  {}: {}",
        if task.completed { "x" } else { " " },
        task.id,
        task.title,
        task.description
    );
    for subtask in &task.subtasks {
        line.push_str(&format!(
            "\n    [{}] {}  {}",
            if subtask.completed { "x" } else { " " },
            subtask.id,
            subtask.title
        ));
    }
    line
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
