//! # CLI Module
//!
//! This module provides the command-line interface layer for taskdock. It
//! implements all user-facing commands and coordinates between the API
//! client, the local session store and user interaction.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`login`] - Signs in with email and password and stores the session token
//! - [`signup`] - Registers a new account and stores the session token
//! - [`logout`] - Ends the session on the backend and removes the stored token
//!
//! ### Task Operations
//!
//! - [`list_tasks`] - Lists tasks with optional status filter and pagination
//! - [`add_task`] - Creates a task
//! - [`show_task`] - Prints a single task
//! - [`update_task`] - Changes some fields of a task
//! - [`delete_task`] - Deletes a task
//! - [`toggle_task`] - Flips a task between open and done
//!
//! ### Configuration
//!
//! - [`check_config`] - Validates the server settings, optionally pinging the
//!   database
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Client Layer (Task/Auth façade, dispatcher)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Failures the user has to act on end the process through the `error!`
//! macro; recoverable ones are reported with `warning!`.

mod auth;
mod config;
mod tasks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::login;
pub use auth::logout;
pub use auth::signup;
pub use config::check as check_config;
pub use tasks::add_task;
pub use tasks::delete_task;
pub use tasks::list_tasks;
pub use tasks::show_task;
pub use tasks::toggle_task;
pub use tasks::update_task;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
