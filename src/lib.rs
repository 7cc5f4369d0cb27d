//! Task management API client library
//!
//! This library provides the pieces behind the `taskdock` command-line tool: a
//! client for the task-management REST backend, the session token handling that
//! authenticates its requests, configuration loading and validation, and the
//! server-side auth route handler that fronts the authentication framework.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the auth routes and health checks
//! - `auth` - Auth framework seam and its configuration
//! - `cli` - Command-line interface implementations
//! - `client` - REST API client: dispatcher, token resolution, task/auth calls
//! - `config` - Configuration management and environment variables
//! - `db` - Process-wide database connection pool
//! - `errors` - Error types shared across the crate
//! - `management` - Local session storage
//! - `server` - Router assembly and the HTTP server entry point
//! - `types` - Wire and application data structures
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use taskdock::{client::ApiClient, config, types::ListTasksQuery};
//!
//! #[tokio::main]
//! async fn main() -> taskdock::Res<()> {
//!     config::load_env().await?;
//!     let client = ApiClient::from_env();
//!     let page = client.list_tasks(&ListTasksQuery::default()).await?;
//!     println!("{} tasks", page.total);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the command-line layer
/// using a boxed dynamic error trait object. Library modules return their
/// own typed errors from [`errors`], which convert into this alias with `?`.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Fetching tasks...");
/// info!("Found {} tasks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in as {}", email);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 after printing. Only used from the
/// command-line layer for failures the user has to act on.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("No session found, request is sent without a token");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
