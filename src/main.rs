use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use taskdock::{
    cli, config, error,
    types::{Priority, TaskStatusFilter},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in, sign up or sign out
    Auth(AuthOptions),

    /// Handle tasks
    Tasks(TasksOptions),

    /// Inspect configuration
    Config(ConfigOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AuthSubcommand {
    /// Sign in with email and password
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
        #[clap(long)]
        name: String,
    },

    /// End the current session
    Logout,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle tasks",
    args_conflicts_with_subcommands = true // disallow mixing list flags with subcommands
)]
pub struct TasksOptions {
    /// Only show tasks with this status
    #[clap(long, value_enum)]
    pub status: Option<TaskStatusFilter>,

    /// Maximum number of tasks to fetch
    #[clap(long)]
    pub limit: Option<u32>,

    /// Number of tasks to skip
    #[clap(long)]
    pub offset: Option<u32>,

    #[command(subcommand)]
    pub command: Option<TasksSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TasksSubcommand {
    /// Create a task
    Add(TaskFields),

    /// Show a single task
    Show { id: String },

    /// Change fields of a task
    Update {
        id: String,

        #[command(flatten)]
        fields: TaskUpdateFields,
    },

    /// Delete a task
    Delete { id: String },

    /// Flip a task between open and done
    Toggle { id: String },
}

#[derive(Parser, Debug, Clone)]
pub struct TaskFields {
    /// Task title
    #[clap(long)]
    pub title: String,

    #[clap(long)]
    pub description: Option<String>,

    /// Due date (YYYY-MM-DD or RFC 3339)
    #[clap(long)]
    pub due: Option<String>,

    #[clap(long, value_enum)]
    pub priority: Option<Priority>,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskUpdateFields {
    #[clap(long)]
    pub title: Option<String>,

    #[clap(long)]
    pub description: Option<String>,

    /// Set the completion flag explicitly
    #[clap(long)]
    pub completed: Option<bool>,

    /// Due date (YYYY-MM-DD or RFC 3339)
    #[clap(long)]
    pub due: Option<String>,

    #[clap(long, value_enum)]
    pub priority: Option<Priority>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigOptions {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Validate server settings
    Check {
        /// Also connect to the database
        #[clap(long)]
        ping: bool,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => match opt.command {
            AuthSubcommand::Login { email, password } => cli::login(email, password).await,
            AuthSubcommand::Signup {
                email,
                password,
                name,
            } => cli::signup(email, password, name).await,
            AuthSubcommand::Logout => cli::logout().await,
        },

        Command::Tasks(opt) => match opt.command {
            Some(TasksSubcommand::Add(t)) => {
                cli::add_task(t.title, t.description, t.due, t.priority).await
            }
            Some(TasksSubcommand::Show { id }) => cli::show_task(id).await,
            Some(TasksSubcommand::Update { id, fields }) => {
                cli::update_task(
                    id,
                    fields.title,
                    fields.description,
                    fields.completed,
                    fields.due,
                    fields.priority,
                )
                .await
            }
            Some(TasksSubcommand::Delete { id }) => cli::delete_task(id).await,
            Some(TasksSubcommand::Toggle { id }) => cli::toggle_task(id).await,
            None => cli::list_tasks(opt.status, opt.limit, opt.offset).await,
        },

        Command::Config(opt) => match opt.command {
            ConfigSubcommand::Check { ping } => cli::check_config(ping).await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
