use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "unimanage", version, about = "UniManage university dashboard")]
struct Cli {
    /// Configuration file. Defaults to ./unimanage.yaml when present.
    #[arg(long, short, global = true, env = "UNIMANAGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web dashboard.
    Serve {
        /// Override dashboard.host
        #[arg(long)]
        host: Option<String>,

        /// Override dashboard.port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Sign in and remember the session in the session directory.
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "UNIMANAGE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session.
    Logout,

    /// Show the signed-in user.
    Whoami,

    /// Print the navigation, stats, quick actions and activity a role sees.
    Overview {
        /// Role name (admin, faculty, student, department_head). Defaults to
        /// the signed-in user's role.
        #[arg(long)]
        role: Option<String>,
    },

    /// List students, optionally filtered.
    Students {
        /// Case-insensitive match on name, id, email or department
        #[arg(long, short, default_value = "")]
        search: String,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List courses, optionally filtered.
    Courses {
        /// Case-insensitive match on name, id, instructor or department
        #[arg(long, short, default_value = "")]
        search: String,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Serve { host, port } => commands::serve::run(config, host, port).await?,
        Command::Login { email, password } => commands::session::login(&config, &email, &password).await?,
        Command::Logout => commands::session::logout(&config)?,
        Command::Whoami => commands::session::whoami(&config)?,
        Command::Overview { role } => commands::records::overview(&config, role.as_deref())?,
        Command::Students { search, json } => commands::records::students(&search, json)?,
        Command::Courses { search, json } => commands::records::courses(&search, json)?,
    }

    Ok(())
}
