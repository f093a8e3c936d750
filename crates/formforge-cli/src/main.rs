//! formforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "formforge", version, about = "Form builder, runner, and grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and example form draft
    Init,

    /// Create a form from a draft JSON file
    Create {
        /// Path to a form draft JSON file
        #[arg(long)]
        form: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List stored forms
    List {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show one form as JSON
    Show {
        /// Form id
        #[arg(long)]
        id: Uuid,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Apply a shallow-merge patch to a stored form
    Update {
        /// Form id
        #[arg(long)]
        id: Uuid,

        /// Path to a patch JSON file
        #[arg(long)]
        patch: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete a form (responses are kept)
    Delete {
        /// Form id
        #[arg(long)]
        id: Uuid,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Submit a response against a form
    Submit {
        /// Form id
        #[arg(long)]
        form: Uuid,

        /// Path to an answers JSON file (question id -> answer)
        #[arg(long)]
        answers: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List submitted responses
    Responses {
        /// Only responses for this form
        #[arg(long)]
        form: Option<Uuid>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a form draft file or a stored form
    Validate {
        /// Path to a draft JSON file, or the id of a stored form
        #[arg(long)]
        form: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a response against its form
    Grade {
        /// Form id
        #[arg(long)]
        form: Uuid,

        /// Response id
        #[arg(long)]
        response: Uuid,

        /// Directory to save the report JSON into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("formforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Create { form, config } => commands::create::execute(form, config).await,
        Commands::List { config } => commands::list::execute(config).await,
        Commands::Show { id, config } => commands::show::execute(id, config).await,
        Commands::Update { id, patch, config } => {
            commands::update::execute(id, patch, config).await
        }
        Commands::Delete { id, config } => commands::delete::execute(id, config).await,
        Commands::Submit {
            form,
            answers,
            config,
        } => commands::submit::execute(form, answers, config).await,
        Commands::Responses { form, config } => commands::responses::execute(form, config).await,
        Commands::Validate { form, config } => commands::validate::execute(form, config).await,
        Commands::Grade {
            form,
            response,
            output,
            format,
            config,
        } => commands::grade::execute(form, response, output, format, config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
