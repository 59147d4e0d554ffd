use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focusgate-cli", version, about = "Focusgate CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Focus configuration
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Session timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Classifier credential management
    Key {
        #[command(subcommand)]
        action: commands::key::KeyAction,
    },
    /// Classify a single title against the configured task
    Classify(commands::classify::ClassifyArgs),
    /// Run an evaluation cycle over candidate titles
    Evaluate(commands::evaluate::EvaluateArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Focus { action } => commands::focus::run(action).await,
        Commands::Timer { action } => commands::timer::run(action).await,
        Commands::Key { action } => commands::key::run(action).await,
        Commands::Classify(args) => commands::classify::run(args).await,
        Commands::Evaluate(args) => commands::evaluate::run(args).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
