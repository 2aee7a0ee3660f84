use std::sync::Arc;

use article_desk::config::{ConfigError, DeskConfig};
use article_desk::console::{self, ConsoleCommand, ConsoleError};
use article_desk::net::api::{ApiError, ArticleService, HttpArticleService};
use article_desk::session::Session;
use article_desk::state::collection::CollectionStore;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("article store error: {0}")]
    Api(#[from] ApiError),
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "article-desk", about = "Manage articles held by a remote /posts store")]
struct Cli {
    /// Base URL of the article store.
    #[arg(long, env = "ARTICLES_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive console (default).
    Console,
    /// Print the articles matching a title filter and exit.
    List {
        #[arg(long, default_value = "")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "article_desk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = DeskConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    let service: Arc<dyn ArticleService> = Arc::new(HttpArticleService::new(&config)?);
    tracing::info!(base_url = %config.base_url, "article desk starting");

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => run_console(service).await,
        Command::List { query } => run_list(service.as_ref(), query).await,
    }
}

async fn run_list(service: &dyn ArticleService, query: String) -> Result<(), CliError> {
    let mut collection = CollectionStore::new();
    let ticket = collection.set_query(query);
    let articles = service.list(collection.query()).await?;
    collection.apply_listed(ticket, articles);
    print!("{}", console::render_table(&collection));
    Ok(())
}

async fn run_console(service: Arc<dyn ArticleService>) -> Result<(), CliError> {
    let mut session = Session::mount(service);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("type 'help' for commands");

    loop {
        tokio::select! {
            Some(completion) = session.next_completion(), if session.in_flight() > 0 => {
                if session.complete(completion) {
                    print!("{}", console::render(session.desk()));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match console::parse_line(&line, session.desk().collection()) {
                    Ok(ConsoleCommand::Quit) => break,
                    Ok(ConsoleCommand::Help) => println!("{}", console::HELP),
                    Ok(ConsoleCommand::Show) => print!("{}", console::render(session.desk())),
                    Ok(ConsoleCommand::Intent(intent)) => match session.apply(intent) {
                        Ok(()) => print!("{}", console::render(session.desk())),
                        Err(e) => println!("! {e}"),
                    },
                    Err(ConsoleError::Empty) => {}
                    Err(e) => println!("! {e}"),
                }
            }
        }
    }

    tracing::info!(in_flight = session.in_flight(), "article desk closing");
    Ok(())
}
