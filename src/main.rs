//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "A personal portfolio site: live server and static export", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post file
    New {
        /// Title of the new post
        title: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes and regenerate
        #[arg(short, long)]
        watch: bool,
    },

    /// Start the portfolio server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the output folder
    Clean,

    /// List site content (posts, orphans)
    List {
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = folio_rs::Site::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            site.new_post(&title)?;
        }

        Commands::Generate { watch } => {
            let site = folio_rs::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            folio_rs::commands::generate::run(&site)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                folio_rs::commands::generate::watch(&site).await?;
            }
        }

        Commands::Server { port, ip } => {
            let site = folio_rs::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = folio_rs::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = folio_rs::Site::new(&base_dir)?;
            folio_rs::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
