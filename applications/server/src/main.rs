/// Shelf Server - album import admin service
use clap::{Parser, Subcommand};
use shelf_core::StorageContext;
use shelf_importer::AlbumImporter;
use shelf_providers::ProviderRegistry;
use shelf_server::{config::ServerConfig, create_router, services::SessionService, state::AppState};
use shelf_storage::Database;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf-server")]
#[command(about = "Import Apple Music and Deezer albums into a local shelf", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SHELF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Import one album URL without going through HTTP
    Import {
        /// Apple Music, iTunes or Deezer album URL
        url: String,
    },
    /// List stored albums, newest first
    ListAlbums {
        /// Maximum number of albums to show
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Issue a session token for the admin pages
    IssueSession {
        /// Email the session is issued for
        #[arg(short, long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_server=info,shelf_importer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Import { url } => import(&config, &url).await?,
        Commands::ListAlbums { limit } => list_albums(&config, limit).await?,
        Commands::IssueSession { email } => issue_session(&config, &email)?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Shelf Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = Arc::new(open_database(&config).await?);
    tracing::info!("Database connected");

    let providers = Arc::new(ProviderRegistry::new(
        config.providers.to_provider_config(),
    )?);

    let sessions = Arc::new(session_service(&config));
    tracing::info!("Session service initialized");

    let app = create_router(AppState::new(db, sessions, providers));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn import(config: &ServerConfig, url: &str) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let providers = ProviderRegistry::new(config.providers.to_provider_config())?;

    let album = AlbumImporter::new(&db, &providers).import(url).await?;
    println!("{}", serde_json::to_string_pretty(&album)?);

    Ok(())
}

async fn list_albums(config: &ServerConfig, limit: Option<u32>) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let albums = db.list_albums(limit).await?;

    if albums.is_empty() {
        println!("No albums yet.");
        return Ok(());
    }

    println!("Albums:");
    for summary in albums {
        let album = summary.album;
        println!(
            "  {} - {} ({} songs) [{}]",
            album.artist, album.title, summary.song_count, album.id
        );
    }

    Ok(())
}

fn issue_session(config: &ServerConfig, email: &str) -> anyhow::Result<()> {
    config.validate()?;

    let sessions = session_service(config);
    if !sessions.is_allowed(email) {
        tracing::warn!(
            "{} is not the allowed email, the session will be redirected away from /secret",
            email
        );
    }

    println!("{}", sessions.create_session_token(email)?);
    Ok(())
}

async fn open_database(config: &ServerConfig) -> anyhow::Result<Database> {
    if let Some(parent) = config.database_file().as_deref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    Ok(shelf_storage::open(&config.storage.database_url).await?)
}

fn session_service(config: &ServerConfig) -> SessionService {
    SessionService::new(
        config.auth.session_secret.clone(),
        config.auth.session_expiration_hours,
        config.auth.allowed_email.clone(),
        config.auth.sign_in_path.clone(),
    )
}
