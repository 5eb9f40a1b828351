use clap::Parser;
use paperrank::{build_service, AlignmentPolicy, RestApi, ServiceConfig};
use paperrank_core::{DEFAULT_SCORING_ENDPOINT, DEFAULT_SEARCH_ENDPOINT};
use std::sync::Arc;
use tracing::{error, info, warn, Level};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

/// Rank arXiv papers by similarity to a reference abstract
#[derive(Parser, Debug)]
#[command(name = "paperrank")]
#[command(about = "Rank arXiv papers by similarity to a reference abstract", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "PAPERRANK_HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, env = "PAPERRANK_HTTP_PORT", default_value_t = 8000)]
    http_port: u16,

    /// arXiv query endpoint
    #[arg(long, env = "PAPERRANK_SEARCH_ENDPOINT", default_value = DEFAULT_SEARCH_ENDPOINT)]
    search_endpoint: String,

    /// Sentence-similarity model endpoint
    #[arg(long, env = "PAPERRANK_SCORING_ENDPOINT", default_value = DEFAULT_SCORING_ENDPOINT)]
    scoring_endpoint: String,

    /// Bearer token for the similarity service
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Score/candidate count mismatch handling: truncate or strict
    #[arg(long, env = "PAPERRANK_ALIGNMENT", default_value_t = AlignmentPolicy::Truncate)]
    alignment: AlignmentPolicy,

    /// Log level
    #[arg(long, env = "PAPERRANK_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            search_endpoint: self.search_endpoint.clone(),
            scoring_endpoint: self.scoring_endpoint.clone(),
            api_token: self.api_token.clone(),
            alignment: self.alignment,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish()
        .try_init()?;

    let config = args.service_config();
    info!("Starting PaperRank v{}", env!("CARGO_PKG_VERSION"));
    info!("Search endpoint: {}", config.search_endpoint);
    info!("Scoring endpoint: {}", config.scoring_endpoint);
    info!("Alignment policy: {}", config.alignment);
    if config.api_token.is_none() {
        warn!("HF_API_TOKEN is not set; similarity requests will be sent unauthenticated");
    }

    let service = Arc::new(build_service(&config));

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(service, &host, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("PaperRank started successfully");
    info!("HTTP API: http://{}:{}/similarity/", args.host, args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
