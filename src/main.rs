use std::time::Duration;

use clap::Parser;
use tracing::info;

use token_keeper::token_source::MaintainedTokenSource;
use token_keeper::utils::logging::{init_logging, LogFormat, LogLevel};

/// Keeps a client-credentials access token fresh and logs its state.
#[derive(Debug, Parser)]
#[command(name = "token-keeper", version, about)]
struct Args {
    #[arg(long, env = "TOKEN_KEEPER_CLIENT_ID")]
    client_id: String,

    #[arg(long, env = "TOKEN_KEEPER_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Issuer base URL, e.g. https://auth.example.com/realms/main
    #[arg(long, env = "TOKEN_KEEPER_ISSUER_URL")]
    issuer_url: String,

    /// Seconds between token state reports
    #[arg(long, default_value_t = 30)]
    report_interval_secs: u64,

    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,

    #[arg(long, env = "LOG_FORMAT", value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(
        args.log_level.unwrap_or(LogLevel::INFO),
        args.log_format.unwrap_or(LogFormat::Compact),
    );

    let source =
        MaintainedTokenSource::new(args.client_id, args.client_secret, &args.issuer_url).await?;
    info!("token source running against '{}'", args.issuer_url);

    loop {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(args.report_interval_secs)) => {
                let token = source.token().await;
                if token.is_empty() {
                    info!("no token fetched yet");
                } else {
                    info!(
                        "token present, expires_at: {}, expired: {}",
                        token.expires_at,
                        token.is_expired()
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                source.shutdown().await;
                return Ok(());
            }
        }
    }
}
