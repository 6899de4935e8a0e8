use anyhow::Context;
use clap::Parser;
use sb_core::{SummaryEngine, DEFAULT_RATIO};
use sb_inference::Config;
use sb_web::AppState;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Myanmar/English text summarization service", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, default_value = "dummy", help = "Summarization backend. Available models: dummy (default), huggingface, ollama")]
    model: String,
    /// Model id or endpoint URL for the selected backend
    #[arg(long, global = true)]
    model_url: Option<String>,
    /// Bearer token sent to the inference backend
    #[arg(long, global = true)]
    api_key: Option<String>,
    /// Per-request timeout for network backends, in seconds
    #[arg(long, global = true, default_value_t = 60)]
    timeout_secs: u64,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Summarize a single text and print the result as JSON
    Summarize {
        text: String,
        #[arg(long, default_value_t = DEFAULT_RATIO, allow_negative_numbers = true)]
        ratio: f64,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sb_cli=debug,sb_core=debug,sb_inference=debug,sb_web=debug,tower_http=debug")
    } else {
        EnvFilter::new("sb_cli=info,sb_core=info,sb_inference=info,sb_web=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn build_engine(cli: &Cli) -> anyhow::Result<SummaryEngine> {
    let config = Config {
        model_name: Some(cli.model.clone()),
        model_url: cli.model_url.clone(),
        api_key: cli.api_key.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let model = sb_inference::create_model(Some(config))
        .await
        .context("failed to initialize summarization model")?;
    info!("🧠 Summarization model initialized (using {})", model.name());
    Ok(SummaryEngine::new(model))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let engine = build_engine(&cli).await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let app = sb_web::create_app(AppState::new(engine));
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("🚀 Summary API listening on http://{}", listener.local_addr()?);
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Summarize { text, ratio } => {
            let result = engine.summarize(&text, ratio).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["sb", "serve"]).unwrap();
        assert_eq!(cli.model, "dummy");
        assert_eq!(cli.timeout_secs, 60);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_summarize_args() {
        let cli = Cli::try_parse_from([
            "sb", "summarize", "some text", "--ratio", "0.5", "--model", "huggingface",
        ])
        .unwrap();
        assert_eq!(cli.model, "huggingface");
        match cli.command {
            Commands::Summarize { text, ratio } => {
                assert_eq!(text, "some text");
                assert_eq!(ratio, 0.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_build_engine_with_default_model() {
        let cli = Cli::try_parse_from(["sb", "summarize", "x"]).unwrap();
        let engine = build_engine(&cli).await.unwrap();
        assert_eq!(engine.model_name(), "Dummy");
    }
}
