mod chat;
mod cli;
mod picker;
mod render;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use talkmate_ai::{GeminiClient, GeminiConfig, ResponseGateway, SessionStore};
use talkmate_common::TalkmateError;
use talkmate_config::{ApiConfig, TalkmateConfig};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `--log-level` wins, then `[logging] level`, then `talkmate=info`.
fn log_directive(flag: Option<&str>, config: Option<&TalkmateConfig>) -> String {
    match (flag, config) {
        (Some(flag), _) => flag.to_string(),
        (None, Some(config)) => format!("talkmate={}", config.logging.level.as_directive()),
        (None, None) => "talkmate=info".to_string(),
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the subscriber before anything logs. The filter is reloadable so
/// the configured level can take over once the config file is read.
fn init_logging(args: &cli::Args) -> FilterHandle {
    let directive = log_directive(args.log_level.as_deref(), None);
    let (filter, handle) = reload::Layer::new(env_filter(&directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn gemini_config(api: &ApiConfig, api_key: String, model: Option<&str>) -> GeminiConfig {
    let config = GeminiConfig::new(api_key)
        .with_api_base(api.api_base.clone())
        .with_text_model(api.text_model.clone())
        .with_vision_model(api.vision_model.clone())
        .with_max_tokens(api.max_tokens)
        .with_temperature(api.temperature)
        .with_timeouts(
            Duration::from_secs(api.connect_timeout_secs.into()),
            Duration::from_secs(api.request_timeout_secs.into()),
        );
    match model {
        Some(model) => config.with_model(model),
        None => config,
    }
}

async fn run(args: cli::Args, config: TalkmateConfig) -> Result<(), TalkmateError> {
    let api_key = config.api.resolved_api_key().ok_or_else(|| {
        TalkmateError::Ai(format!(
            "no API key configured. Set {} or [api] api_key in the config file.",
            talkmate_config::schema::API_KEY_ENV
        ))
    })?;

    let gemini = gemini_config(&config.api, api_key, args.model.as_deref());
    tracing::info!(
        text_model = %gemini.text_model,
        vision_model = %gemini.vision_model,
        "Gemini client configured"
    );
    let client = GeminiClient::new(gemini).map_err(|e| TalkmateError::Ai(e.to_string()))?;
    let store = SessionStore::new(ResponseGateway::new(Arc::new(client)));

    let image = args
        .image
        .as_deref()
        .map(picker::load_image)
        .transpose()?;

    match args.once {
        Some(prompt) => {
            let reply = chat::run_once(&store, prompt, image).await?;
            println!("{reply}");
            Ok(())
        }
        None => chat::run_interactive(store, image).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Environment from .env, if present
    let _ = dotenvy::dotenv();

    let args = cli::parse();

    let logging = init_logging(&args);
    tracing::info!("TalkMate v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match talkmate_config::load_config_from(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            TalkmateConfig::default()
        }
    };

    if args.log_level.is_none() {
        let directive = log_directive(None, Some(&config));
        if let Err(e) = logging.reload(env_filter(&directive)) {
            tracing::warn!("could not apply configured log level: {e}");
        }
    }
    tracing::debug!(config = %talkmate_config::config_to_json(&config), "effective config");

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("talkmate: {e}");
            ExitCode::FAILURE
        }
    }
}
