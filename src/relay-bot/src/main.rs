//! thread-relay: Slack bot that answers mentions with Gemini.

use std::process::ExitCode;
use std::sync::Arc;

use relay_bot::{BotConfig, MentionHandler};
use relay_genai::GeminiClient;
use relay_slack::{SlackSocketBot, SlackWebClient};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set
    let dotenv = dotenvy::dotenv();

    setup_logging();

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let config = match BotConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let web = match SlackWebClient::new(config.slack.clone()) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create Slack client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web.auth_test().await {
        Ok(identity) => {
            info!(
                team = identity.team_id.as_deref().unwrap_or("unknown"),
                "Authenticated as {} ({})",
                identity.user,
                identity.user_id
            );
            if identity.user_id != config.bot_user_id {
                warn!(
                    "SLACK_BOT_USER_ID is {} but the bot token belongs to {}; replies will not be recognized as the bot's own",
                    config.bot_user_id, identity.user_id
                );
            }
        }
        Err(e) => {
            error!("Slack authentication failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let gemini = GeminiClient::new(config.gemini_api_key())
        .with_base_url(&config.gemini_api_base_url)
        .with_thinking_budget(config.thinking_budget);
    info!(
        model = %config.model,
        search_model = %config.search_model,
        context_window = config.context_window,
        "Using Gemini at {}",
        gemini.base_url()
    );

    let handler = MentionHandler::new(Arc::new(web.clone()), Arc::new(gemini), &config);
    let bot = Arc::new(SlackSocketBot::new(web, Arc::new(handler)));

    let signal_bot = bot.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_bot.shutdown();
    });

    info!("⚡️ Slack Gemini Bot is running!");

    if let Err(e) = bot.run().await {
        error!("Slack bot stopped: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Bot stopped");
    ExitCode::SUCCESS
}
