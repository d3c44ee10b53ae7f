//! Travel Companion API server.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use travel_companion::adapters::ai::{
    AssistantIds, CompletionStructuredGenerator, OpenAIAssistantsClient, OpenAIConfig,
    OpenAIProvider, PollPolicy, ThreadRunStructuredGenerator,
};
use travel_companion::adapters::{api_router, InMemoryTravelStore, TravelAppState};
use travel_companion::application::handlers::chat::ChatSettings;
use travel_companion::application::handlers::currency::RefreshExchangeRatesHandler;
use travel_companion::config::{AiConfig, AppConfig, GenerationStrategy, ValidationError};
use travel_companion::domain::foundation::UserId;
use travel_companion::ports::{AIProvider, StructuredGenerator, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let openai = openai_config(&config.ai)?;
    let provider: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(openai.clone())?);
    let generator = structured_generator(&config.ai, openai, provider.clone())?;

    let store = InMemoryTravelStore::seeded();
    if let Some(user) = UserRepository::find(&store, UserId::DEMO).await? {
        info!(user = %user.username, "demo user ready");
    }

    let state = TravelAppState::with_store(store, provider.clone(), generator)
        .with_chat_settings(ChatSettings {
            max_tokens: config.ai.chat_max_tokens,
            temperature: config.ai.temperature,
        });

    if let Some(interval) = config.rates.refresh_interval() {
        spawn_rate_refresh(RefreshExchangeRatesHandler::new(state.exchange_rates.clone()), interval);
    }

    let app = api_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    let info = provider.provider_info();
    info!(
        addr = %listener.local_addr()?,
        provider = %info.name,
        model = %info.model,
        strategy = ?config.ai.strategy,
        "travel companion API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

fn openai_config(ai: &AiConfig) -> Result<OpenAIConfig, ValidationError> {
    let key = ai
        .openai_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;

    Ok(OpenAIConfig::from_secret(key)
        .with_model(ai.model.clone())
        .with_base_url(ai.base_url.clone())
        .with_timeout(ai.timeout()))
}

fn structured_generator(
    ai: &AiConfig,
    openai: OpenAIConfig,
    provider: Arc<dyn AIProvider>,
) -> Result<Arc<dyn StructuredGenerator>, Box<dyn Error>> {
    match ai.strategy {
        GenerationStrategy::Completion => Ok(Arc::new(CompletionStructuredGenerator::new(
            provider,
            ai.temperature,
        ))),
        GenerationStrategy::Assistant => {
            let assistants = AssistantIds {
                itinerary: ai
                    .itinerary_assistant_id
                    .clone()
                    .ok_or(ValidationError::MissingRequired("ITINERARY_ASSISTANT_ID"))?,
                checklist: ai
                    .checklist_assistant_id
                    .clone()
                    .ok_or(ValidationError::MissingRequired("CHECKLIST_ASSISTANT_ID"))?,
            };
            let threads = Arc::new(OpenAIAssistantsClient::new(openai)?);
            let poll = PollPolicy::new(ai.poll_interval(), ai.max_poll_wait());
            Ok(Arc::new(ThreadRunStructuredGenerator::new(threads, assistants, poll)))
        }
    }
}

fn spawn_rate_refresh(handler: RefreshExchangeRatesHandler, interval: Duration) {
    info!(every_secs = interval.as_secs(), "exchange rate refresh enabled");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; the store is already seeded.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = handler.handle().await {
                tracing::warn!(error = %e, "exchange rate refresh failed");
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
