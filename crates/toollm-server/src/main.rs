//! toollm: HTTP backend for the ToolLM chat assistant.
//!
//! Accepts chat messages from the browser UI, runs them through the
//! model/web-search tool loop and returns the assistant's reply. Session
//! history lives in memory only.

mod routes;
mod state;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use toollm_ai::{
    ChatEngine, EngineSettings, GroqClient, GroqConfig, SessionCache, TavilyClient, TavilyConfig,
};
use toollm_common::ToolLmError;
use toollm_config::schema::LoggingConfig;
use toollm_config::ToolLmConfig;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "toollm", about = "Chat backend with web-search tool calling")]
struct Args {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding the config file.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding the config file and `PORT`.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), ToolLmError> {
    // Keys usually come from a local .env during development.
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    let mut config = toollm_config::load_config(args.config.as_deref())?;
    apply_cli_overrides(&mut config, &args);

    init_tracing(&config.logging);
    if let Ok(path) = dotenv {
        tracing::debug!("loaded environment from {}", path.display());
    }
    tracing::debug!("effective config: {}", toollm_config::config_to_json(&config));

    let engine = build_engine(&config)?;
    spawn_reaper(
        engine.sessions().clone(),
        Duration::from_secs(config.session.reap_interval_secs),
    );

    let app = routes::router(AppState::new(engine));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        model = %config.llm.model,
        max_tool_rounds = config.chat.max_tool_rounds,
        session_ttl_secs = config.session.ttl_secs,
        "toollm listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("toollm stopped");
    Ok(())
}

/// Flags win over both the file and `PORT`.
fn apply_cli_overrides(config: &mut ToolLmConfig, args: &Args) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.filter_directive().into()),
        )
        .init();
}

/// Wire the model client, search client and session cache from config.
/// API keys come from `GROQ_API_KEY` and `TAVILY_API_KEY`.
fn build_engine(config: &ToolLmConfig) -> Result<ChatEngine, ToolLmError> {
    let ai_err = |e: toollm_ai::AiError| ToolLmError::Ai(e.to_string());

    let groq = GroqConfig::from_env()
        .map_err(ai_err)?
        .with_base_url(&config.llm.base_url)
        .with_model(&config.llm.model)
        .with_temperature(config.llm.temperature)
        .with_max_tokens(config.llm.max_tokens)
        .with_timeout(Duration::from_secs(config.llm.timeout_secs.into()));
    let client = GroqClient::new(groq).map_err(ai_err)?;

    let tavily = TavilyConfig::from_env()
        .map_err(ai_err)?
        .with_base_url(&config.search.base_url)
        .with_max_results(config.search.max_results)
        .with_search_depth(config.search.search_depth.as_str())
        .with_timeout(Duration::from_secs(config.search.timeout_secs.into()));
    let search = TavilyClient::new(tavily).map_err(ai_err)?;

    let sessions = SessionCache::new(Duration::from_secs(config.session.ttl_secs));
    let settings = EngineSettings {
        system_prompt: config.chat.system_prompt.clone(),
        max_tool_rounds: config.chat.max_tool_rounds,
        fallback_message: config.chat.fallback_message.clone(),
    };

    Ok(ChatEngine::new(
        Arc::new(client),
        Arc::new(search),
        sessions,
        settings,
    ))
}

/// Periodically drop expired sessions so idle ones don't pile up.
fn spawn_reaper(sessions: SessionCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let reaped = sessions.reap_expired().await;
            let live = sessions.len().await;
            tracing::debug!(reaped, sessions = live, "Reaper tick");
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use toollm_ai::Message;
    use toollm_common::SessionId;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("toollm").chain(argv.iter().copied())).unwrap()
    }

    fn config_with_port_env(port: &str) -> ToolLmConfig {
        let vars: HashMap<&str, &str> = HashMap::from([("PORT", port)]);
        let mut config = ToolLmConfig::default();
        toollm_config::env::apply_overrides_from(&mut config, |key| {
            vars.get(key).map(|v| v.to_string())
        })
        .unwrap();
        config
    }

    #[test]
    fn port_flag_beats_port_env() {
        let mut config = config_with_port_env("3000");
        assert_eq!(config.server.port, 3000);

        apply_cli_overrides(&mut config, &args(&["--port", "9000"]));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn port_env_kept_without_flag() {
        let mut config = config_with_port_env("3000");
        apply_cli_overrides(&mut config, &args(&[]));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn host_flag_overrides_config() {
        let mut config = ToolLmConfig::default();
        apply_cli_overrides(&mut config, &args(&["--host", "127.0.0.1", "-p", "8080"]));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test(start_paused = true)]
    async fn reaper_drops_expired_sessions_on_each_tick() {
        let sessions = SessionCache::new(Duration::from_secs(60));
        sessions
            .set(SessionId::new("stale"), vec![Message::user("hi")])
            .await;

        let reaper = spawn_reaper(sessions.clone(), Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(30)).await;
        sessions
            .set(SessionId::new("fresh"), vec![Message::user("hello")])
            .await;
        assert_eq!(sessions.len().await, 2);

        // "stale" expires at 60s and the tick at 70s removes it.
        tokio::time::sleep(Duration::from_secs(45)).await;
        assert_eq!(sessions.len().await, 1);
        assert!(sessions.get(&SessionId::new("fresh")).await.is_some());

        reaper.abort();
    }
}
