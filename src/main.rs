use anyhow::{Result, bail};
use clap::Parser;
use clomonitor_search::{
    application::{
        ports::{
            NavigatorPort, PreferencesRepositoryPort, SearchApiPort, ViewportPort,
            navigation::{NavigationIntent, Navigator, SEARCH_PATH},
            preferences::PreferencesRepository,
        },
        services::{
            AnchorScrollStatus, AnchorScroller, FetchOutcome, PreferencesStore,
            ResultsFetchOrchestrator, SearchSession, SearchStateController,
        },
    },
    config::AppConfig,
    infrastructure::{
        HeadlessViewport, HttpSearchApi, InMemoryHistory, JsonFilePreferencesRepository,
    },
    presentation::{
        SearchPageView,
        cli::{Cli, render_from},
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let preferences_repo = Arc::new(JsonFilePreferencesRepository::new(
        config.preferences_path(),
    ));
    let stored = match preferences_repo.load().await {
        Ok(stored) => stored.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring stored search preferences");
            Default::default()
        }
    };
    let preferences = cli.preferences(stored);
    if preferences != stored {
        preferences_repo.save(&preferences).await?;
    }
    let preferences = Arc::new(PreferencesStore::new(preferences));

    let history = Arc::new(InMemoryHistory::new());
    let navigator: Arc<NavigatorPort> = history.clone();
    let headless = Arc::new(HeadlessViewport::new());
    let viewport: Arc<ViewportPort> = headless.clone();
    let api: Arc<SearchApiPort> =
        Arc::new(HttpSearchApi::new(config.api_url(), config.http_timeout())?);
    let preferences_port: Arc<PreferencesRepositoryPort> = preferences_repo;

    let orchestrator = Arc::new(ResultsFetchOrchestrator::new(api, Arc::clone(&viewport)));
    let controller = SearchStateController::new(Arc::clone(&preferences), navigator);
    let mut session = SearchSession::new(controller, orchestrator)
        .with_preferences_repository(preferences_port)
        .with_anchor_scroller(AnchorScroller::new(
            viewport,
            config.anchor_poll_interval(),
            config.anchor_poll_timeout(),
        ));

    let query = cli.initial_query()?;
    history.navigate(NavigationIntent::push(SEARCH_PATH, query.clone()));
    tracing::info!(api = config.api_url(), %query, "searching projects");
    let outcome = session.location_changed(&query).await;

    let view = SearchPageView::build(
        session.controller().criteria(),
        &preferences.get(),
        &session.snapshot(),
    );
    let anchor = match cli.anchor.as_deref() {
        Some(anchor) => {
            let rows = view.cards.iter().flatten().map(|card| card.name.clone());
            headless.lay_out(rows);
            scroll_to_anchor(&mut session, anchor).await
        }
        None => None,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_from(&view, anchor));
    }

    if let Some(FetchOutcome::Failed { message }) = outcome {
        bail!("search failed: {message}");
    }
    Ok(())
}

/// Returns `anchor` when the viewport reached it before the poll timed out.
async fn scroll_to_anchor<'a>(session: &mut SearchSession, anchor: &'a str) -> Option<&'a str> {
    if !session.follow_anchor(anchor) {
        return None;
    }
    match session.take_anchor_guard()?.wait().await {
        Some(AnchorScrollStatus::Scrolled(offset)) => {
            tracing::info!(anchor, offset, "scrolled to project");
            Some(anchor)
        }
        status => {
            tracing::warn!(anchor, ?status, "project not found in results");
            None
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
