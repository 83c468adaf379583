use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docent::application::ports::{Embedder, Generator, SessionStore, TextSplitter};
use docent::application::services::{
    GenerationService, IndexingService, PromptTemplates, RetrievalService,
};
use docent::infrastructure::llm::{EmbedderFactory, GeneratorFactory, MockEmbedder, MockGenerator};
use docent::infrastructure::observability::{TracingConfig, init_tracing};
use docent::infrastructure::persistence::{InMemorySessionStore, spawn_idle_sweep};
use docent::infrastructure::text_processing::{CompositeExtractor, FixedWindowSplitter};
use docent::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment,
        &settings.logging,
    ))?;

    let chunking = settings
        .chunking_config()
        .context("invalid chunking configuration")?;
    if settings.retrieval.top_k == 0 {
        anyhow::bail!("retrieval.top_k must be at least 1");
    }

    let scaffold = ScaffoldConfig::from_env();
    let (embedder, generator) = if scaffold.enabled {
        tracing::warn!("Scaffold mode: using mock embedder and generator");
        let embedder: Arc<dyn Embedder> = Arc::new(MockEmbedder::default());
        let generator: Arc<dyn Generator> = Arc::new(MockGenerator);
        (embedder, generator)
    } else {
        (
            EmbedderFactory::create(&settings.embeddings)?,
            GeneratorFactory::create(&settings.generation)?,
        )
    };

    let splitter = FixedWindowSplitter::from_config(chunking);
    tracing::info!(
        chunk_size = splitter.config().chunk_size(),
        overlap = splitter.config().overlap(),
        top_k = settings.retrieval.top_k,
        "Chunking configured"
    );
    let text_splitter: Arc<dyn TextSplitter> = Arc::new(splitter);
    let indexing_service = Arc::new(IndexingService::new(
        Arc::new(CompositeExtractor::with_default_adapters()),
        Arc::clone(&embedder),
        text_splitter,
    ));

    let retrieval_service = Arc::new(RetrievalService::new(
        Arc::clone(&embedder),
        settings.retrieval.top_k,
    ));

    let generation_service = Arc::new(GenerationService::new(
        Arc::clone(&retrieval_service),
        generator,
        PromptTemplates::default()
            .with_summary_language(&settings.generation.summary_language),
        settings.generation.max_new_tokens,
        settings.generation.summary_prefix_chars,
    ));

    let session_store: Arc<dyn SessionStore> = match settings.sessions.idle_ttl() {
        Some(idle_ttl) => {
            let store: Arc<dyn SessionStore> = Arc::new(
                InMemorySessionStore::new(settings.sessions.max_sessions).with_idle_ttl(idle_ttl),
            );
            spawn_idle_sweep(Arc::clone(&store), settings.sessions.sweep_interval());
            tracing::info!(idle_ttl_secs = idle_ttl.as_secs(), "Idle session expiry enabled");
            store
        }
        None => Arc::new(InMemorySessionStore::new(settings.sessions.max_sessions)),
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState {
        indexing_service,
        retrieval_service,
        generation_service,
        session_store,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
