// Application layer: wires config, catalog loading, and the console view.

pub mod session;

use crate::adapters::{ConsoleView, PageSource};
use crate::core::engine::SearchEngine;
use crate::core::loader::CatalogLoader;
use crate::core::{ConfigProvider, ResultView};
use crate::utils::error::Result;
use session::SearchSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Builds the engine for the configured page. Catalog failures leave it empty.
pub async fn build_engine<C: ConfigProvider>(config: &C) -> Result<SearchEngine> {
    let source = PageSource::from_config(config)?;
    let loader = CatalogLoader::new(source, config.anchor()).with_catalog_file(config.catalog_file());
    tracing::info!("📁 Catalog location: {}", loader.catalog_location());
    Ok(SearchEngine::bootstrap(&loader).await)
}

pub async fn run_query<V: ResultView>(engine: &SearchEngine, view: &V, query: &str) -> Result<()> {
    let results = engine.search(query);
    view.show(query, &results).await
}

/// Treats each line from `input` as the current value of the search box.
pub async fn run_interactive<V, R>(
    engine: Arc<SearchEngine>,
    view: Arc<V>,
    delay: Duration,
    input: R,
) -> Result<()>
where
    V: ResultView + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut session = SearchSession::new(engine, view, delay);
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        session.on_input(&line).await?;
    }

    session.finish().await;
    Ok(())
}

/// Entry point shared by the binaries.
pub async fn run<C: ConfigProvider>(config: &C, query: Option<&str>) -> Result<()> {
    let engine = Arc::new(build_engine(config).await?);
    let view = Arc::new(ConsoleView::stdout(config.output_format(), engine.prefix()));

    match query {
        Some(query) => run_query(&engine, view.as_ref(), query).await,
        None => {
            tracing::info!("⌨️ Reading queries from stdin");
            let stdin = BufReader::new(tokio::io::stdin());
            run_interactive(engine, view, config.debounce(), stdin).await
        }
    }
}
