use crate::core::debounce::Debouncer;
use crate::core::engine::SearchEngine;
use crate::core::ranking::normalize_query;
use crate::core::ResultView;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Connects raw input to the engine and a view, debouncing between keystrokes.
pub struct SearchSession<V: ResultView + 'static> {
    engine: Arc<SearchEngine>,
    view: Arc<V>,
    debouncer: Debouncer,
}

impl<V: ResultView + 'static> SearchSession<V> {
    pub fn new(engine: Arc<SearchEngine>, view: Arc<V>, delay: Duration) -> Self {
        Self {
            engine,
            view,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Handles the current input value.
    ///
    /// Inputs too short to search cancel the pending search and dismiss the
    /// view right away; anything else is searched once input goes quiet.
    pub async fn on_input(&mut self, raw: &str) -> Result<()> {
        if normalize_query(raw).is_none() {
            self.debouncer.cancel();
            return self.view.dismiss().await;
        }

        let engine = self.engine.clone();
        let view = self.view.clone();
        let query = raw.to_string();

        self.debouncer.schedule_async(async move {
            let results = engine.search(&query);
            if let Err(e) = view.show(&query, &results).await {
                tracing::warn!("⚠️ Failed to show results for {:?}: {}", query, e);
            }
        });
        Ok(())
    }

    /// Closes the session, showing the pending search if there is one.
    pub async fn finish(&mut self) {
        self.debouncer.settle().await;
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, PackageRecord, RankedResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Show(String, Vec<String>),
        Dismiss,
    }

    #[derive(Default)]
    struct RecordingView {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResultView for RecordingView {
        async fn show(&self, query: &str, results: &[RankedResult]) -> Result<()> {
            let names = results.iter().map(|r| r.package.name.clone()).collect();
            self.events.lock().unwrap().push(Event::Show(query.to_string(), names));
            Ok(())
        }

        async fn dismiss(&self) -> Result<()> {
            self.events.lock().unwrap().push(Event::Dismiss);
            Ok(())
        }
    }

    fn engine() -> Arc<SearchEngine> {
        let catalog = Catalog::new(vec![
            PackageRecord {
                name: "Rome Explorer".to_string(),
                cities: vec!["Rome".to_string()],
                ..Default::default()
            },
            PackageRecord {
                name: "Romantic Rhine".to_string(),
                region: "Germany".to_string(),
                ..Default::default()
            },
        ]);
        Arc::new(SearchEngine::new(catalog, "./"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_searches_once() {
        let view = Arc::new(RecordingView::default());
        let mut session = SearchSession::new(engine(), view.clone(), Duration::from_millis(300));

        for input in ["ro", "rom", "rome"] {
            session.on_input(input).await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(view.events().is_empty());

        session.finish().await;
        assert_eq!(
            view.events(),
            vec![Event::Show("rome".to_string(), vec!["Rome Explorer".to_string()])]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_cancels_and_dismisses() {
        let view = Arc::new(RecordingView::default());
        let mut session = SearchSession::new(engine(), view.clone(), Duration::from_millis(300));

        session.on_input("rom").await.unwrap();
        assert!(session.is_pending());
        session.on_input("r").await.unwrap();
        assert!(!session.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(view.events(), vec![Event::Dismiss]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_between_inputs_show_each() {
        let view = Arc::new(RecordingView::default());
        let mut session = SearchSession::new(engine(), view.clone(), Duration::from_millis(300));

        session.on_input("roman").await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        session.on_input("germany").await.unwrap();
        session.finish().await;

        assert_eq!(
            view.events(),
            vec![
                Event::Show("roman".to_string(), vec!["Romantic Rhine".to_string()]),
                Event::Show("germany".to_string(), vec!["Romantic Rhine".to_string()]),
            ]
        );
    }
}
