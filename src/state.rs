use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::QuizStore;

/// Shared handle injected into every handler.
pub type DynQuizStore = Arc<dyn QuizStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: DynQuizStore,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: QuizStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }
}

impl FromRef<AppState> for DynQuizStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
