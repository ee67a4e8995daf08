//! Загрузка коллекций экранов через `CollectionState`.
//!
//! Каждый запрос получает токен; результат применяется, только если токен
//! еще актуален. При размонтировании все токены аннулируются.

use contracts::shared::load_state::{CollectionState, FetchTicket};
use leptos::logging::log;
use leptos::prelude::*;
use std::future::Future;

/// Сигнал коллекции, токены которого отменяются при размонтировании владельца
pub fn use_collection<T>() -> RwSignal<CollectionState<T>>
where
    T: Send + Sync + 'static,
{
    let state = RwSignal::new(CollectionState::new());
    on_cleanup(move || {
        // сигнал может быть уже освобожден
        let _ = state.try_update(|s| s.cancel());
    });
    state
}

fn run_fetch<T, F>(state: RwSignal<CollectionState<T>>, ticket: FetchTicket, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, String>> + 'static,
{
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            log!("Failed to load '{}': {}", ticket.query_key(), e);
        }
        let applied = state
            .try_update(|s| s.complete(&ticket, result))
            .unwrap_or(false);
        if !applied {
            log!("Dropped stale result for '{}'", ticket.query_key());
        }
    });
}

/// Загрузка для нового ключа запроса
pub fn load_collection<T, F>(state: RwSignal<CollectionState<T>>, query_key: String, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, String>> + 'static,
{
    if let Some(ticket) = state.try_update(|s| s.begin(query_key)) {
        run_fetch(state, ticket, fetch);
    }
}

/// Повтор с текущим ключом (после ошибки или по кнопке "Refresh")
pub fn retry_collection<T, F>(state: RwSignal<CollectionState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, String>> + 'static,
{
    if let Some(ticket) = state.try_update(|s| s.retry()) {
        run_fetch(state, ticket, fetch);
    }
}
