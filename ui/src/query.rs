//! A small query layer over `use_resource`.
//!
//! Each query is keyed by its [`ResourceKind`] plus whatever signals the fetch
//! closure reads (route parameters). Mutations call
//! [`QueryClient::invalidate`] to make every mounted query of that kind fetch
//! again. Superseded and unmounted fetches are dropped by `use_resource`, so a
//! late response never reaches a component that no longer wants it.

use std::{collections::HashMap, future::Future};

use dioxus::prelude::*;
use types::{Emptiness, QueryStatus, ResourceKind};

use crate::ErrorInfo;

pub type Query<T> = QueryStatus<T, ErrorInfo>;

#[derive(Clone, Copy)]
pub struct QueryClient {
    generations: Signal<HashMap<ResourceKind, u64>>,
}

impl QueryClient {
    pub fn generation(&self, kind: ResourceKind) -> u64 {
        self.generations.read().get(&kind).copied().unwrap_or_default()
    }

    pub fn invalidate(&mut self, kind: ResourceKind) {
        tracing::debug!(?kind, "invalidating queries");
        *self.generations.write().entry(kind).or_default() += 1;
    }
}

/// Installs the query client. Call once, in the layout.
pub fn use_query_client_provider() -> QueryClient {
    use_context_provider(|| QueryClient {
        generations: Signal::new(HashMap::new()),
    })
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// Runs `fetch` on mount, whenever a signal it reads changes, and whenever
/// `kind` is invalidated.
pub fn use_query<T, F, Fut>(kind: ResourceKind, mut fetch: F) -> Memo<Query<T>>
where
    T: Emptiness + Clone + PartialEq + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ServerFnResult<T>> + 'static,
{
    let client = use_query_client();
    // Memoised so invalidating another kind does not refetch this one.
    let generation = use_memo(move || client.generation(kind));

    let resource = use_resource(move || {
        let _ = generation();
        fetch()
    });

    use_memo(move || {
        let settled = Option::as_ref(&*resource.read()).map(|result| match result {
            Ok(data) => Ok(data.clone()),
            Err(err) => Err(ErrorInfo::from_server_error(err)),
        });
        QueryStatus::from_settled(settled)
    })
}
