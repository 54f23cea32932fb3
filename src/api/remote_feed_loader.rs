use std::sync::{Arc, Weak};

use url::Url;

use crate::api::feed_items_mapper::FeedItemsMapper;
use crate::domain::{FeedLoader, LoadCompletion, LoadResult};
use crate::errors::LoadError;
use crate::http::{HttpClient, HttpClientResult, HttpCompletion};

/// Loads feed items from a remote JSON endpoint through an [`HttpClient`].
///
/// Dropping the loader silences it: responses that arrive afterwards are
/// discarded and never reach the `load` completion. The in-flight request
/// itself is not cancelled.
pub struct RemoteFeedLoader<C: HttpClient> {
    url: Url,
    client: C,
    // Pending completions only hold a `Weak` to this, so they never keep the
    // loader alive and can tell when it is gone.
    alive: Arc<()>,
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl<C: HttpClient> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: LoadCompletion) {
        tracing::debug!(url = %self.url, "Loading feed");

        let on_response =
            deliver_while_alive(Arc::downgrade(&self.alive), self.url.clone(), completion);
        self.client.get(&self.url, on_response);
    }
}

fn deliver_while_alive(alive: Weak<()>, url: Url, completion: LoadCompletion) -> HttpCompletion {
    Box::new(move |result| {
        // Held until the completion returns so the loader counts as alive
        // for the whole delivery.
        let Some(_alive) = alive.upgrade() else {
            tracing::debug!(url = %url, "Loader dropped before the response arrived, discarding result");
            return;
        };

        completion(into_load_result(&url, result));
    })
}

fn into_load_result(url: &Url, result: HttpClientResult) -> LoadResult {
    match result {
        Ok(response) => FeedItemsMapper::map(response.status, &response.body).map_err(|e| {
            tracing::debug!(url = %url, status = response.status, error = %e, "Feed response rejected");
            LoadError::InvalidData
        }),
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Feed request failed");
            Err(LoadError::Connectivity)
        }
    }
}
