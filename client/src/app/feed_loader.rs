//! Feed loaders
//!
//! Own the render state of the home feed and profile views. Each load bumps a
//! generation token and aborts the previous in-flight task; a result is only
//! committed if its token is still current, so a slow response to an old
//! language or user can never overwrite a newer one.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::app::feed_service::{FeedService, ProfileView};
use crate::app::session::{Access, SessionGate};
use crate::domain::entities::{FeedItem, Lang, UserId};
use crate::domain::ports::{AccountApi, ContentApi};

/// Render state published by a loader
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub value: T,
    pub loading: bool,
    pub generation: u64,
}

/// State slot shared between a loader and its in-flight task
struct Slot<K, T> {
    state: watch::Sender<LoadState<T>>,
    last_key: Mutex<Option<K>>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl<K, T> Slot<K, T>
where
    K: Clone + PartialEq,
    T: Clone,
{
    fn new(initial: T) -> Self {
        let (state, _) = watch::channel(LoadState {
            value: initial,
            loading: false,
            generation: 0,
        });
        Self {
            state,
            last_key: Mutex::new(None),
            inflight: Mutex::new(None),
        }
    }

    /// Start a new generation and mark the view loading
    fn begin(&self, key: K) -> u64 {
        *self.last_key.lock().unwrap_or_else(PoisonError::into_inner) = Some(key);
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.loading = true;
            generation = state.generation;
        });
        generation
    }

    /// Publish `value` if `generation` is still the latest
    fn commit(&self, generation: u64, value: T) -> bool {
        self.state.send_if_modified(|state| {
            if state.generation != generation {
                tracing::debug!(
                    "Discarding stale result (generation {} < {})",
                    generation,
                    state.generation
                );
                return false;
            }
            state.value = value;
            state.loading = false;
            true
        })
    }

    fn last_key(&self) -> Option<K> {
        self.last_key
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Begin a generation for `key` and spawn its task, aborting the previous one
    ///
    /// The in-flight lock is held across both steps so two concurrent starts
    /// cannot leave the current generation's task aborted.
    fn start<F, Fut>(self: &Arc<Self>, key: K, task: F)
    where
        K: Send + 'static,
        T: Send + Sync + 'static,
        F: FnOnce(Arc<Self>, u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        let generation = self.begin(key);
        let handle = tokio::spawn(task(self.clone(), generation));
        if let Some(previous) = inflight.replace(handle) {
            previous.abort();
        }
    }

    fn snapshot(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    async fn settled(&self) -> LoadState<T> {
        let mut rx = self.state.subscribe();
        let state = match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        };
        state
    }
}

impl<K, T> Drop for Slot<K, T> {
    fn drop(&mut self) {
        if let Some(task) = self
            .inflight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
    }
}

/// Loader for the home feed, keyed by language
pub struct FeedLoader<A, C>
where
    A: AccountApi + 'static,
    C: ContentApi + 'static,
{
    service: Arc<FeedService<A, C>>,
    session: Arc<SessionGate<A>>,
    slot: Arc<Slot<Lang, Vec<FeedItem>>>,
}

impl<A, C> FeedLoader<A, C>
where
    A: AccountApi + 'static,
    C: ContentApi + 'static,
{
    pub fn new(service: Arc<FeedService<A, C>>, session: Arc<SessionGate<A>>) -> Self {
        Self {
            service,
            session,
            slot: Arc::new(Slot::new(Vec::new())),
        }
    }

    /// Load the feed for `lang` unless it is already the current language
    pub fn load(&self, lang: Lang) -> Access {
        if self.slot.last_key().as_ref() == Some(&lang) {
            return self.session.access();
        }
        self.reload(lang)
    }

    /// Load the feed for `lang`, superseding any load in flight
    pub fn reload(&self, lang: Lang) -> Access {
        let access = self.session.access();
        if !matches!(access, Access::Granted(_)) {
            return access;
        }

        let service = self.service.clone();
        self.slot.start(lang.clone(), move |slot, generation| async move {
            let items = service.global_feed(&lang).await;
            slot.commit(generation, items);
        });

        access
    }

    pub fn snapshot(&self) -> LoadState<Vec<FeedItem>> {
        self.slot.snapshot()
    }

    /// Wait until no load is in flight
    pub async fn settled(&self) -> LoadState<Vec<FeedItem>> {
        self.slot.settled().await
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<Vec<FeedItem>>> {
        self.slot.state.subscribe()
    }
}

/// Loader for profile pages, keyed by user and language
pub struct ProfileLoader<A, C>
where
    A: AccountApi + 'static,
    C: ContentApi + 'static,
{
    service: Arc<FeedService<A, C>>,
    session: Arc<SessionGate<A>>,
    slot: Arc<Slot<(UserId, Lang), Option<ProfileView>>>,
}

impl<A, C> ProfileLoader<A, C>
where
    A: AccountApi + 'static,
    C: ContentApi + 'static,
{
    pub fn new(service: Arc<FeedService<A, C>>, session: Arc<SessionGate<A>>) -> Self {
        Self {
            service,
            session,
            slot: Arc::new(Slot::new(None)),
        }
    }

    pub fn load(&self, user_id: UserId, lang: Lang) -> Access {
        if self.slot.last_key() == Some((user_id, lang.clone())) {
            return self.session.access();
        }
        self.reload(user_id, lang)
    }

    pub fn reload(&self, user_id: UserId, lang: Lang) -> Access {
        let access = self.session.access();
        if !matches!(access, Access::Granted(_)) {
            return access;
        }

        let service = self.service.clone();
        self.slot.start((user_id, lang.clone()), move |slot, generation| async move {
            let view = service.profile(user_id, &lang).await;
            slot.commit(generation, Some(view));
        });

        access
    }

    pub fn snapshot(&self) -> LoadState<Option<ProfileView>> {
        self.slot.snapshot()
    }

    pub async fn settled(&self) -> LoadState<Option<ProfileView>> {
        self.slot.settled().await
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<Option<ProfileView>>> {
        self.slot.state.subscribe()
    }
}
