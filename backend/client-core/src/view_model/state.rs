use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

/// Observable state of a list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }
}

/// A record the server identifies by a numeric id.
pub trait Entity {
    fn id(&self) -> i64;
}

/// Identifies one started action on a [`StateStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OperationToken(u64);

/// Token-guarded wrapper around the watch channel.
///
/// Every read and write of `latest` happens inside a watch modify closure,
/// so the generation check and the state mutation are one critical section.
pub(crate) struct StateStore<T> {
    sender: watch::Sender<ViewState<T>>,
    latest: AtomicU64,
}

impl<T: Clone> StateStore<T> {
    pub(crate) fn new() -> Self {
        let (sender, _) = watch::channel(ViewState::default());
        Self {
            sender,
            latest: AtomicU64::new(0),
        }
    }

    pub(crate) fn snapshot(&self) -> ViewState<T> {
        self.sender.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.sender.subscribe()
    }

    /// Marks the screen loading and clears any previous error.
    pub(crate) fn begin(&self) -> OperationToken {
        let mut token = OperationToken(0);
        self.sender.send_modify(|state| {
            token = OperationToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
            state.is_loading = true;
            state.error_message = None;
        });
        token
    }

    /// Replaces the items wholesale. Returns `false` if `token` was stale and
    /// nothing changed.
    pub(crate) fn complete_fetch(&self, token: OperationToken, items: Vec<T>) -> bool {
        self.sender.send_if_modified(|state| {
            if !self.is_latest(token) {
                return false;
            }
            state.items = items;
            state.is_loading = false;
            true
        })
    }


    /// Records a failure, leaving items untouched. Returns `false` if `token`
    /// was stale and the failure was ignored.
    pub(crate) fn fail(&self, token: OperationToken, message: String) -> bool {
        self.sender.send_if_modified(|state| {
            if !self.is_latest(token) {
                return false;
            }
            state.is_loading = false;
            state.error_message = Some(message);
            true
        })
    }

    fn is_latest(&self, token: OperationToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

impl<T: Clone + Entity> StateStore<T> {
    /// Appends a server-confirmed item. Returns whether `token` was current.
    ///
    /// A stale create skips the append when a newer fetch already delivered
    /// an item with the same id.
    pub(crate) fn complete_create(&self, token: OperationToken, item: T) -> bool {
        let mut current = false;
        self.sender.send_if_modified(|state| {
            current = self.is_latest(token);
            let delivered = !current && state.items.iter().any(|i| i.id() == item.id());
            if !delivered {
                state.items.push(item);
            }
            if current {
                state.is_loading = false;
            }
            current || !delivered
        });
        current
    }
}
