//! Keeps a local todo list in step with the remote `/todos` collection.
//!
//! # Design
//! The controller owns a `TodoState` inside a `watch` channel so views can
//! subscribe to changes, and every mutation replaces or edits the value in
//! one `send_modify` call. Update and delete are optimistic: the local
//! change lands before the request is sent and is never rolled back. A
//! failed request only sets `error_message`. Create is the exception and
//! appends only after the service accepts the item.
//!
//! `TodoListController` is a cheap handle; clones share the same state, so
//! several operations can be in flight at once.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::TodoClient;
use crate::config::Config;
use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::error::{ActionError, ApiError};
use crate::http::{HttpRequest, HttpResponse};
use crate::notice::NoticeSlot;
use crate::state::TodoState;
use crate::transport::Transport;
use crate::types::{TodoId, TodoInput, TodoItem};

/// Status shown after a successful create.
pub const ITEM_ADDED: &str = "Item added successfully";

#[derive(Clone)]
pub struct TodoListController {
    inner: Arc<Inner>,
}

struct Inner {
    client: TodoClient,
    transport: Arc<dyn Transport>,
    confirm: Arc<dyn Confirm>,
    state: watch::Sender<TodoState>,
    notice: Mutex<NoticeSlot>,
    status_display: Duration,
    last_placeholder: AtomicI64,
}

impl Inner {
    fn notice(&self) -> MutexGuard<'_, NoticeSlot> {
        self.notice.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn expire_status(&self, generation: u64) {
        let notice = self.notice();
        if notice.is_current(generation) {
            self.state.send_modify(|s| s.status_message = None);
        }
    }
}

impl TodoListController {
    pub fn new(client: TodoClient, transport: Arc<dyn Transport>, confirm: Arc<dyn Confirm>) -> Self {
        Self::with_status_display(client, transport, confirm, Config::default().status_display())
    }

    pub fn from_config(config: &Config, transport: Arc<dyn Transport>, confirm: Arc<dyn Confirm>) -> Self {
        Self::with_status_display(
            TodoClient::new(&config.base_url),
            transport,
            confirm,
            config.status_display(),
        )
    }

    pub fn with_status_display(
        client: TodoClient,
        transport: Arc<dyn Transport>,
        confirm: Arc<dyn Confirm>,
        status_display: Duration,
    ) -> Self {
        let (state, _) = watch::channel(TodoState::default());
        Self {
            inner: Arc::new(Inner {
                client,
                transport,
                confirm,
                state,
                notice: Mutex::new(NoticeSlot::default()),
                status_display,
                last_placeholder: AtomicI64::new(0),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<TodoState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> TodoState {
        self.inner.state.borrow().clone()
    }

    pub fn set_draft_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.modify(|s| s.draft_title = title);
    }

    pub fn set_draft_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.modify(|s| s.draft_description = description);
    }

    pub fn set_edit_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.modify(|s| s.edit_title = title);
    }

    pub fn set_edit_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.modify(|s| s.edit_description = description);
    }

    /// Replace `items` with the service's full collection.
    ///
    /// On failure the current items are kept and no error message is shown.
    pub async fn load_items(&self) -> Result<usize, ApiError> {
        let request = self.inner.client.build_list_todos();
        let items = self
            .send(request)
            .await
            .and_then(|response| self.inner.client.parse_list_todos(response))
            .map_err(|e| {
                warn!(error = %e, "failed to load todos");
                e
            })?;

        let count = items.len();
        self.modify(|s| s.items = items);
        info!(count, "loaded todos");
        Ok(count)
    }

    /// Create an item from the current draft fields.
    pub async fn submit_draft(&self) -> Result<Option<TodoItem>, ActionError> {
        let (title, description) = {
            let state = self.inner.state.borrow();
            (state.draft_title.clone(), state.draft_description.clone())
        };
        self.create_item(title, description).await
    }

    /// Ask the service to create an item and append it once accepted.
    ///
    /// Returns `Ok(None)` without doing anything when either field is blank.
    pub async fn create_item(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Option<TodoItem>, ActionError> {
        let input = TodoInput::new(title, description);
        if !input.is_complete() {
            debug!("ignoring create with blank field");
            return Ok(None);
        }
        self.begin_action(|_| {});

        let created = match self.inner.client.build_create_todo(&input) {
            Ok(request) => self
                .send(request)
                .await
                .and_then(|response| self.inner.client.parse_create_todo(response)),
            Err(e) => Err(e),
        };
        let created = created.map_err(|e| self.fail(ActionError::CreateFailed(e)))?;

        let id = match created {
            Some(server_copy) => server_copy.id,
            None => self.next_placeholder(),
        };
        let item = TodoItem {
            id,
            title: input.title,
            description: input.description,
        };
        let appended = item.clone();
        self.show_status(ITEM_ADDED, move |s| {
            s.items.push(appended);
            s.draft_title.clear();
            s.draft_description.clear();
        });
        info!(id = %item.id, "created todo");
        Ok(Some(item))
    }

    /// Put the item with `id` into edit mode, seeding the edit fields from it.
    ///
    /// Any other edit in progress is dropped. Returns `false` and changes
    /// nothing if no local item has that id.
    pub fn begin_edit(&self, id: &TodoId) -> bool {
        self.inner.state.send_if_modified(|s| {
            let Some(item) = s.item(id) else {
                return false;
            };
            let (title, description) = (item.title.clone(), item.description.clone());
            s.edit_target = Some(id.clone());
            s.edit_title = title;
            s.edit_description = description;
            true
        })
    }

    pub fn cancel_edit(&self) {
        self.modify(|s| {
            s.edit_target = None;
            s.edit_title.clear();
            s.edit_description.clear();
        });
    }

    /// Apply the edit fields to the item with `id`, leave edit mode, then
    /// send the change. The local change stays even if the request fails.
    pub async fn update_item(&self, id: &TodoId) -> Result<(), ActionError> {
        let mut input = TodoInput::default();
        self.begin_action(|s| {
            input = TodoInput::new(
                std::mem::take(&mut s.edit_title),
                std::mem::take(&mut s.edit_description),
            );
            if let Some(item) = s.items.iter_mut().find(|item| &item.id == id) {
                item.title = input.title.clone();
                item.description = input.description.clone();
            }
            s.edit_target = None;
        });

        let result = match self.inner.client.build_update_todo(id, &input) {
            Ok(request) => self
                .send(request)
                .await
                .and_then(|response| self.inner.client.parse_update_todo(response)),
            Err(e) => Err(e),
        };
        result.map_err(|e| self.fail(ActionError::UpdateFailed(e)))?;
        info!(%id, "updated todo");
        Ok(())
    }

    /// Ask for confirmation, then remove the item locally and on the service.
    ///
    /// Returns `Ok(false)` when the user declines; nothing is changed or sent.
    pub async fn delete_item(&self, id: &TodoId) -> Result<bool, ActionError> {
        if !self.inner.confirm.confirm(DELETE_PROMPT).await {
            debug!(%id, "delete declined");
            return Ok(false);
        }
        self.begin_action(|s| {
            s.items.retain(|item| &item.id != id);
            if s.is_editing(id) {
                s.edit_target = None;
            }
        });

        let request = self.inner.client.build_delete_todo(id);
        self.send(request)
            .await
            .and_then(|response| self.inner.client.parse_delete_todo(response))
            .map_err(|e| self.fail(ActionError::DeleteFailed(e)))?;
        info!(%id, "deleted todo");
        Ok(true)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.inner.transport.execute(request).await
    }

    fn modify(&self, f: impl FnOnce(&mut TodoState)) {
        self.inner.state.send_modify(f);
    }

    /// Clear both messages, cancel any pending status timer and apply the
    /// action's local change, all in one published update.
    fn begin_action(&self, apply: impl FnOnce(&mut TodoState)) {
        let mut notice = self.inner.notice();
        notice.bump();
        self.modify(|s| {
            s.status_message = None;
            s.error_message = None;
            apply(s);
        });
    }

    fn fail(&self, err: ActionError) -> ActionError {
        warn!(error = %err, cause = %err.api_error(), "todo action failed");
        let message = err.to_string();
        self.modify(|s| s.error_message = Some(message));
        err
    }

    /// Apply `apply` and show `message` in the same update, then arm the
    /// timer that clears the message.
    fn show_status(&self, message: &str, apply: impl FnOnce(&mut TodoState)) {
        let mut notice = self.inner.notice();
        let generation = notice.bump();
        self.modify(|s| {
            apply(s);
            s.status_message = Some(message.to_string());
        });

        let inner = Arc::downgrade(&self.inner);
        let delay = self.inner.status_display;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = inner.upgrade() {
                inner.expire_status(generation);
            }
        });
        notice.track(timer.abort_handle());
    }

    /// Millisecond timestamp, bumped past the previous one if the clock
    /// has not moved.
    fn next_placeholder(&self) -> TodoId {
        let now = Utc::now().timestamp_millis();
        let previous = match self.inner.last_placeholder.fetch_update(
            Ordering::SeqCst,
            Ordering::SeqCst,
            |last| Some(now.max(last + 1)),
        ) {
            Ok(last) | Err(last) => last,
        };
        TodoId::from(now.max(previous + 1))
    }
}
