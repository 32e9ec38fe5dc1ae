//! Client core for the todo service.
//!
//! # Overview
//! `TodoListController` holds the state a todo-list view renders from and
//! mirrors every create, edit and delete against the remote `/todos`
//! collection. Underneath it, `TodoClient` builds `HttpRequest` values and
//! parses `HttpResponse` values without touching the network, and a
//! `Transport` performs the round-trip.
//!
//! # Design
//! - `TodoClient` is stateless. It holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `Transport` and `Confirm` are the seams to the outside world; tests
//!   swap them for scripted versions.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod http;
mod notice;
pub mod state;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::Config;
pub use confirm::{ChannelConfirm, Confirm, ConfirmRequest, FixedAnswer, DELETE_PROMPT};
pub use controller::{TodoListController, ITEM_ADDED};
pub use error::{ActionError, ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::TodoState;
pub use transport::{ReqwestTransport, Transport};
pub use types::{TodoId, TodoInput, TodoItem};
