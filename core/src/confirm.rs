//! Yes/no confirmation as an asynchronous two-step exchange.
//!
//! The controller asks a `Confirm` implementation and suspends until it
//! answers. `ChannelConfirm` hands each prompt to the UI as a
//! `ConfirmRequest`; the UI answers whenever the user decides. A request
//! that is dropped unanswered counts as "no".

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// Prompt shown before an item is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete?";

#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Always gives the same answer. Used for `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirm for FixedAnswer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// A pending question waiting for the UI.
#[derive(Debug)]
pub struct ConfirmRequest {
    pub prompt: String,
    reply: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    pub fn answer(self, yes: bool) {
        // The asking side may have given up; nothing to do then.
        let _ = self.reply.send(yes);
    }
}

/// Forwards prompts over an mpsc channel.
#[derive(Debug, Clone)]
pub struct ChannelConfirm {
    requests: mpsc::Sender<ConfirmRequest>,
}

impl ChannelConfirm {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<ConfirmRequest>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { requests: tx }, rx)
    }
}

#[async_trait]
impl Confirm for ChannelConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = ConfirmRequest {
            prompt: prompt.to_string(),
            reply,
        };
        if self.requests.send(request).await.is_err() {
            return false;
        }
        answer.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channel_confirm_relays_the_answer() {
        let (confirm, mut requests) = ChannelConfirm::new(1);
        let ui = tokio::spawn(async move {
            let request = requests.recv().await.unwrap();
            assert_eq!(request.prompt, DELETE_PROMPT);
            request.answer(true);
        });
        assert!(confirm.confirm(DELETE_PROMPT).await);
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn dropped_request_means_no() {
        let (confirm, mut requests) = ChannelConfirm::new(1);
        let ui = tokio::spawn(async move {
            drop(requests.recv().await.unwrap());
        });
        assert!(!confirm.confirm(DELETE_PROMPT).await);
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn closed_channel_means_no() {
        let (confirm, requests) = ChannelConfirm::new(1);
        drop(requests);
        assert!(!confirm.confirm(DELETE_PROMPT).await);
    }

    #[tokio::test]
    async fn fixed_answer_ignores_prompt() {
        assert!(FixedAnswer(true).confirm("anything").await);
        assert!(!FixedAnswer(false).confirm("anything").await);
    }
}
