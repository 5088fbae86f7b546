//! Channel-backed confirmation prompts.
//!
//! The controller awaits [`TuiConfirmer::confirm`] on a spawned task; the
//! event loop receives the [`ConfirmRequest`], shows the dialog and sends the
//! answer back over the oneshot.

use std::sync::Arc;

use forum_core::controller::Confirmer;
use futures::future::{BoxFuture, FutureExt};
use tokio::sync::{mpsc, oneshot};

#[derive(Debug)]
pub struct ConfirmRequest {
    pub prompt: String,
    pub reply: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    pub fn answer(self, confirmed: bool) {
        // The waiting task may have gone away with the controller.
        let _ = self.reply.send(confirmed);
    }
}

pub struct TuiConfirmer {
    requests: mpsc::UnboundedSender<ConfirmRequest>,
}

impl TuiConfirmer {
    pub fn channel() -> (Arc<Self>, mpsc::UnboundedReceiver<ConfirmRequest>) {
        let (requests, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { requests }), rx)
    }
}

impl Confirmer for TuiConfirmer {
    fn confirm(&self, prompt: String) -> BoxFuture<'static, bool> {
        let (reply, answer) = oneshot::channel();
        let sent = self.requests.send(ConfirmRequest { prompt, reply }).is_ok();
        async move {
            // A dropped dialog or a closed loop counts as "no".
            sent && answer.await.unwrap_or(false)
        }
        .boxed()
    }
}
