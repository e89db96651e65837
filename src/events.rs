use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

/// Events emitted by a form session as edits and derivation passes land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FormEvent {
    /// Persisted item state was fetched, merged, and settled into the form.
    FormLoaded { item_id: Uuid },
    /// The variant list was rebuilt from the axis groups.
    VariantsRegenerated { count: usize },
    /// The variant/unit pairing list was rebuilt.
    VariantUnitsRegenerated { count: usize },
    /// The SKU list was rebuilt; `kept` rows survived from the previous
    /// list, `created` are new this pass.
    SkusRegenerated { kept: usize, created: usize },
    /// The shared config was pushed onto every SKU.
    ConfigBroadcast,
    /// The form passed validation and was handed to the catalog source.
    FormSubmitted { item_id: Uuid },
}

/// Cloneable handle for emitting [`FormEvent`]s into a session's channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<FormEvent>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<FormEvent>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: FormEvent) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Sends an event, logging instead of failing when the receiver is gone.
    /// Form edits must not error out just because nobody is listening.
    pub async fn send_or_log(&self, event: FormEvent) {
        if let Err(e) = self.send(event).await {
            warn!("Dropping form event: {}", e);
        }
    }

    /// Non-blocking variant of [`send_or_log`](Self::send_or_log) for
    /// synchronous callers; a full or closed channel drops the event.
    pub fn try_send_or_log(&self, event: FormEvent) {
        if let Err(e) = self.sender.try_send(event) {
            warn!("Dropping form event: {}", e);
        }
    }
}

/// Builds a bounded event channel and its sending handle.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<FormEvent>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}
