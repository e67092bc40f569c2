use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::info;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Warn,
    Error,
}

/// A message the view layer should surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// Sends notices to the view layer. A notifier without a channel only logs.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    tx: Option<UnboundedSender<Notice>>,
}

impl Notifier {
    pub fn new(tx: UnboundedSender<Notice>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A notifier paired with the receiving end of its channel.
    pub fn channel() -> (Self, UnboundedReceiver<Notice>) {
        let (tx, rx) = unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn notify(&self, kind: NoticeKind, title: &str, text: String) {
        info!(kind = ?kind, title = %title, text = %text, "notice");
        if let Some(tx) = &self.tx {
            // A dropped receiver means nobody is watching anymore.
            let _ = tx.send(Notice {
                kind,
                title: title.to_string(),
                text,
            });
        }
    }

    pub fn warn(&self, title: &str, text: String) {
        self.notify(NoticeKind::Warn, title, text)
    }

    pub fn error(&self, title: &str, text: String) {
        self.notify(NoticeKind::Error, title, text)
    }
}
