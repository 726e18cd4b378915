// loja_server/src/services/notifier.rs

//! Mock customer notifier. Messages are logged and kept in an outbox
//! instead of being delivered.

use crate::errors::{AppError, Result as AppResult};
use parking_lot::Mutex;
use tracing::{info, instrument, warn};

/// Recipients in this domain always fail, to exercise the failure path.
pub const FAILING_RECIPIENT_DOMAIN: &str = "@fail.test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
  pub to: String,
  pub from: String,
  pub subject: String,
  pub body: String,
  pub message_id: String,
}

#[derive(Debug)]
pub struct Notifier {
  sender: String,
  outbox: Mutex<Vec<SentNotification>>,
}

impl Notifier {
  pub fn new(sender: impl Into<String>) -> Self {
    Self {
      sender: sender.into(),
      outbox: Mutex::new(Vec::new()),
    }
  }

  #[instrument(name = "notifier::send", skip(self, body), fields(from = %self.sender), err(Display))]
  pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<SentNotification> {
    if to.to_ascii_lowercase().ends_with(FAILING_RECIPIENT_DOMAIN) {
      warn!("Simulated notification failure for recipient {}", to);
      return Err(AppError::Internal("Simulated notification send failure".to_string()));
    }

    let sent = SentNotification {
      to: to.to_string(),
      from: self.sender.clone(),
      subject: subject.to_string(),
      body: body.to_string(),
      message_id: format!("mock_notification_{}", uuid::Uuid::new_v4().simple()),
    };
    info!(message_id = %sent.message_id, "Mock notification sent.");
    self.outbox.lock().push(sent.clone());
    Ok(sent)
  }

  /// Everything sent so far, oldest first.
  pub fn sent(&self) -> Vec<SentNotification> {
    self.outbox.lock().clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn keeps_sent_messages() {
    let notifier = Notifier::new("pedidos@loja.example");
    let sent = notifier.send("ana@cliente.example", "Pedido #1", "corpo").await.unwrap();
    assert_eq!(sent.from, "pedidos@loja.example");
    assert_eq!(notifier.sent(), vec![sent]);
  }

  #[tokio::test]
  async fn failing_domain_is_rejected() {
    let notifier = Notifier::new("pedidos@loja.example");
    assert!(notifier.send("bob@FAIL.test", "s", "b").await.is_err());
    assert!(notifier.sent().is_empty());
  }
}
