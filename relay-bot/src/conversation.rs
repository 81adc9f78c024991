//! Shared conversation history: ordered, append-only, cleared as a whole.

use completion_client::ChatMessage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The single global conversation shared by all senders.
///
/// All mutation and snapshot operations go through one mutex, so each
/// inbound update's state changes are serialized against the others.
/// Callers must not hold the lock across network calls: take a
/// [`snapshot`], release, call, then [`append`] the result.
///
/// [`snapshot`]: Conversation::snapshot
/// [`append`]: Conversation::append
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl Conversation {
    /// Creates a new empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end, preserving order.
    pub async fn append(&self, message: ChatMessage) {
        let mut messages = self.messages.lock().await;
        messages.push(message);
    }

    /// Removes all messages.
    pub async fn clear(&self) {
        let mut messages = self.messages.lock().await;
        messages.clear();
    }

    /// Returns a copy of the history in append order. Later mutations are
    /// not visible through a previously taken snapshot.
    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        let messages = self.messages.lock().await;
        messages.clone()
    }

    /// Returns the number of messages in the history.
    pub async fn len(&self) -> usize {
        let messages = self.messages.lock().await;
        messages.len()
    }

    /// Returns true if the history is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_preserves_order() {
        let conversation = Conversation::new();
        conversation.append(ChatMessage::user("first")).await;
        conversation.append(ChatMessage::assistant("second")).await;
        conversation.append(ChatMessage::user("third")).await;

        let snapshot = conversation.snapshot().await;
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].content, "first");
        assert_eq!(snapshot[1].content, "second");
        assert_eq!(snapshot[2].content, "third");
    }

    #[tokio::test]
    async fn snapshot_is_unaffected_by_later_mutations() {
        let conversation = Conversation::new();
        conversation.append(ChatMessage::user("original")).await;

        let snapshot = conversation.snapshot().await;
        conversation.append(ChatMessage::assistant("later")).await;
        conversation.clear().await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "original");
        assert!(conversation.is_empty().await);
    }

    #[tokio::test]
    async fn clear_empties_history() {
        let conversation = Conversation::new();
        conversation.append(ChatMessage::user("one")).await;
        conversation.append(ChatMessage::assistant("two")).await;
        assert_eq!(conversation.len().await, 2);

        conversation.clear().await;

        assert!(conversation.is_empty().await);
        assert!(conversation.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_same_history() {
        let conversation = Conversation::new();
        let clone = conversation.clone();

        conversation.append(ChatMessage::user("shared")).await;

        let snapshot = clone.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "shared");
    }
}
