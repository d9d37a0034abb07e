#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Message;
use crate::domain::models::Participant;
use crate::domain::models::SeedRecord;

/// What a mutation did. Returned by every store operation that changed
/// something so a single subscriber can re-render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversationChange {
    SenderChanged(Participant),
    Appended,
    Cleared,
    Seeded(usize),
    Restored(usize),
}

/// Owns the message log and the active sender.
///
/// Only user-composed messages are persisted: `append_message` and `clear`
/// forward to the persistence worker, `load_seed` and `restore` never do.
/// Persistence is fire-and-forget, a failed hand-off is logged and the
/// in-memory log stays authoritative.
pub struct ConversationStore {
    messages: Vec<Message>,
    active_sender: Participant,
    persistence: mpsc::UnboundedSender<Action>,
}

impl ConversationStore {
    pub fn new(persistence: mpsc::UnboundedSender<Action>) -> ConversationStore {
        return ConversationStore {
            messages: vec![],
            active_sender: Participant::default(),
            persistence,
        };
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn active_sender(&self) -> Participant {
        return self.active_sender;
    }

    pub fn set_active_sender(&mut self, participant: Participant) -> Option<ConversationChange> {
        self.active_sender = participant;
        return Some(ConversationChange::SenderChanged(participant));
    }

    /// Unknown names are ignored and leave the active sender untouched.
    pub fn set_active_sender_by_name(&mut self, name: &str) -> Option<ConversationChange> {
        let participant = Participant::parse(name)?;
        return self.set_active_sender(participant);
    }

    pub fn toggle_active_sender(&mut self) -> Option<ConversationChange> {
        return self.set_active_sender(self.active_sender.other());
    }

    pub fn append_message(
        &mut self,
        sender: Participant,
        text: &str,
    ) -> Option<ConversationChange> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::new(sender, text));
        self.persist(Action::SaveTranscript(self.messages.clone()));

        return Some(ConversationChange::Appended);
    }

    pub fn clear(&mut self) -> Option<ConversationChange> {
        self.messages.clear();
        self.persist(Action::ClearTranscript());

        return Some(ConversationChange::Cleared);
    }

    pub fn load_seed(&mut self, records: Vec<SeedRecord>) -> Option<ConversationChange> {
        self.messages = records.into_iter().map(Message::from).collect();
        tracing::debug!(count = self.messages.len(), "loaded seed messages");

        return Some(ConversationChange::Seeded(self.messages.len()));
    }

    pub fn restore(&mut self, messages: Vec<Message>) -> Option<ConversationChange> {
        self.messages = messages;
        tracing::debug!(count = self.messages.len(), "restored transcript");

        return Some(ConversationChange::Restored(self.messages.len()));
    }

    fn persist(&self, action: Action) {
        if let Err(err) = self.persistence.send(action) {
            tracing::warn!(error = ?err.to_string(), "Unable to hand transcript to persistence worker");
        }
    }
}
