use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::ConversationChange;
use super::ConversationStore;
use crate::domain::models::Action;
use crate::domain::models::Message;
use crate::domain::models::Participant;
use crate::domain::models::SeedRecord;

fn new_store() -> (ConversationStore, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel::<Action>();
    return (ConversationStore::new(tx), rx);
}

fn seed(agent: &str, message: &str) -> SeedRecord {
    return SeedRecord {
        agent: agent.to_string(),
        message: message.to_string(),
    };
}

#[test]
fn it_starts_empty_with_agent_1() {
    let (store, _rx) = new_store();
    assert!(store.messages().is_empty());
    assert_eq!(store.active_sender(), Participant::Agent1);
}

#[test]
fn it_appends_and_persists() -> Result<()> {
    let (mut store, mut rx) = new_store();

    let change = store.append_message(Participant::Agent1, "Hello there");

    assert_eq!(change, Some(ConversationChange::Appended));
    assert_eq!(store.messages().len(), 1);
    assert_eq!(
        store.messages().last().unwrap(),
        &Message::new(Participant::Agent1, "Hello there")
    );

    match rx.try_recv()? {
        Action::SaveTranscript(messages) => {
            assert_eq!(messages, store.messages().to_vec());
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_persists_the_full_log_each_append() -> Result<()> {
    let (mut store, mut rx) = new_store();
    store.append_message(Participant::Agent1, "one");
    store.append_message(Participant::Agent2, "two");

    let _first = rx.try_recv()?;
    match rx.try_recv()? {
        Action::SaveTranscript(messages) => {
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[1], Message::new(Participant::Agent2, "two"));
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_ignores_blank_text() {
    let (mut store, mut rx) = new_store();
    store.append_message(Participant::Agent1, "kept");
    let _ = rx.try_recv();

    assert_eq!(store.append_message(Participant::Agent1, ""), None);
    assert_eq!(store.append_message(Participant::Agent2, "   "), None);
    assert_eq!(store.append_message(Participant::Agent2, "\n\t"), None);

    assert_eq!(store.messages().len(), 1);
    assert!(rx.try_recv().is_err());
}

#[test]
fn it_keeps_text_untrimmed() {
    let (mut store, _rx) = new_store();
    store.append_message(Participant::Agent2, "  spaced  ");
    assert_eq!(store.messages()[0].text, "  spaced  ");
}

#[test]
fn it_keeps_appending_when_persistence_is_gone() {
    let (mut store, rx) = new_store();
    drop(rx);

    let change = store.append_message(Participant::Agent1, "still here");

    assert_eq!(change, Some(ConversationChange::Appended));
    assert_eq!(store.messages().len(), 1);
}

#[test]
fn it_clears_and_removes_persisted_copy() -> Result<()> {
    let (mut store, mut rx) = new_store();
    store.set_active_sender(Participant::Agent2);
    store.append_message(Participant::Agent2, "bye");
    let _ = rx.try_recv()?;

    let change = store.clear();

    assert_eq!(change, Some(ConversationChange::Cleared));
    assert!(store.messages().is_empty());
    assert_eq!(store.active_sender(), Participant::Agent2);
    match rx.try_recv()? {
        Action::ClearTranscript() => {}
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_clears_an_empty_log() -> Result<()> {
    let (mut store, mut rx) = new_store();
    store.clear();

    assert!(store.messages().is_empty());
    assert!(matches!(rx.try_recv()?, Action::ClearTranscript()));

    return Ok(());
}

#[test]
fn it_sets_active_sender() {
    let (mut store, _rx) = new_store();
    let change = store.set_active_sender(Participant::Agent2);

    assert_eq!(
        change,
        Some(ConversationChange::SenderChanged(Participant::Agent2))
    );
    assert_eq!(store.active_sender(), Participant::Agent2);
}

#[test]
fn it_ignores_unknown_sender_names() {
    let (mut store, _rx) = new_store();
    store.set_active_sender(Participant::Agent2);

    assert_eq!(store.set_active_sender_by_name("Agent 3"), None);
    assert_eq!(store.set_active_sender_by_name(""), None);
    assert_eq!(store.active_sender(), Participant::Agent2);

    assert!(store.set_active_sender_by_name("Agent 1").is_some());
    assert_eq!(store.active_sender(), Participant::Agent1);
}

#[test]
fn it_toggles_active_sender() {
    let (mut store, _rx) = new_store();
    store.toggle_active_sender();
    assert_eq!(store.active_sender(), Participant::Agent2);
    store.toggle_active_sender();
    assert_eq!(store.active_sender(), Participant::Agent1);
}

#[test]
fn it_loads_seed_without_persisting() {
    let (mut store, mut rx) = new_store();

    let change = store.load_seed(vec![seed("agent_1", "hi")]);

    assert_eq!(change, Some(ConversationChange::Seeded(1)));
    assert_eq!(
        store.messages().to_vec(),
        vec![Message::new(Participant::Agent1, "hi")]
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn it_replaces_log_with_seed() {
    let (mut store, _rx) = new_store();
    store.append_message(Participant::Agent1, "old");

    store.load_seed(vec![seed("agent_2", "new"), seed("robot", "also new")]);

    assert_eq!(
        store.messages().to_vec(),
        vec![
            Message::new(Participant::Agent2, "new"),
            Message::new(Participant::Agent2, "also new"),
        ]
    );
}

#[test]
fn it_restores_without_persisting() {
    let (mut store, mut rx) = new_store();
    let messages = vec![
        Message::new(Participant::Agent1, "a"),
        Message::new(Participant::Agent2, "b"),
    ];

    let change = store.restore(messages.clone());

    assert_eq!(change, Some(ConversationChange::Restored(2)));
    assert_eq!(store.messages().to_vec(), messages);
    assert!(rx.try_recv().is_err());
}
