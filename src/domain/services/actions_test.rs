use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::format_transcript;
use super::help_text;
use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::Participant;
use crate::domain::models::RecommendationError;
use crate::domain::models::Recommender;
use crate::domain::models::RecommenderName;
use crate::domain::services::Transcripts;

struct EchoRecommender {}

#[async_trait]
impl Recommender for EchoRecommender {
    fn name(&self) -> RecommenderName {
        return RecommenderName::Rag;
    }

    #[allow(clippy::implicit_return)]
    async fn get_suggestions(&self, question: &str) -> Result<Vec<String>, RecommendationError> {
        if question == "fail" {
            return Err(RecommendationError::Status(500));
        }

        return Ok(vec![format!("re: {question}")]);
    }
}

async fn run_actions(
    actions: Vec<Action>,
    transcripts: Transcripts,
) -> Result<mpsc::UnboundedReceiver<Event>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    for action in actions {
        action_tx.send(action)?;
    }
    drop(action_tx);

    ActionsService::start(
        Box::new(EchoRecommender {}),
        transcripts,
        event_tx,
        &mut action_rx,
    )
    .await?;

    return Ok(event_rx);
}

#[test]
fn it_lists_commands_in_help() {
    let text = help_text();
    assert!(text.starts_with("COMMANDS:"));
    assert!(text.contains("/suggest"));
    assert!(text.contains("HOTKEYS:"));
}

#[test]
fn it_formats_transcript() {
    let res = format_transcript(&[
        Message::new(Participant::Agent1, "Hi"),
        Message::new(Participant::Agent2, "Hello"),
    ]);

    insta::assert_snapshot!(res, @r###"
    Agent 1: Hi

    Agent 2: Hello
    "###);
}

#[tokio::test]
async fn it_saves_and_clears_transcripts() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let messages = vec![Message::new(Participant::Agent1, "Hi")];

    run_actions(
        vec![Action::SaveTranscript(messages.clone())],
        Transcripts::new(dir.path().to_path_buf()),
    )
    .await?;
    assert_eq!(
        Transcripts::new(dir.path().to_path_buf()).load().await?,
        messages
    );

    run_actions(
        vec![Action::ClearTranscript()],
        Transcripts::new(dir.path().to_path_buf()),
    )
    .await?;
    assert!(!Transcripts::new(dir.path().to_path_buf()).exists());

    return Ok(());
}

#[tokio::test]
async fn it_reports_save_failures() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "")?;

    let mut rx = run_actions(
        vec![Action::SaveTranscript(vec![Message::new(
            Participant::Agent1,
            "Hi",
        )])],
        Transcripts::new(blocker),
    )
    .await?;

    match rx.recv().await {
        Some(Event::Notice(text)) => assert!(text.starts_with("Unable to save transcript")),
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_fetches_suggestions() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut rx = run_actions(
        vec![Action::FetchSuggestions("What should I reply?".to_string())],
        Transcripts::new(dir.path().to_path_buf()),
    )
    .await?;

    match rx.recv().await {
        Some(Event::SuggestionsReceived(items)) => {
            assert_eq!(items, vec!["re: What should I reply?".to_string()]);
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_reports_suggestion_failures() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut rx = run_actions(
        vec![Action::FetchSuggestions("fail".to_string())],
        Transcripts::new(dir.path().to_path_buf()),
    )
    .await?;

    match rx.recv().await {
        Some(Event::SuggestionsFailed(err)) => {
            assert_eq!(err, "recommendation service responded with status 500");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_drains_queued_actions_after_ui_exits() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let messages = vec![
        Message::new(Participant::Agent1, "Hi"),
        Message::new(Participant::Agent2, "Hello"),
    ];

    action_tx.send(Action::CopyMessages(vec![]))?;
    action_tx.send(Action::SaveTranscript(messages[..1].to_vec()))?;
    action_tx.send(Action::SaveTranscript(messages.clone()))?;
    drop(action_tx);
    drop(event_rx);

    ActionsService::start(
        Box::new(EchoRecommender {}),
        Transcripts::new(dir.path().to_path_buf()),
        event_tx,
        &mut action_rx,
    )
    .await?;

    assert_eq!(
        Transcripts::new(dir.path().to_path_buf()).load().await?,
        messages
    );

    return Ok(());
}
