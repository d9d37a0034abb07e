#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use super::Transcripts;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::Recommender;
use crate::domain::models::RecommenderBox;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /agent1 (/1) - Compose messages as Agent 1.
- /agent2 (/2) - Compose messages as Agent 2.
- /switch (/s) - Swap the active sender.
- /clear - Remove every message and the saved transcript.
- /suggest (/r) [QUESTION] - Ask the recommendation service what to reply. Uses the configured question when none is given.
- /use (/u) [SUGGESTION_NUMBER] - Copy a suggestion into the message box.
- /copy (/c) - Copy the transcript to the clipboard.
- /send [MESSAGE] - Send a message as the active sender, same as pressing Enter.
- //TEXT - Send TEXT starting with a single slash instead of running it as a command.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Duologue.

HOTKEYS:
- Tab - Swap the active sender.
- Up arrow - Scroll up.
- Down arrow - Scroll down.
- CTRL+U - Page up.
- CTRL+D - Page down.
- CTRL+L - Clear the chat.
- CTRL+R - Fetch reply suggestions.
- CTRL+C - Exit Duologue.
    "#;

    return text.trim().to_string();
}

pub fn format_transcript(messages: &[Message]) -> String {
    return messages
        .iter()
        .map(|message| {
            return format!("{}: {}", message.sender, message.text);
        })
        .collect::<Vec<String>>()
        .join("\n\n");
}

/// The UI may already be gone while queued actions drain, so a closed event
/// channel only gets logged.
fn notify(tx: &mpsc::UnboundedSender<Event>, text: String) {
    if tx.send(Event::Notice(text)).is_err() {
        tracing::debug!("UI has exited, dropping notice");
    }
}

fn copy_messages(messages: Vec<Message>, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    if messages.is_empty() {
        notify(tx, "There is nothing to copy yet.".to_string());
        return Ok(());
    }

    ClipboardService::set(format_transcript(&messages))?;
    notify(tx, "Copied transcript to clipboard.".to_string());

    return Ok(());
}

async fn fetch_suggestions(
    recommender: Arc<dyn Recommender + Send + Sync>,
    question: String,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    tracing::debug!(
        recommender = recommender.name().to_string(),
        question = question,
        "requesting suggestions"
    );

    match recommender.get_suggestions(&question).await {
        Ok(suggestions) => {
            tx.send(Event::SuggestionsReceived(suggestions))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "Failed to fetch suggestions");
            tx.send(Event::SuggestionsFailed(err.to_string()))?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs until every `Action` sender is dropped, so queued saves finish
    /// even after the UI has exited.
    pub async fn start(
        recommender: RecommenderBox,
        transcripts: Transcripts,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let recommender: Arc<dyn Recommender + Send + Sync> = Arc::from(recommender);

        while let Some(action) = rx.recv().await {
            match action {
                Action::SaveTranscript(messages) => {
                    if let Err(err) = transcripts.save(&messages).await {
                        tracing::warn!(error = ?err, "Failed to save transcript");
                        notify(&tx, format!("Unable to save transcript: {err}"));
                    }
                }
                Action::ClearTranscript() => {
                    if let Err(err) = transcripts.clear().await {
                        tracing::warn!(error = ?err, "Failed to remove transcript");
                        notify(&tx, format!("Unable to remove saved transcript: {err}"));
                    }
                }
                Action::CopyMessages(messages) => {
                    if let Err(err) = copy_messages(messages, &tx) {
                        tracing::warn!(error = ?err, "Failed to copy transcript");
                        notify(&tx, format!("Unable to copy transcript: {err}"));
                    }
                }
                Action::FetchSuggestions(question) => {
                    // Overlapping requests are allowed, the UI keeps whichever lands last.
                    tokio::spawn(fetch_suggestions(recommender.clone(), question, tx.clone()));
                }
            }
        }

        return Ok(());
    }
}
