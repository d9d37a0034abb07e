#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::ConversationChange;
use super::ConversationStore;
use super::Scroll;
use super::Seeds;
use super::SuggestionList;
use super::Transcripts;
use crate::domain::models::Action;
use crate::domain::models::Participant;
use crate::domain::models::SlashCommand;

/// What the composer should do after a submit.
#[derive(Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Quit,
    Clear,
    Keep,
    Replace(String),
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub conversation: ConversationStore,
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub notice: Option<String>,
    pub question: String,
    pub scroll: Scroll,
    pub show_help: bool,
    pub suggestions: SuggestionList,
    tx: mpsc::UnboundedSender<Action>,
}

impl AppState {
    pub fn new(question: &str, tx: mpsc::UnboundedSender<Action>) -> AppState {
        return AppState {
            bubble_list: BubbleList::default(),
            conversation: ConversationStore::new(tx.clone()),
            last_known_height: 0,
            last_known_width: 0,
            notice: None,
            question: question.to_string(),
            scroll: Scroll::default(),
            show_help: false,
            suggestions: SuggestionList::default(),
            tx,
        };
    }

    /// Seeds win over the saved transcript. A failing seed leaves the log
    /// empty rather than falling back, mirroring a page whose seed fetch
    /// failed.
    pub async fn hydrate(&mut self, seed_location: &str, transcripts: &Transcripts) {
        if !seed_location.trim().is_empty() {
            match Seeds::load(seed_location).await {
                Ok(records) => {
                    let change = self.conversation.load_seed(records);
                    self.apply(change);
                }
                Err(err) => {
                    tracing::warn!(error = ?err, seed = seed_location, "Failed to load seed data");
                    self.notice = Some(format!("Unable to load seed data: {err}"));
                }
            }
            return;
        }

        match transcripts.load().await {
            Ok(messages) => {
                let change = self.conversation.restore(messages);
                self.apply(change);
            }
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to restore transcript");
                self.notice = Some(format!("Unable to restore saved transcript: {err}"));
            }
        }
    }

    pub fn active_sender(&self) -> Participant {
        return self.conversation.active_sender();
    }

    /// Single subscriber for store changes.
    pub fn apply(&mut self, change: Option<ConversationChange>) -> bool {
        let Some(change) = change else {
            return false;
        };

        self.sync_dependants();
        match change {
            ConversationChange::Appended
            | ConversationChange::Seeded(_)
            | ConversationChange::Restored(_) => {
                self.scroll.last();
            }
            ConversationChange::Cleared | ConversationChange::SenderChanged(_) => {}
        }

        return true;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        self.sync_dependants();
    }

    pub fn toggle_active_sender(&mut self) {
        let change = self.conversation.toggle_active_sender();
        self.apply(change);
    }

    pub fn clear_chat(&mut self) {
        let change = self.conversation.clear();
        self.apply(change);
    }

    pub fn request_suggestions(&mut self, question: Option<String>) -> Result<()> {
        let question = question
            .filter(|q| return !q.trim().is_empty())
            .unwrap_or_else(|| return self.question.clone());

        self.suggestions.request();
        self.tx.send(Action::FetchSuggestions(question))?;

        return Ok(());
    }

    pub fn handle_suggestions(&mut self, items: Vec<String>) {
        self.suggestions.replace(items);
    }

    pub fn handle_suggestions_failed(&mut self, err: &str) {
        tracing::error!(error = err, "Suggestion request failed");
        self.suggestions.fail(err);
    }

    /// Handles one submit of the composer. Both Enter and slash commands end
    /// up here so a single keypress is only ever applied once.
    pub fn submit(&mut self, text: &str) -> Result<InputOutcome> {
        self.show_help = false;

        if let Some(literal) = SlashCommand::unescape(text) {
            return Ok(self.send_message(&literal));
        }

        if let Some(command) = SlashCommand::parse(text) {
            return self.handle_slash_command(command);
        }

        return Ok(self.send_message(text));
    }

    /// Blank text is rejected and leaves the composer as is.
    fn send_message(&mut self, text: &str) -> InputOutcome {
        let change = self
            .conversation
            .append_message(self.conversation.active_sender(), text);
        if !self.apply(change) {
            return InputOutcome::Keep;
        }

        return InputOutcome::Clear;
    }

    fn handle_slash_command(&mut self, command: SlashCommand) -> Result<InputOutcome> {
        if command.is_quit() {
            return Ok(InputOutcome::Quit);
        }

        if command.is_agent_1() || command.is_agent_2() {
            let change = self
                .conversation
                .set_active_sender_by_name(command.participant_position());
            self.apply(change);
            return Ok(InputOutcome::Clear);
        }

        if command.is_switch() {
            self.toggle_active_sender();
            return Ok(InputOutcome::Clear);
        }

        if command.is_clear() {
            self.clear_chat();
            return Ok(InputOutcome::Clear);
        }

        if command.is_suggest() {
            self.request_suggestions(Some(command.rest()))?;
            return Ok(InputOutcome::Clear);
        }

        if command.is_use_suggestion() {
            let suggestion = command.args[0]
                .parse::<usize>()
                .ok()
                .and_then(|idx| return self.suggestions.get(idx).cloned());

            if let Some(text) = suggestion {
                return Ok(InputOutcome::Replace(text));
            }

            self.notice = Some(format!(
                "{} is not a valid suggestion number.",
                command.args[0]
            ));
            return Ok(InputOutcome::Keep);
        }

        if command.is_copy_chat() {
            self.tx.send(Action::CopyMessages(
                self.conversation.messages().to_vec(),
            ))?;
            return Ok(InputOutcome::Clear);
        }

        if command.is_send() {
            return Ok(self.send_message(&command.rest()));
        }

        if command.is_help() {
            self.show_help = true;
            return Ok(InputOutcome::Clear);
        }

        return Ok(InputOutcome::Keep);
    }

    fn sync_dependants(&mut self) {
        self.bubble_list.set_messages(
            self.conversation.messages(),
            self.conversation.active_sender(),
            self.last_known_width,
        );

        self.scroll
            .set_state(self.bubble_list.len(), self.last_known_height);
    }
}
