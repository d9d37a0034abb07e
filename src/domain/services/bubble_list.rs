#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Message;
use crate::domain::models::Participant;

/// Transcript lines for the current log. Rebuilt from scratch on every
/// change so alignment always reflects the current active sender.
#[derive(Default)]
pub struct BubbleList {
    lines: Vec<Line<'static>>,
}

impl BubbleList {
    pub fn render_lines(
        messages: &[Message],
        active_sender: Participant,
        line_width: usize,
    ) -> Vec<Line<'static>> {
        return messages
            .iter()
            .flat_map(|message| {
                let alignment = BubbleAlignment::classify(message, active_sender);
                return Bubble::new(message, alignment, line_width).as_lines();
            })
            .collect();
    }

    pub fn set_messages(
        &mut self,
        messages: &[Message],
        active_sender: Participant,
        line_width: usize,
    ) {
        self.lines = BubbleList::render_lines(messages, active_sender, line_width);
    }

    pub fn lines(&self) -> &[Line<'static>] {
        return &self.lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, scroll: usize) {
        let mut paragraph = Paragraph::new(self.lines().to_vec());
        if self.is_empty() {
            paragraph = Paragraph::new("No messages yet.");
        }

        frame.render_widget(
            paragraph
                .block(Block::default().borders(Borders::NONE))
                .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
            rect,
        );
    }
}
