#[cfg(test)]
#[path = "suggestions_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;


/// Reply suggestions shown next to the transcript.
///
/// Requests are never cancelled and may overlap; whichever response arrives
/// last replaces the list. A failed request leaves the current list as is.
#[derive(Default)]
pub struct SuggestionList {
    items: Vec<String>,
    pending: usize,
    last_error: Option<String>,
}

impl SuggestionList {
    pub fn items(&self) -> &[String] {
        return &self.items;
    }

    pub fn is_pending(&self) -> bool {
        return self.pending > 0;
    }

    pub fn last_error(&self) -> Option<&str> {
        return self.last_error.as_deref();
    }

    pub fn request(&mut self) {
        self.pending += 1;
    }

    pub fn replace(&mut self, items: Vec<String>) {
        self.pending = self.pending.saturating_sub(1);
        self.last_error = None;
        self.items = items;
    }

    pub fn fail(&mut self, error: &str) {
        self.pending = self.pending.saturating_sub(1);
        self.last_error = Some(error.to_string());
    }

    /// 1-based, matching the numbers shown on screen.
    pub fn get(&self, idx: usize) -> Option<&String> {
        if idx == 0 {
            return None;
        }

        return self.items.get(idx - 1);
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        return self
            .items()
            .iter()
            .enumerate()
            .flat_map(|(idx, item)| {
                return vec![
                    Line::from(vec![
                        Span::styled(
                            format!("({}) ", idx + 1),
                            Style {
                                fg: Some(Color::White),
                                ..Style::default()
                            },
                        ),
                        Span::from(item.to_string()),
                    ]),
                    Line::from(""),
                ];
            })
            .collect();
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect) {
        let mut title = "Suggestions".to_string();
        if self.is_pending() {
            title = "Suggestions (fetching...)".to_string();
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .padding(Padding::new(1, 1, 0, 0));

        // Nothing to show yet, keep the pane from looking idle.
        if self.is_pending() && self.items.is_empty() {
            frame.render_widget(
                Paragraph::new("Asking the recommendation service...")
                    .block(block)
                    .alignment(Alignment::Center),
                rect,
            );
            return;
        }

        let mut lines = self.as_lines();
        if lines.is_empty() {
            lines = vec![Line::from("Press CTRL+R or type /suggest to ask what to reply.")];
        }
        if let Some(err) = self.last_error() {
            lines.push(Line::from(Span::styled(
                format!("Last request failed: {err}"),
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            )));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            rect,
        );
    }
}
