#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Message;
use crate::domain::models::Participant;

pub const AVATAR: &str = "●";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    /// Someone else speaking: avatar before the bubble.
    Left,
    /// The active sender speaking: avatar after the bubble.
    Right,
}

impl BubbleAlignment {
    /// Own messages are the ones sent by whoever is currently active. This is
    /// recomputed on every render, switching the active sender flips every
    /// bubble.
    pub fn classify(message: &Message, active_sender: Participant) -> BubbleAlignment {
        if message.sender == active_sender {
            return BubbleAlignment::Right;
        }

        return BubbleAlignment::Left;
    }
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub avatar_length: usize,
    pub border_elements_length: usize,
    pub scrollbar_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat(text: &str, count: usize) -> String {
    return [text].repeat(count).join("");
}

fn char_len(text: &str) -> usize {
    return text.chars().count();
}

fn avatar_colour(participant: Participant) -> Color {
    match participant {
        Participant::Agent1 => return Color::Blue,
        Participant::Agent2 => return Color::Magenta,
    }
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            avatar_length: 2,
            // left border + left padding + (text, not counted) + right padding + right border.
            border_elements_length: 4,
            scrollbar_length: 1,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let text_width = self.get_text_width();
        let text_lines = self.message.as_string_lines(text_width);
        let max_line_length = self.get_max_line_length(&text_lines);

        let mut lines = vec![self.top_line(max_line_length)];
        for line in text_lines {
            let fill = repeat(" ", max_line_length.saturating_sub(char_len(&line)));
            lines.push(self.wrap_line(
                vec![
                    self.highlight_span("│ ".to_string()),
                    self.highlight_span(line),
                    self.highlight_span(format!("{fill} │")),
                ],
                max_line_length,
                false,
            ));
        }

        let bottom_bar = format!("╰{}╯", repeat("─", max_line_length + 2));
        lines.push(self.wrap_line(
            vec![self.highlight_span(bottom_bar)],
            max_line_length,
            false,
        ));

        return lines;
    }

    fn top_line(&self, max_line_length: usize) -> Line<'static> {
        let name = self.message.sender.to_string();
        let bar = repeat("─", (max_line_length + 2).saturating_sub(char_len(&name)));
        let top_bar = format!("╭{name}{bar}╮");

        return self.wrap_line(vec![self.highlight_span(top_bar)], max_line_length, true);
    }

    /// Places the avatar column and the outer padding around one bubble row.
    fn wrap_line(
        &self,
        mut spans: Vec<Span<'static>>,
        max_line_length: usize,
        with_avatar: bool,
    ) -> Line<'static> {
        let style_config = Bubble::style_config();
        let bubble_length = max_line_length + style_config.border_elements_length;
        let outer_padding = Span::from(repeat(
            " ",
            self.window_max_width
                .saturating_sub(bubble_length + style_config.avatar_length),
        ));

        let avatar = if with_avatar {
            Span::styled(
                AVATAR.to_string(),
                Style {
                    fg: Some(avatar_colour(self.message.sender)),
                    ..Style::default()
                },
            )
        } else {
            Span::from(" ")
        };

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![avatar, Span::from(" ")];
            res.append(&mut spans);
            res.push(outer_padding);
            return Line::from(res);
        }

        let mut res = vec![outer_padding];
        res.append(&mut spans);
        res.push(Span::from(" "));
        res.push(avatar);
        return Line::from(res);
    }

    fn get_text_width(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        let reserved = style_config.border_elements_length
            + style_config.avatar_length
            + style_config.scrollbar_length
            + min_bubble_padding_length;

        return self.window_max_width.saturating_sub(reserved).max(1);
    }

    fn get_max_line_length(&self, text_lines: &[String]) -> usize {
        let longest = text_lines
            .iter()
            .map(|line| return char_len(line))
            .max()
            .unwrap_or(0);

        return longest.max(char_len(&self.message.sender.to_string()));
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.alignment == BubbleAlignment::Right {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Cyan),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }
}
