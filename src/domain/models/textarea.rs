use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

use super::Participant;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn new(sender: Participant) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        TextArea::set_sender(&mut textarea, sender);

        return textarea;
    }

    /// The composer title doubles as the placeholder, so it follows whoever
    /// is currently speaking.
    pub fn set_sender(textarea: &mut tui_textarea::TextArea<'a>, sender: Participant) {
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(format!("Type a message as {sender}..."))
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.set_placeholder_text(format!("Type a message as {sender}..."));
    }
}
