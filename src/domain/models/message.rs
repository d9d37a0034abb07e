#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Participant;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Participant,
    pub text: String,
}

impl Message {
    pub fn new(sender: Participant, text: &str) -> Message {
        return Message {
            sender,
            text: text.to_string(),
        };
    }

    /// Splits the text into display lines no wider than `line_max_width`
    /// characters, breaking on spaces. Words longer than the width are hard
    /// split.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let line_max_width = line_max_width.max(1);
        let mut lines: Vec<String> = vec![];

        for full_line in self.text.replace('\t', "  ").split('\n') {
            if full_line.trim().is_empty() {
                lines.push("".to_string());
                continue;
            }

            let mut current = String::new();
            for word in full_line.split(' ') {
                let mut word = word.to_string();
                while word.chars().count() > line_max_width {
                    if !current.is_empty() {
                        lines.push(current.trim_end().to_string());
                        current = String::new();
                    }
                    let head = word.chars().take(line_max_width).collect::<String>();
                    word = word.chars().skip(line_max_width).collect::<String>();
                    lines.push(head);
                }

                let current_len = current.chars().count();
                let word_len = word.chars().count();
                if current_len > 0 && current_len + 1 + word_len > line_max_width {
                    lines.push(current.trim_end().to_string());
                    current = String::new();
                }

                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
            }

            if !current.is_empty() {
                lines.push(current.trim_end().to_string());
            }
        }

        return lines;
    }
}

/// Record shape of the external seed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub agent: String,
    pub message: String,
}

impl From<SeedRecord> for Message {
    fn from(record: SeedRecord) -> Message {
        return Message {
            sender: Participant::from_seed_id(&record.agent),
            text: record.message,
        };
    }
}
