#[cfg(test)]
#[path = "participant_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::IntoEnumIterator;

/// One of the two sides of the conversation. There is no third
/// variant; anything that can't be mapped to one of these is rejected at the
/// edges.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize, strum::Display,
)]
pub enum Participant {
    #[default]
    #[serde(rename = "Agent 1")]
    #[strum(serialize = "Agent 1")]
    Agent1,
    #[serde(rename = "Agent 2")]
    #[strum(serialize = "Agent 2")]
    Agent2,
}

impl Participant {
    /// Identifier used by seed documents.
    pub fn seed_id(&self) -> &'static str {
        match self {
            Participant::Agent1 => return "agent_1",
            Participant::Agent2 => return "agent_2",
        }
    }

    /// Seed documents only ever name the first participant explicitly, every
    /// other value belongs to the second.
    pub fn from_seed_id(agent: &str) -> Participant {
        if agent == Participant::Agent1.seed_id() {
            return Participant::Agent1;
        }

        return Participant::Agent2;
    }

    /// Strict lookup by display name, seed id or position.
    pub fn parse(text: &str) -> Option<Participant> {
        let text = text.trim();
        return Participant::iter().enumerate().find_map(|(idx, participant)| {
            let position = (idx + 1).to_string();
            if text.eq_ignore_ascii_case(&participant.to_string())
                || text == participant.seed_id()
                || text == position
            {
                return Some(participant);
            }

            return None;
        });
    }

    pub fn other(&self) -> Participant {
        match self {
            Participant::Agent1 => return Participant::Agent2,
            Participant::Agent2 => return Participant::Agent1,
        }
    }
}
