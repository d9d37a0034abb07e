pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod clipboard;
mod conversation;
pub mod events;
mod scroll;
mod seeds;
mod suggestions;
mod transcripts;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use conversation::*;
pub use scroll::*;
pub use seeds::*;
pub use suggestions::*;
pub use transcripts::*;
