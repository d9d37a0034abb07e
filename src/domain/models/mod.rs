mod action;
mod event;
mod message;
mod participant;
mod recommender;
mod slash_commands;
mod textarea;

pub use action::*;
pub use event::*;
pub use message::*;
pub use participant::*;
pub use recommender::*;
pub use slash_commands::*;
pub use textarea::*;
