mod command;
mod responder;
mod view;

pub use command::ChatCommand;
pub use responder::ChatResponder;
pub use view::{BoardView, CellButton, legal_moves};
