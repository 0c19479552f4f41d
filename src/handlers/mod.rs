pub mod callbacks;
pub mod commands;
pub mod utils;

pub use callbacks::callback_handler;
pub use commands::command_handler;
