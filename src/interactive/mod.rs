//! Interactive TUI front end
//!
//! The only component that knows about terminals, colours and timing. It
//! drives one `GuessEngine` per round and polls it after every key press.

mod app;
mod rendering;

pub use app::{
    Action, App, Dialog, Message, MessageStyle, RESTART_DELAY, WARNING_DURATION, Warning, run_tui,
};
