//! Session state shared by every view

mod state;

pub use state::{Session, Screen, View, Message, MessageCategory};
