pub mod common;
pub mod dialog;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod layout;
