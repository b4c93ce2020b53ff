pub mod form;
pub mod history;
pub mod summary;
