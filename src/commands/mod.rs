pub mod add;
pub mod app;
pub mod delete;
pub mod edit;
pub mod list;
