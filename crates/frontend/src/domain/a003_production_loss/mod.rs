pub mod api;
pub mod mutation;
pub mod ui;
