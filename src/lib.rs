pub mod app;
pub mod config;
pub mod form;
pub mod gateway;
pub mod shared;
pub mod terminal;
pub mod tui;
