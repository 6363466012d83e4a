pub mod app;
pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod storage;
pub mod terminal;
pub mod ui;
