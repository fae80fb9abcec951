#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]

pub mod site;
pub mod storage;
pub mod theme;
pub mod tui;
