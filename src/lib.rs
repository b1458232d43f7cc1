//! Library entry for extman exposing core logic for integration tests.

pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;
