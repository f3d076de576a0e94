//! Presentational components shared by every Dija Connect page.

pub mod components;

pub use components::*;
