//! Greetdeck - a terminal sample app demonstrating UI state restoration
//!
//! This library exposes modules for use in integration tests.

pub mod anim;
pub mod app;
pub mod cli;
pub mod state;
pub mod storage;
pub mod strings;
pub mod ui;
