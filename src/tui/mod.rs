//! Terminal front end: a config menu and a live growth-curve view.

pub mod app;
pub mod controller;
mod ui;
