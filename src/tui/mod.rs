//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Screen, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Colors and styles
//! - `run`: Effects (terminal, key input, window title)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
