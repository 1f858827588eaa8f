//! Terminal front end: the interactive menu plus table and message rendering.

pub mod menu;
pub mod render;
pub mod styles;
