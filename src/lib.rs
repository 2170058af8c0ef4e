//! menukit: fixed-width terminal menus over named display groups.

pub mod choose;
pub mod group;
pub mod input;
pub mod node;
pub mod render;
pub mod ui;
