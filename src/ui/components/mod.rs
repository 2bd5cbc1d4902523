//! Reusable widgets for the lookup UI.

mod calculator;
mod rows;
mod scrollbar;
mod tables;
mod tabs;

pub(crate) use calculator::render_calculator;
pub(crate) use rows::build_class_rows;
pub(crate) use scrollbar::render_scrollbar;
pub(crate) use tables::{TABLE_HEADER_ROWS, TableSpec, render_table, visible_rows};
pub(crate) use tabs::{InputContext, render_input, render_tabs};
