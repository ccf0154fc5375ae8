//! UI components: the concept canvas and its side panels.

pub mod concept_canvas;
pub mod details;
pub mod legend;
