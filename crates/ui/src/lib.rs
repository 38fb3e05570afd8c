pub mod theme;
pub mod visualizer;
pub mod widgets;
