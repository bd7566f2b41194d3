pub mod graph;
pub mod scale;

pub use graph::{GraphState, GraphView};
pub use scale::{axis_scale, AxisScale};
