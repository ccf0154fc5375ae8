mod component;
pub mod export;
mod render;
pub mod scene;
pub mod state;
pub mod types;

pub use component::ConceptCanvas;
pub use state::{CanvasPhase, CanvasState, ClickPolicy, DeviceSize, Point, ViewState, hit_test};
pub use types::{Concept, Connection, GraphModel, Level, RelatedConcept};
