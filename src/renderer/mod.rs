//! WebGPU rendering module
//!
//! The scene is rebuilt as a flat-coloured triangle list every frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use pipeline::RenderState;
pub use viewport::{FieldTransform, Viewport};
