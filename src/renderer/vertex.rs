//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.62, 0.82, 0.95, 1.0];
    pub const GROUND: [f32; 4] = [0.45, 0.68, 0.35, 1.0];
    pub const BORDER: [f32; 4] = [0.5, 0.5, 0.5, 1.0]; // Gray
    pub const BIRD_BODY: [f32; 4] = [0.95, 0.75, 0.2, 1.0];
    pub const BIRD_WING: [f32; 4] = [0.85, 0.55, 0.1, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [0.95, 0.45, 0.1, 1.0];
    pub const BIRD_EYE: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
    pub const SEED: [f32; 4] = [0.72, 0.5, 0.3, 1.0];
    pub const SEED_HIGHLIGHT: [f32; 4] = [0.88, 0.7, 0.5, 1.0];
    pub const START_BUTTON: [f32; 4] = [0.2, 0.7, 0.3, 1.0];
    pub const START_BUTTON_EDGE: [f32; 4] = [0.1, 0.4, 0.15, 1.0];
    pub const START_GLYPH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
