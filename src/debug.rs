//! Debug gizmos
//!
//! Dev-only visualization. The controller emits draw commands into a
//! [`DebugDraw`] sink; [`GizmoBuffer`] turns them into line-list vertices a
//! host renderer can upload as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::TAU;

/// Colors for gizmos
pub mod colors {
    pub const GIZMO_YELLOW: [f32; 4] = [1.0, 0.92, 0.016, 1.0];
}

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 32;

/// Sink for debug draw commands
pub trait DebugDraw {
    fn wire_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Line vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GizmoVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl GizmoVertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Collects gizmo geometry as a line list (two vertices per segment)
#[derive(Debug, Clone, Default)]
pub struct GizmoBuffer {
    vertices: Vec<GizmoVertex>,
}

impl GizmoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[GizmoVertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl DebugDraw for GizmoBuffer {
    fn wire_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let points = circle_outline(center, radius, CIRCLE_SEGMENTS);
        self.vertices.reserve(CIRCLE_SEGMENTS * 2);
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            self.vertices.push(GizmoVertex::new(a.x, a.y, color));
            self.vertices.push(GizmoVertex::new(b.x, b.y, color));
        }
    }
}

/// Evenly spaced points on a circle, counter-clockwise from +X
pub fn circle_outline(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}
