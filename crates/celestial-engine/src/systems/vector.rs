//! Lyon-based line tessellation.
//!
//! Trails and other line work are stroked on the CPU into a flat triangle
//! list, so the host renderer only ever draws colored triangles.
//!
//! # Usage
//!
//! ```ignore
//! let mut vectors = VectorState::new();
//! vectors.stroke_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 1.0, Color::YELLOW);
//! vectors.stroke_polyline(&trail_points, 1.0, Color::rgb8(153, 153, 0));
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

use crate::renderer::canvas::Color;

/// Per-vertex data for line rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: Color,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// State for line tessellation.
///
/// Holds the lyon tessellator and the output vertex buffer.
/// Cleared each frame and populated by drawing commands.
pub struct VectorState {
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new() -> Self {
        Self {
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Flat float view of the tessellated triangles.
    pub fn as_floats(&self) -> &[f32] {
        &self.buffer
    }

    /// Swap the vertex buffer with `other`. Used to publish a finished frame.
    pub fn swap_buffer(&mut self, other: &mut Vec<f32>) {
        std::mem::swap(&mut self.buffer, other);
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate a single stroked segment.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.stroke_polyline(&[from, to], width, color);
    }

    /// Tessellate a stroked polyline (open path).
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: Color) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("stroke tessellation failed: {err:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}
