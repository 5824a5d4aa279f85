use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::sprite::SpriteComponent;
use crate::renderer::canvas::{Canvas, Color};
use crate::systems::vector::{VectorState, VectorVertex};

/// Per-blit render data read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in canvas pixels.
    pub x: f32,
    /// Top edge in canvas pixels.
    pub y: f32,
    /// Rendered width in pixels.
    pub width: f32,
    /// Rendered height in pixels.
    pub height: f32,
    /// Sprite handle issued by the asset loader.
    pub sprite_id: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub _pad: [f32; 2],
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn blit(sprite: &SpriteComponent, top_left: Vec2) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: sprite.width as f32,
            height: sprite.height as f32,
            sprite_id: sprite.id.0 as f32,
            alpha: sprite.alpha,
            _pad: [0.0; 2],
        }
    }
}

/// Double-buffered canvas that records draw commands for the host renderer.
///
/// Blits and lines go to the back buffers. `present()` swaps them to the
/// front and bumps the frame counter, but only when something was drawn:
/// a frame with no draw commands leaves the previous frame on screen.
///
/// Everything is drawn in recording order (painter's algorithm). Blits and
/// line triangles live in separate arrays; `draw_order` records where each
/// line batch falls between blits.
pub struct RenderBuffer {
    max_instances: usize,
    max_vertices: usize,
    back_instances: Vec<RenderInstance>,
    back_vectors: VectorState,
    /// Instance count before each line batch; lets the host interleave.
    back_order: Vec<DrawSplit>,
    front_instances: Vec<RenderInstance>,
    front_vertices: Vec<f32>,
    front_order: Vec<DrawSplit>,
    dirty: bool,
    frame: u64,
    dropped: usize,
}

/// Boundary between sprite and line draws within one frame:
/// `instances` blits were recorded before the line starting at `vertex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSplit {
    pub instances: usize,
    pub vertex: usize,
}

impl RenderBuffer {
    pub fn new(max_instances: usize, max_vertices: usize) -> Self {
        Self {
            max_instances,
            max_vertices,
            back_instances: Vec::with_capacity(max_instances),
            back_vectors: VectorState::new(),
            back_order: Vec::new(),
            front_instances: Vec::with_capacity(max_instances),
            front_vertices: Vec::new(),
            front_order: Vec::new(),
            dirty: false,
            frame: 0,
            dropped: 0,
        }
    }

    /// Blits of the last presented frame, in draw order.
    pub fn instances(&self) -> &[RenderInstance] {
        &self.front_instances
    }

    pub fn instance_count(&self) -> u32 {
        self.front_instances.len() as u32
    }

    /// Raw pointer to presented instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.front_instances.as_ptr() as *const f32
    }

    /// Line triangles of the last presented frame, 6 floats per vertex.
    pub fn vertices(&self) -> &[f32] {
        &self.front_vertices
    }

    pub fn vertex_count(&self) -> u32 {
        (self.front_vertices.len() / VectorVertex::FLOATS) as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.front_vertices.as_ptr()
    }

    /// Interleaving points of the last presented frame.
    pub fn draw_order(&self) -> &[DrawSplit] {
        &self.front_order
    }

    /// Number of frames presented so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Draw commands dropped for exceeding capacity since creation.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn max_instances(&self) -> usize {
        self.max_instances
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    fn drop_command(&mut self, what: &str) {
        if self.dropped == 0 {
            log::warn!("render buffer full, dropping {what}");
        }
        self.dropped += 1;
    }
}

impl Canvas for RenderBuffer {
    fn blit(&mut self, sprite: &SpriteComponent, top_left: Vec2) {
        self.dirty = true;
        if self.back_instances.len() >= self.max_instances {
            self.drop_command("blit");
            return;
        }
        self.back_instances.push(RenderInstance::blit(sprite, top_left));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.draw_polyline(&[from, to], color, width);
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.dirty = true;
        let before = self.back_vectors.vertex_count();
        let split = DrawSplit {
            instances: self.back_instances.len(),
            vertex: before,
        };
        if self.back_order.last() != Some(&split) {
            self.back_order.push(split);
        }
        self.back_vectors.stroke_polyline(points, width, color);
        if self.back_vectors.vertex_count() > self.max_vertices {
            let mut floats = Vec::new();
            self.back_vectors.swap_buffer(&mut floats);
            floats.truncate(before * VectorVertex::FLOATS);
            self.back_vectors.swap_buffer(&mut floats);
            self.drop_command("line");
        }
    }

    fn present(&mut self) {
        if !self.dirty {
            return;
        }
        std::mem::swap(&mut self.back_instances, &mut self.front_instances);
        std::mem::swap(&mut self.back_order, &mut self.front_order);
        self.back_vectors.swap_buffer(&mut self.front_vertices);
        self.back_instances.clear();
        self.back_order.clear();
        self.back_vectors.clear();
        self.dirty = false;
        self.frame += 1;
    }
}
