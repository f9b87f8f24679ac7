//! Shared GPU types and utilities used by the shape renderers.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::coords::Mat4;
use crate::paint::Color;
use crate::render::RenderCtx;
use crate::scene::GeometryId;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── per-draw uniform ──────────────────────────────────────────────────────

/// Uniform block shared by the point and line shaders (96 bytes).
///
///  offset  0  mvp     mat4x4<f32>
///  offset 64  color   vec4<f32>   premultiplied, surface color space
///  offset 80  params  vec4<f32>   .x = point size, .y = height / width
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct DrawUniform {
    pub mvp: [f32; 16],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl DrawUniform {
    pub(super) fn new(ctx: &RenderCtx<'_>, mvp: Mat4, color: Color, point_size: f32) -> Self {
        Self {
            mvp: mvp.to_cols_array(),
            color: ctx.surface_color(color).to_array(),
            params: [point_size.max(0.0), ctx.inv_aspect(), 0.0, 0.0],
        }
    }
}

/// Returns the `wgpu` minimum binding size for the draw uniform buffer.
pub(super) fn draw_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64)
}

pub(super) fn draw_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: draw_ubo_min_binding_size(),
            },
            count: None,
        }],
    })
}

// ── per-geometry GPU slot ─────────────────────────────────────────────────

/// GPU resources for one uploaded geometry: vertex data + its draw uniform.
///
/// Geometry positions are immutable per id, so the vertex buffer is written once.
/// The uniform is rewritten every frame the geometry is drawn.
pub(super) struct GeometrySlot {
    pub vbo: wgpu::Buffer,
    pub ubo: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

pub(super) type SlotCache = HashMap<GeometryId, GeometrySlot>;

pub(super) fn create_slot(
    ctx: &RenderCtx<'_>,
    layout: &wgpu::BindGroupLayout,
    label: &str,
    vertices: &[f32],
) -> GeometrySlot {
    use wgpu::util::DeviceExt;

    // Empty geometries still get a non-zero buffer so binding stays valid.
    let contents: &[f32] = if vertices.is_empty() { &[0.0; 3] } else { vertices };

    let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(contents),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<DrawUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: ubo.as_entire_binding(),
        }],
    });

    GeometrySlot { vbo, ubo, bind_group }
}

pub(super) fn color_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    view: &'e wgpu::TextureView,
    label: &str,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}

/// `Float32x3` position layout at `location`, stepping per `step_mode`.
pub(super) fn position_layout(
    attrs: &'static [wgpu::VertexAttribute],
    step_mode: wgpu::VertexStepMode,
) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (3 * std::mem::size_of::<f32>()) as u64,
        step_mode,
        attributes: attrs,
    }
}
