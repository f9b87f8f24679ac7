use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{Camera, DrawCmd, DrawList, GeometryId};

use super::common::{
    color_pass, create_slot, draw_bind_group_layout, position_layout, premul_alpha_blend,
    DrawUniform, GeometrySlot,
};

/// Renderer for `DrawCmd::LineLoop`.
///
/// Drawn as a line list: the open segments `(i, i + 1)` come from a static index
/// buffer built once per geometry; the closing segment `(count − 1, 0)` lives in a
/// two-index buffer rewritten per frame so partial loops still close.
#[derive(Default)]
pub struct LineLoopRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    slots: HashMap<GeometryId, LineSlot>,
}

struct LineSlot {
    geometry: GeometrySlot,
    segments_ibo: wgpu::Buffer,
    closing_ibo: wgpu::Buffer,
}

impl LineLoopRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        camera: &Camera,
    ) {
        let has_lines = draw_list
            .items()
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::LineLoop(l) if l.count >= 2));
        if !has_lines {
            return;
        }

        self.ensure_pipeline(ctx);

        let Some(layout) = self.bind_group_layout.as_ref() else { return };
        let view_proj = camera.view_projection();

        for cmd in draw_list.items() {
            let DrawCmd::LineLoop(l) = cmd else { continue };
            if l.count < 2 {
                continue;
            }

            let slot = self
                .slots
                .entry(l.geometry.id())
                .or_insert_with(|| create_line_slot(ctx, layout, l.geometry.positions()));

            let uniform = DrawUniform::new(ctx, view_proj * l.model, l.color, 1.0);
            ctx.queue.write_buffer(&slot.geometry.ubo, 0, bytemuck::bytes_of(&uniform));

            let closing = closing_segment_indices(l.count as u32);
            ctx.queue.write_buffer(&slot.closing_ibo, 0, bytemuck::cast_slice(&closing));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = color_pass(target.encoder, target.color_view, "phyllo line loop pass");
        rpass.set_pipeline(pipeline);

        for cmd in draw_list.items() {
            let DrawCmd::LineLoop(l) = cmd else { continue };
            if l.count < 2 {
                continue;
            }
            let Some(slot) = self.slots.get(&l.geometry.id()) else { continue };

            rpass.set_bind_group(0, &slot.geometry.bind_group, &[]);
            rpass.set_vertex_buffer(0, slot.geometry.vbo.slice(..));

            let open = 2 * (l.count as u32 - 1);
            rpass.set_index_buffer(slot.segments_ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..open, 0, 0..1);

            rpass.set_index_buffer(slot.closing_ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..2, 0, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("phyllo line shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/line.wgsl").into()),
        });

        let bind_group_layout = draw_bind_group_layout(ctx.device, "phyllo line bgl");

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("phyllo line pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("phyllo line pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(&VERTEX_ATTRS, wgpu::VertexStepMode::Vertex)],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.slots.clear();
    }
}

fn create_line_slot(ctx: &RenderCtx<'_>, layout: &wgpu::BindGroupLayout, positions: &[f32]) -> LineSlot {
    let point_count = (positions.len() / 3) as u32;
    log::debug!("uploading line loop geometry ({point_count} points)");

    let segments = open_segment_indices(point_count);
    let segments: &[u32] = if segments.is_empty() { &[0, 0] } else { &segments };

    LineSlot {
        geometry: create_slot(ctx, layout, "phyllo line geometry", positions),
        segments_ibo: ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("phyllo line segments ibo"),
            contents: bytemuck::cast_slice(segments),
            usage: wgpu::BufferUsages::INDEX,
        }),
        closing_ibo: ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("phyllo line closing ibo"),
            size: (2 * std::mem::size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }),
    }
}

/// `[0, 1, 1, 2, ..., n−2, n−1]`: every open segment of an `n`-point polyline.
fn open_segment_indices(n: u32) -> Vec<u32> {
    (1..n).flat_map(|i| [i - 1, i]).collect()
}

/// Segment from the last drawn vertex back to the first.
fn closing_segment_indices(count: u32) -> [u32; 2] {
    [count.saturating_sub(1), 0]
}

/// Vertex position, location 0.
const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_segments_pair_neighbours() {
        assert_eq!(open_segment_indices(4), vec![0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn open_segments_degenerate() {
        assert!(open_segment_indices(0).is_empty());
        assert!(open_segment_indices(1).is_empty());
    }

    // ── closing segment ──

    #[test]
    fn closing_segment_follows_draw_count() {
        assert_eq!(closing_segment_indices(4), [3, 0]);
        // A partial loop closes at its last drawn vertex, not the geometry's.
        assert_eq!(closing_segment_indices(2), [1, 0]);
    }

    #[test]
    fn shader_header_describes_line_list() {
        let src = include_str!("shaders/line.wgsl");
        let header: String = src.lines().take_while(|l| l.starts_with("//")).collect();
        assert!(header.contains("line list"));
        assert!(!header.contains("strip"));
    }
}
