use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{Camera, DrawCmd, DrawList};

use super::common::{
    color_pass, create_slot, draw_bind_group_layout, position_layout, premul_alpha_blend,
    DrawUniform, SlotCache,
};

/// Renderer for `DrawCmd::Points`.
///
/// Each point is an instanced screen-aligned square whose size is given in scene
/// units, so sprites shrink with distance from the camera. Only the first
/// `count` points of the geometry are instanced.
#[derive(Default)]
pub struct PointsRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    slots: SlotCache,
}

impl PointsRenderer {
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
        let has_points = draw_list
            .items()
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::Points(p) if p.count > 0));
        if !has_points {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);

        let Some(layout) = self.bind_group_layout.as_ref() else { return };
        let view_proj = camera.view_projection();

        // Upload pass: create missing slots and refresh uniforms before recording.
        for cmd in draw_list.items() {
            let DrawCmd::Points(p) = cmd else { continue };
            if p.count == 0 {
                continue;
            }

            let slot = self.slots.entry(p.geometry.id()).or_insert_with(|| {
                log::debug!("uploading point geometry {:?} ({} points)", p.geometry.id(), p.geometry.point_count());
                create_slot(ctx, layout, "phyllo points geometry", p.geometry.positions())
            });

            let uniform = DrawUniform::new(ctx, view_proj * p.model, p.color, p.size);
            ctx.queue.write_buffer(&slot.ubo, 0, bytemuck::bytes_of(&uniform));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = color_pass(target.encoder, target.color_view, "phyllo points pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        for cmd in draw_list.items() {
            let DrawCmd::Points(p) = cmd else { continue };
            if p.count == 0 {
                continue;
            }
            let Some(slot) = self.slots.get(&p.geometry.id()) else { continue };

            rpass.set_bind_group(0, &slot.bind_group, &[]);
            rpass.set_vertex_buffer(1, slot.vbo.slice(..));
            rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..p.count as u32);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("phyllo points shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/points.wgsl").into()),
        });

        let bind_group_layout = draw_bind_group_layout(ctx.device, "phyllo points bgl");

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("phyllo points pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("phyllo points pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    QuadVertex::layout(),
                    position_layout(&INSTANCE_ATTRS, wgpu::VertexStepMode::Instance),
                ],
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
                topology: wgpu::PrimitiveTopology::TriangleList,
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
        // Bind groups were built against the old layout.
        self.slots.clear();
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("phyllo points quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("phyllo points quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Per-instance point center, location 1.
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
