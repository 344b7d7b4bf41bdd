use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{ColorRgba, Viewport};
use crate::geometry::{Mesh, Vertex};
use crate::math::Matrix3;
use crate::render::{RenderCtx, RenderError, RenderTarget};
use crate::scene::{ResolvedDraw, Scene};

const MESH_WGSL: &str = include_str!("shaders/mesh.wgsl");

/// Renderer for the drawables of a `Scene`.
///
/// Geometry is uploaded once per drawable; the uniform bundle is rewritten
/// every frame from the freshly resolved transforms.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    meshes: Vec<GpuMesh>,
}

/// GPU-resident state of one drawable.
struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the pipeline (on first use or after a surface format change)
    /// and uploads meshes for any drawables that have none yet.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) -> Result<(), RenderError> {
        self.ensure_pipeline(ctx)?;
        self.ensure_meshes(ctx, scene);
        Ok(())
    }

    /// Draws `draws` in order into `target`.
    ///
    /// `prepare` must have been called for the scene the draws were resolved from.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draws: &[ResolvedDraw],
    ) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        for d in draws {
            let Some(mesh) = self.meshes.get(d.index) else { continue };
            let uniform = DrawUniform::new(&d.transform, ctx.viewport, d.color);
            ctx.queue.write_buffer(&mesh.ubo, 0, bytemuck::bytes_of(&uniform));
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("smiley mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
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
        });

        rpass.set_pipeline(pipeline);

        for d in draws {
            let Some(mesh) = self.meshes.get(d.index) else { continue };
            if mesh.index_count == 0 {
                continue;
            }
            rpass.set_bind_group(0, &mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) -> Result<(), RenderError> {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return Ok(());
        }

        let shader = compile_shader(ctx.device, "smiley mesh shader", MESH_WGSL)?;

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("smiley mesh bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(uniform_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("smiley mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("smiley mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // Negative scales mirror the winding, so nothing is culled.
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

        log::debug!("mesh pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        // Bind groups reference the old layout.
        self.meshes.clear();
        Ok(())
    }

    fn ensure_meshes(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        if self.meshes.len() == scene.len() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        self.meshes = scene
            .iter()
            .map(|o| upload_mesh(ctx, bgl, o.id().0, o.mesh()))
            .collect();

        log::info!("uploaded {} meshes", self.meshes.len());
    }
}

fn upload_mesh(ctx: &RenderCtx<'_>, bgl: &wgpu::BindGroupLayout, name: &str, mesh: &Mesh) -> GpuMesh {
    // Zero-sized buffers are invalid; an empty mesh gets one placeholder element.
    const EMPTY_VERTICES: [Vertex; 1] = [Vertex::new([0.0; 2], [0.0; 4])];
    const EMPTY_INDICES: [u16; 2] = [0, 0];

    let vertices: &[Vertex] = if mesh.vertices.is_empty() { &EMPTY_VERTICES } else { &mesh.vertices };
    let indices: &[u16] = if mesh.indices.is_empty() { &EMPTY_INDICES } else { &mesh.indices };

    let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("smiley {name} vbo")),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    // Index buffers must be a multiple of 4 bytes.
    let mut padded: Vec<u16> = indices.to_vec();
    if padded.len() % 2 == 1 {
        padded.push(0);
    }
    let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("smiley {name} ibo")),
        contents: bytemuck::cast_slice(&padded),
        usage: wgpu::BufferUsages::INDEX,
    });

    let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("smiley {name} ubo")),
        size: std::mem::size_of::<DrawUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("smiley {name} bind group")),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: ubo.as_entire_binding(),
        }],
    });

    GpuMesh {
        vbo,
        ibo,
        index_count: mesh.indices.len() as u32,
        ubo,
        bind_group,
    }
}

/// Creates a WGSL module, failing with [`RenderError::ShaderCompilationFailed`]
/// when the source does not validate.
///
/// Validation errors are caught in an error scope so they never reach the
/// device's uncaptured-error handler. Compilation messages supply the detail.
fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let scope_error = pollster::block_on(scope.pop());

    let info = pollster::block_on(shader.get_compilation_info());

    let mut errors = Vec::new();
    for m in &info.messages {
        match m.message_type {
            wgpu::CompilationMessageType::Error => errors.push(match &m.location {
                Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, m.message),
                None => m.message.clone(),
            }),
            wgpu::CompilationMessageType::Warning => log::warn!("{label}: {}", m.message),
            wgpu::CompilationMessageType::Info => log::debug!("{label}: {}", m.message),
        }
    }

    match scope_error {
        Some(err) if errors.is_empty() => Err(RenderError::ShaderCompilationFailed(err.to_string())),
        Some(_) => Err(RenderError::ShaderCompilationFailed(errors.join("\n"))),
        None if !errors.is_empty() => Err(RenderError::ShaderCompilationFailed(errors.join("\n"))),
        None => Ok(shader),
    }
}

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64)
        .expect("DrawUniform has non-zero size by construction")
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Per-draw uniform layout (80 bytes):
///
///  offset  0  transform  mat3x3<f32>  (three 16-byte columns)
///  offset 48  resolution vec2<f32>
///  offset 56  _pad
///  offset 64  color      vec4<f32>
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DrawUniform {
    pub transform: [[f32; 4]; 3],
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
    pub color: [f32; 4],
}

impl DrawUniform {
    pub fn new(transform: &Matrix3, viewport: Viewport, color: ColorRgba) -> Self {
        Self {
            transform: transform.to_padded_columns(),
            resolution: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
            color: color.to_array(),
        }
    }
}
