use super::helpers;
use crate::constants::POLE_LIGHT_COLOR;
use crate::core::{MeshVertex, NamedMeshes, SceneData};
use wgpu::util::DeviceExt;

// position + uv, matching core::MeshVertex
pub(crate) const MESH_VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> =
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 12,
                shader_location: 1,
            },
        ],
    };

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FlatParams {
    color: [f32; 4],
}

pub(crate) struct GpuMesh {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, vertices: &[MeshVertex], indices: &[u32]) -> Self {
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buf,
            index_buf,
            index_count: indices.len() as u32,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// GPU meshes for the named scene nodes. Slots the scan reported missing
/// stay `None` and are skipped at draw time.
pub(crate) struct SceneMeshes {
    baked: Option<GpuMesh>,
    pole_a: Option<GpuMesh>,
    pole_b: Option<GpuMesh>,
    pub(crate) portal: Option<GpuMesh>,
}

impl SceneMeshes {
    pub(crate) fn upload(device: &wgpu::Device, scene: &SceneData, slots: &NamedMeshes) -> Self {
        let up = |idx: Option<usize>, label: &str| {
            idx.map(|i| {
                let node = &scene.nodes[i];
                GpuMesh::upload(device, label, &node.vertices, &node.indices)
            })
        };
        Self {
            baked: up(slots.baked, "baked_mesh"),
            pole_a: up(slots.pole_light_a, "pole_light_a"),
            pole_b: up(slots.pole_light_b, "pole_light_b"),
            portal: up(slots.portal_light, "portal_light"),
        }
    }
}

/// Pipelines and materials for the static meshes: one baked-texture material
/// and one flat emissive material shared by both pole lights.
pub(crate) struct MeshPipelines {
    baked_pipeline: wgpu::RenderPipeline,
    flat_pipeline: wgpu::RenderPipeline,
    baked_bgl: wgpu::BindGroupLayout,
    baked_bg: wgpu::BindGroup,
    flat_bg: wgpu::BindGroup,
    sampler: wgpu::Sampler,
}

impl MeshPipelines {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        globals_bgl: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let baked_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("baked_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let flat_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("flat_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("baked_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // Mid-gray placeholder until the baked texture finishes decoding
        let placeholder =
            helpers::create_rgba_texture(device, queue, "baked_placeholder", 1, 1, &[90, 90, 90, 255]);
        let baked_bg = Self::texture_bind_group(device, &baked_bgl, &placeholder, &sampler);

        let flat_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("flat_params"),
            contents: bytemuck::bytes_of(&FlatParams {
                color: [
                    POLE_LIGHT_COLOR[0],
                    POLE_LIGHT_COLOR[1],
                    POLE_LIGHT_COLOR[2],
                    1.0,
                ],
            }),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let flat_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("flat_bg"),
            layout: &flat_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 2,
                resource: flat_buf.as_entire_binding(),
            }],
        });

        let make_pipeline = |label: &str, bgl: &wgpu::BindGroupLayout, fs_entry: &str| {
            let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[globals_bgl, bgl],
                push_constant_ranges: &[],
            });
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_mesh"),
                    buffers: &[MESH_VERTEX_LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(helpers::depth_state(true)),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs_entry),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };

        let baked_pipeline = make_pipeline("baked_pipeline", &baked_bgl, "fs_baked");
        let flat_pipeline = make_pipeline("flat_pipeline", &flat_bgl, "fs_flat");

        Self {
            baked_pipeline,
            flat_pipeline,
            baked_bgl,
            baked_bg,
            flat_bg,
            sampler,
        }
    }

    fn texture_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("baked_bg"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    pub(crate) fn replace_baked_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        let view = helpers::create_rgba_texture(device, queue, "baked_texture", width, height, rgba);
        self.baked_bg = Self::texture_bind_group(device, &self.baked_bgl, &view, &self.sampler);
    }

    pub(crate) fn draw(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        globals_bg: &wgpu::BindGroup,
        scene: &SceneMeshes,
    ) {
        if let Some(mesh) = &scene.baked {
            rpass.set_pipeline(&self.baked_pipeline);
            rpass.set_bind_group(0, globals_bg, &[]);
            rpass.set_bind_group(1, &self.baked_bg, &[]);
            mesh.draw(rpass);
        }
        let poles = [scene.pole_a.as_ref(), scene.pole_b.as_ref()];
        if poles.iter().any(|p| p.is_some()) {
            rpass.set_pipeline(&self.flat_pipeline);
            rpass.set_bind_group(0, globals_bg, &[]);
            rpass.set_bind_group(1, &self.flat_bg, &[]);
            for mesh in poles.into_iter().flatten() {
                mesh.draw(rpass);
            }
        }
    }
}
