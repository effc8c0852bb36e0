use crate::core::{FireflyEffect, FireflyField, NamedMeshes, PortalEffect, SceneData};
use glam::Mat4;
use web_sys as web;

mod fireflies;
mod helpers;
mod meshes;
mod portal;

use fireflies::FireflyResources;
use meshes::{MeshPipelines, SceneMeshes};
use portal::PortalResources;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
}

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    meshes: MeshPipelines,
    portal: PortalResources,
    fireflies: FireflyResources,

    // Populated once the scene asset arrives; rendering proceeds without it
    scene: Option<SceneMeshes>,

    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        field: &FireflyField,
        clear_color: [f32; 3],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = helpers::create_depth_view(&device, width, height);

        let globals_buf = helpers::create_uniform_buffer::<Globals>(&device, "globals");
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });

        let meshes = MeshPipelines::new(&device, &queue, &globals_bgl, format);
        let portal = PortalResources::new(&device, &globals_bgl, format);
        let fireflies = FireflyResources::new(&device, format, field);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buf,
            globals_bg,
            meshes,
            portal,
            fireflies,
            scene: None,
            depth_view,
            width,
            height,
            clear_color: color_from_rgb(clear_color),
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = helpers::create_depth_view(&self.device, width, height);
        }
    }

    pub fn set_clear_color(&mut self, rgb: [f32; 3]) {
        self.clear_color = color_from_rgb(rgb);
    }

    /// Upload the decoded baked texture, replacing the placeholder bound at
    /// startup. Safe to call before or after the scene mesh arrives.
    pub fn set_baked_texture(&mut self, width: u32, height: u32, rgba: &[u8]) {
        self.meshes
            .replace_baked_texture(&self.device, &self.queue, width, height, rgba);
    }

    /// Upload scene meshes and wire each named node to its pipeline. Missing
    /// nodes were already reported during the scan; they simply stay absent.
    pub fn attach_scene(&mut self, scene: &SceneData, slots: &NamedMeshes) {
        self.scene = Some(SceneMeshes::upload(&self.device, scene, slots));
    }

    pub fn render(
        &mut self,
        view_proj: Mat4,
        portal_fx: &PortalEffect,
        firefly_fx: &FireflyEffect,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue.write_buffer(
            &self.globals_buf,
            0,
            bytemuck::bytes_of(&Globals {
                view_proj: view_proj.to_cols_array_2d(),
            }),
        );
        self.portal.write_uniforms(&self.queue, portal_fx);
        self.fireflies.write_uniforms(
            &self.queue,
            firefly_fx,
            view_proj,
            [self.width as f32, self.height as f32],
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(scene) = &self.scene {
                self.meshes.draw(&mut rpass, &self.globals_bg, scene);
                self.portal.draw(&mut rpass, &self.globals_bg, scene);
            }
            self.fireflies.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn color_from_rgb(rgb: [f32; 3]) -> wgpu::Color {
    wgpu::Color {
        r: rgb[0] as f64,
        g: rgb[1] as f64,
        b: rgb[2] as f64,
        a: 1.0,
    }
}
