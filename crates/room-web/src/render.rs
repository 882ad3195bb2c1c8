use crate::label::LabelImage;
use glam::{Mat4, Vec3};
use room_core::geometry::sphere;
use room_core::{
    ObjectKind, ObjectRegistry, RoomModel, SceneContext, AMBIENT_INTENSITY, AMBIENT_RGB, BACKGROUND_RGB,
    SUN_INTENSITY, SUN_POSITION, SUN_RGB,
};
use web_sys as web;

mod helpers;
mod mesh;
mod sprite;

use helpers::srgb3_to_linear;
use mesh::{DrawSlot, DrawUniforms, GpuMesh, MeshPipelines};
use sprite::{Sprite, SpriteResources, SpriteUniforms};

pub(crate) static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub(crate) static SPRITE_WGSL: &str = include_str!("../shaders/sprite.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
}

impl Globals {
    fn new(view: Mat4, view_proj: Mat4) -> Self {
        let ambient = Vec3::from(srgb3_to_linear(AMBIENT_RGB)) * AMBIENT_INTENSITY;
        let sun = Vec3::from(srgb3_to_linear(SUN_RGB)) * SUN_INTENSITY;
        // Directional light shining from SUN_POSITION towards the origin.
        let sun_dir = Vec3::from(SUN_POSITION).normalize_or_zero();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: view.row(0).truncate().extend(0.0).to_array(),
            cam_up: view.row(1).truncate().extend(0.0).to_array(),
            ambient: ambient.extend(1.0).to_array(),
            sun_dir: sun_dir.extend(0.0).to_array(),
            sun_color: sun.extend(1.0).to_array(),
        }
    }
}

struct RoomDraw {
    mesh: GpuMesh,
    slot: DrawSlot,
    center: Vec3,
    transparent: bool,
}

struct ObjectDraw {
    kind: ObjectKind,
    body: GpuMesh,
    body_slot: DrawSlot,
    glow_slot: DrawSlot,
    label: Option<Sprite>,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    meshes: MeshPipelines,
    sprites: SpriteResources,

    glow_mesh: GpuMesh,
    room: Vec<RoomDraw>,
    objects: Vec<ObjectDraw>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
                    // Default limits keep older WebGPU implementations happy.
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let globals: Globals = bytemuck::Zeroable::zeroed();
        let globals_buffer = helpers::create_uniform_buffer(&device, "globals", &globals);
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let meshes = mesh::create_mesh_pipelines(&device, &globals_bgl, format);
        let sprites = sprite::create_sprite_resources(&device, &globals_bgl, format);
        let glow_mesh = GpuMesh::upload(&device, "glow_sphere", &sphere(1.0, 24, 16));

        let [r, g, b] = srgb3_to_linear(BACKGROUND_RGB);
        log::info!("[gpu] initialised {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            globals_buffer,
            globals_bg,
            meshes,
            sprites,
            glow_mesh,
            room: Vec::new(),
            objects: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    /// Upload body meshes and label sprites for every interactive object.
    pub fn set_objects(&mut self, objects: &ObjectRegistry, labels: &[(ObjectKind, LabelImage)]) {
        let mut draws = Vec::with_capacity(objects.len());
        for obj in objects.iter() {
            let name = obj.kind.as_str();
            let body_slot = DrawSlot::new(
                &self.device,
                &self.meshes.draw_bgl,
                name,
                &DrawUniforms::new(obj.model_matrix(), [0.0; 4], true),
            );
            let glow_slot = DrawSlot::new(
                &self.device,
                &self.meshes.draw_bgl,
                name,
                &DrawUniforms::new(obj.glow_matrix(), [0.0; 4], false),
            );
            let label = labels
                .iter()
                .find(|(kind, _)| *kind == obj.kind)
                .map(|(_, image)| {
                    let (center, size) = obj.label_placement();
                    self.sprites.create_sprite(
                        &self.device,
                        &self.queue,
                        name,
                        image,
                        &SpriteUniforms::new(center, size),
                    )
                });
            draws.push(ObjectDraw {
                kind: obj.kind,
                body: GpuMesh::upload(&self.device, name, &obj.mesh),
                body_slot,
                glow_slot,
                label,
            });
        }

        self.objects = draws;
        log::info!("[gpu] {} objects uploaded", self.objects.len());
    }

    /// Replace the room geometry with `room`.
    pub fn set_room(&mut self, room: &RoomModel) {
        self.room = room
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let label = format!("room_part_{}", i);
                RoomDraw {
                    mesh: GpuMesh::upload(&self.device, &label, &part.mesh),
                    slot: DrawSlot::new(
                        &self.device,
                        &self.meshes.draw_bgl,
                        &label,
                        &DrawUniforms::new(Mat4::IDENTITY, part.color, true),
                    ),
                    center: part.mesh.bounds().center,
                    transparent: part.color[3] < 1.0,
                }
            })
            .collect();
        log::info!("[gpu] room uploaded ({} parts)", self.room.len());
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
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
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    fn write_uniforms(&self, scene: &SceneContext) {
        let globals = Globals::new(scene.camera.view_matrix(), scene.camera.view_projection());
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        for draw in &self.objects {
            let Some(obj) = scene.objects.get(draw.kind) else {
                continue;
            };
            let [r, g, b] = srgb3_to_linear(obj.material.color);
            draw.body_slot.write(
                &self.queue,
                &DrawUniforms::new(
                    obj.model_matrix(),
                    [r, g, b, obj.material.opacity],
                    obj.material.lit,
                ),
            );
            let [gr, gg, gb] = srgb3_to_linear(obj.glow_rgb);
            draw.glow_slot.write(
                &self.queue,
                &DrawUniforms::new(obj.glow_matrix(), [gr, gg, gb, obj.glow_opacity], false),
            );
            if let Some(label) = &draw.label {
                let (center, size) = obj.label_placement();
                label.write(&self.queue, &SpriteUniforms::new(center, size));
            }
        }
    }

    pub fn render(&mut self, scene: &SceneContext) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let eye = scene.camera.eye;
        let mut transparent: Vec<(f32, &GpuMesh, &DrawSlot)> = Vec::new();
        for part in self.room.iter().filter(|p| p.transparent) {
            transparent.push((part.center.distance_squared(eye), &part.mesh, &part.slot));
        }
        for draw in &self.objects {
            let Some(obj) = scene.objects.get(draw.kind) else {
                continue;
            };
            let d = obj.position.distance_squared(eye);
            if obj.material.is_transparent() {
                transparent.push((d, &draw.body, &draw.body_slot));
            }
            if obj.glow_opacity > 0.0 {
                transparent.push((d, &self.glow_mesh, &draw.glow_slot));
            }
        }
        // Back to front.
        transparent.sort_by(|a, b| b.0.total_cmp(&a.0));

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
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            // Opaque: room and solid bodies
            rpass.set_pipeline(&self.meshes.opaque);
            for part in self.room.iter().filter(|p| !p.transparent) {
                mesh::draw(&mut rpass, &part.mesh, &part.slot);
            }
            for draw in &self.objects {
                let solid = scene
                    .objects
                    .get(draw.kind)
                    .map(|o| !o.material.is_transparent())
                    .unwrap_or(false);
                if solid {
                    mesh::draw(&mut rpass, &draw.body, &draw.body_slot);
                }
            }

            // Transparent: translucent bodies and glows, depth write off
            rpass.set_pipeline(&self.meshes.transparent);
            for (_, gpu_mesh, slot) in &transparent {
                mesh::draw(&mut rpass, gpu_mesh, slot);
            }

            // Labels
            rpass.set_pipeline(&self.sprites.pipeline);
            for label in self.objects.iter().filter_map(|d| d.label.as_ref()) {
                rpass.set_bind_group(1, &label.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
