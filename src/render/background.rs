use super::helpers;
use super::{Gpu, GpuState};
use folio_core::{LayerFrame, LayerKind};
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LayerUniforms {
    resolution: [f32; 2],
    image_resolution: [f32; 2],
    pointer: [f32; 2],
    time: f32,
    opacity: f32,
}

struct LayerGpu {
    kind: LayerKind,
    uniform_buffer: wgpu::Buffer,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    // (1, 1) until real media has been uploaded
    image_size: (u32, u32),
}

/// Fullscreen layer stack drawn onto the background canvas.
pub struct BackgroundRenderer {
    fluid_pipeline: wgpu::RenderPipeline,
    video_pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    layers: Vec<LayerGpu>,
    clear_color: wgpu::Color,
}

impl BackgroundRenderer {
    pub fn new(gpu: &Gpu, format: wgpu::TextureFormat, kinds: &[LayerKind], clear: [f64; 3]) -> Self {
        let device = &gpu.device;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("background_shader"),
            source: wgpu::ShaderSource::Wgsl(super::BACKGROUND_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("layer_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("layer_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let blend = Some(wgpu::BlendState::ALPHA_BLENDING);
        let fluid_pipeline =
            helpers::make_fullscreen_pipeline(device, &pl, &shader, "fs_fluid", format, blend);
        let video_pipeline =
            helpers::make_fullscreen_pipeline(device, &pl, &shader, "fs_video", format, blend);
        let sampler = helpers::linear_sampler(device);

        let mut this = Self {
            fluid_pipeline,
            video_pipeline,
            bgl,
            sampler,
            layers: Vec::with_capacity(kinds.len()),
            clear_color: wgpu::Color {
                r: clear[0],
                g: clear[1],
                b: clear[2],
                a: 1.0,
            },
        };
        for (i, kind) in kinds.iter().enumerate() {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("layer{i}_uniforms")),
                size: std::mem::size_of::<LayerUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let (texture, view) =
                helpers::create_placeholder_texture(device, &gpu.queue, &format!("layer{i}_tex"));
            let bind_group = this.bind_group(device, &uniform_buffer, &view);
            this.layers.push(LayerGpu {
                kind: *kind,
                uniform_buffer,
                texture,
                bind_group,
                image_size: (1, 1),
            });
        }
        this
    }

    fn bind_group(
        &self,
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        view: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("layer_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }

    /// Make sure layer `index` owns a texture of `width`x`height`.
    fn ensure_texture(&mut self, device: &wgpu::Device, index: usize, width: u32, height: u32) {
        if self.layers[index].image_size == (width, height) {
            return;
        }
        let (texture, view) = helpers::create_color_texture(
            device,
            &format!("layer{index}_tex"),
            width,
            height,
            helpers::MEDIA_FORMAT,
            helpers::MEDIA_USAGE,
        );
        let bind_group = self.bind_group(device, &self.layers[index].uniform_buffer, &view);
        let layer = &mut self.layers[index];
        layer.texture = texture;
        layer.bind_group = bind_group;
        layer.image_size = (width, height);
        log::info!("[render] layer {index} texture {width}x{height}");
    }

    /// One-shot upload of a decoded image.
    pub fn upload_image(&mut self, gpu: &Gpu, index: usize, img: &web::HtmlImageElement) {
        let (w, h) = (img.natural_width(), img.natural_height());
        if index >= self.layers.len() || w == 0 || h == 0 {
            return;
        }
        self.ensure_texture(&gpu.device, index, w, h);
        helpers::copy_external(
            &gpu.queue,
            wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
            &self.layers[index].texture,
            w,
            h,
        );
    }

    /// Copy the video's current frame; the caller checks it has data.
    pub fn refresh_video(&mut self, gpu: &Gpu, index: usize, video: &web::HtmlVideoElement) {
        let (w, h) = (video.video_width(), video.video_height());
        if index >= self.layers.len() || w == 0 || h == 0 {
            return;
        }
        self.ensure_texture(&gpu.device, index, w, h);
        helpers::copy_external(
            &gpu.queue,
            wgpu::ExternalImageSource::HTMLVideoElement(video.clone()),
            &self.layers[index].texture,
            w,
            h,
        );
    }

    pub fn render(&self, gpu: &Gpu, target: &mut GpuState, frames: &[LayerFrame]) {
        let Some(frame) = target.acquire(gpu) else {
            return;
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("background_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("background_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for f in frames.iter().filter(|f| f.visible()) {
                let Some(layer) = self.layers.get(f.index) else {
                    continue;
                };
                let u = LayerUniforms {
                    resolution: f.resolution,
                    image_resolution: [layer.image_size.0 as f32, layer.image_size.1 as f32],
                    pointer: f.pointer,
                    time: f.time,
                    opacity: f.opacity,
                };
                gpu.queue
                    .write_buffer(&layer.uniform_buffer, 0, bytemuck::bytes_of(&u));
                rpass.set_pipeline(match layer.kind {
                    LayerKind::FluidImage => &self.fluid_pipeline,
                    LayerKind::Video => &self.video_pipeline,
                });
                rpass.set_bind_group(0, &layer.bind_group, &[]);
                rpass.draw(0..3, 0..1);
            }
        }
        gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}
