use std::rc::Rc;
use web_sys as web;

mod background;
mod cube;
mod helpers;

pub use background::BackgroundRenderer;
pub use cube::CubeRenderer;

// Shaders bundled as string constants
pub(crate) static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");
pub(crate) static CUBE_WGSL: &str = include_str!("../shaders/cube.wgsl");

/// Adapter, device and queue shared by every canvas on the page.
pub struct Gpu {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// Per-canvas swapchain: surface plus its current configuration.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
}

/// Bring up WebGPU against the background canvas and attach a second
/// surface for the cube canvas on the same device.
pub async fn init(
    background: &web::HtmlCanvasElement,
    cube: &web::HtmlCanvasElement,
) -> anyhow::Result<(Rc<Gpu>, GpuState, GpuState)> {
    let instance = wgpu::Instance::default();
    let bg_surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(background.clone()))?;
    let cube_surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(cube.clone()))?;
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&bg_surface),
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
                label: Some("folio_device"),
            },
            None,
        )
        .await
        .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
    let gpu = Gpu {
        adapter,
        device,
        queue,
    };
    let bg_state = GpuState::new(&gpu, bg_surface, background.width(), background.height());
    let cube_state = GpuState::new(&gpu, cube_surface, cube.width(), cube.height());
    log::info!(
        "[render] WebGPU ready: {:?}, surface format {:?}",
        gpu.adapter.get_info().backend,
        bg_state.format()
    );
    Ok((Rc::new(gpu), bg_state, cube_state))
}

impl GpuState {
    fn new(gpu: &Gpu, surface: wgpu::Surface<'static>, width: u32, height: u32) -> Self {
        let caps = surface.get_capabilities(&gpu.adapter);
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
            .unwrap_or(wgpu::TextureFormat::Bgra8Unorm);
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let width = width.max(1);
        let height = height.max(1);
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
        surface.configure(&gpu.device, &config);
        Self {
            surface,
            config,
            width,
            height,
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, gpu: &Gpu, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&gpu.device, &self.config);
        }
    }

    /// Next swapchain texture. A lost or outdated surface is reconfigured
    /// and the frame skipped.
    pub fn acquire(&mut self, gpu: &Gpu) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&gpu.device, &self.config);
                None
            }
            Err(e) => {
                log::warn!("[render] surface error: {:?}", e);
                None
            }
        }
    }
}
