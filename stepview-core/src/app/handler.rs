use std::sync::Arc;

use nalgebra::Vector2;
use vello::wgpu;
use vello::wgpu::util::TextureBlitter;
use vello::{AaConfig, AaSupport, RenderParams, Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::app::context::AppContext;
use crate::app::info::AppInfo;
use crate::app::update::{Update, UpdateManager};
use crate::config::AppConfig;
use crate::layout::{self, Dimension, LayoutNode, LayoutStyle, StyleNode};
use crate::widget::Widget;
use stepview_theme::theme::Theme;

/// Texture format used for the intermediate render target.
const OFFSCREEN_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// The application handler driving the update → layout → render cycle from
/// winit events.
pub struct AppHandler<T, W, S, F>
where
    T: Theme,
    W: Widget,
    F: Fn(AppContext, S) -> W,
{
    attrs: WindowAttributes,
    config: AppConfig<T>,
    builder: Option<F>,
    state: Option<S>,
    widget: Option<W>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: Scene,
    info: AppInfo,
    update: UpdateManager,
    layout: Option<LayoutNode>,
}

/// GPU objects created once the window exists.
struct GpuState {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    renderer: Renderer,
    blitter: TextureBlitter,
    offscreen: Option<OffscreenTarget>,
}

/// Offscreen texture that serves as the Vello render target before it is
/// blitted into the swapchain.
struct OffscreenTarget {
    texture: wgpu::Texture,
    width: u32,
    height: u32,
}

impl OffscreenTarget {
    fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("stepview-offscreen-target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OFFSCREEN_FORMAT,
            usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        Self {
            texture,
            width,
            height,
        }
    }

    fn create_view(&self) -> wgpu::TextureView {
        self.texture
            .create_view(&wgpu::TextureViewDescriptor::default())
    }
}

impl<T, W, S, F> AppHandler<T, W, S, F>
where
    T: Theme,
    W: Widget,
    F: Fn(AppContext, S) -> W,
{
    /// Create a new handler. The widget is built on the first resume.
    pub fn new(
        attrs: WindowAttributes,
        config: AppConfig<T>,
        builder: F,
        state: S,
        update: UpdateManager,
    ) -> Self {
        Self {
            attrs,
            config,
            builder: Some(builder),
            state: Some(state),
            widget: None,
            window: None,
            gpu: None,
            scene: Scene::new(),
            info: AppInfo::default(),
            update,
            layout: None,
        }
    }

    /// Returns a context handle for widgets and callbacks.
    pub fn context(&self) -> AppContext {
        AppContext::new(self.update.clone())
    }

    fn request_redraw(&self) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn create_gpu_state(&self, window: Arc<Window>) -> Result<GpuState, String> {
        log::debug!("Creating GPU state...");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: wgpu::InstanceFlags::default(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| format!("Failed to create surface: {:?}", e))?;

        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            }))
            .map_err(|e| format!("No compatible GPU adapter found: {:?}", e))?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Selected GPU adapter: {} ({:?})",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("stepview-gpu-device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            },
        ))
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| {
                matches!(
                    format,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .unwrap_or_else(|| capabilities.formats[0]);

        let present_mode = if capabilities
            .present_modes
            .contains(&self.config.render.present_mode)
        {
            self.config.render.present_mode
        } else {
            capabilities
                .present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo)
        };

        let alpha_mode = capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let renderer = Renderer::new(
            &device,
            RendererOptions {
                use_cpu: self.config.render.cpu,
                antialiasing_support: aa_support(&self.config.render.antialiasing),
                num_init_threads: self.config.render.init_threads,
                pipeline_cache: None,
            },
        )
        .map_err(|e| format!("Failed to create renderer: {:?}", e))?;

        let blitter = TextureBlitter::new(&device, format);

        Ok(GpuState {
            device,
            queue,
            surface,
            surface_config,
            renderer,
            blitter,
            offscreen: None,
        })
    }

    fn rebuild_layout(&mut self) -> LayoutNode {
        let available = Vector2::new(self.info.size.x as f32, self.info.size.y as f32);
        let widget_style = self
            .widget
            .as_ref()
            .map(|widget| widget.layout_style())
            .unwrap_or_default();

        let window_node = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(
                    Dimension::length(available.x),
                    Dimension::length(available.y),
                ),
                ..Default::default()
            },
            children: vec![widget_style],
        };

        match layout::compute_layout(&window_node, available) {
            Ok(node) => {
                self.layout = Some(node);
            },
            Err(err) => {
                log::error!("Failed to compute layout: {}", err);
            },
        }

        self.update.remove(Update::LAYOUT);
        self.layout.clone().unwrap_or_default()
    }

    fn ensure_layout(&mut self) -> LayoutNode {
        let flags = self.update.get();
        if self.layout.is_none() || flags.intersects(Update::LAYOUT | Update::FORCE) {
            self.rebuild_layout()
        } else {
            self.layout.clone().expect("layout should be initialized")
        }
    }

    /// Update the app and process the recorded events.
    fn update_pass(&mut self, event_loop: &ActiveEventLoop) {
        log::debug!("update_pass() called");

        let mut layout_node = self.ensure_layout();

        let context = self.context();
        if let Some(widget) = self.widget.as_mut() {
            if let Some(widget_layout) = layout_node.children.first() {
                let requested = widget.update(widget_layout, context, &mut self.info);
                self.update.insert(requested);
            }
        }

        // a widget update may have invalidated the layout; rebuild in the same pass
        if self.update.get().intersects(Update::LAYOUT | Update::FORCE) {
            layout_node = self.rebuild_layout();
        }

        if self.update.get().contains(Update::EXIT) {
            log::info!("Exit requested");
            event_loop.exit();
            return;
        }

        if self.update.get().intersects(Update::DRAW | Update::FORCE) {
            self.render_frame(&layout_node);
        }

        self.info.reset();
    }

    fn render_frame(&mut self, layout_node: &LayoutNode) {
        log::debug!("Rendering frame...");

        self.scene.reset();

        let context = AppContext::new(self.update.clone());
        if let Some(widget) = self.widget.as_mut() {
            if let Some(widget_layout) = layout_node.children.first() {
                widget.render(
                    &mut self.scene,
                    &mut self.config.theme,
                    widget_layout,
                    &mut self.info,
                    context,
                );
            }
        }

        let Some(gpu) = self.gpu.as_mut() else {
            log::warn!("No GPU state available, skipping render");
            return;
        };

        let width = gpu.surface_config.width;
        let height = gpu.surface_config.height;
        if width == 0 || height == 0 {
            log::debug!("Surface is 0x0, clearing draw flags to prevent a busy loop");
            self.update.remove(Update::DRAW | Update::FORCE);
            return;
        }

        if gpu
            .offscreen
            .as_ref()
            .map(|target| (target.width, target.height) != (width, height))
            .unwrap_or(true)
        {
            gpu.offscreen = Some(OffscreenTarget::new(&gpu.device, width, height));
        }
        let render_view = gpu
            .offscreen
            .as_ref()
            .expect("offscreen render target should exist")
            .create_view();

        if let Err(e) = gpu.renderer.render_to_texture(
            &gpu.device,
            &gpu.queue,
            &self.scene,
            &render_view,
            &RenderParams {
                base_color: self.config.theme.window_background(),
                width,
                height,
                antialiasing_method: self.config.render.antialiasing,
            },
        ) {
            log::error!("Failed to render scene: {:?}", e);
            return;
        }

        let surface_texture = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}, skipping render", e);
                return;
            },
        };

        if let Some(window) = &self.window {
            window.pre_present_notify();
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("stepview-surface-blit-encoder"),
            });
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        gpu.blitter
            .copy(&gpu.device, &mut encoder, &render_view, &surface_view);
        gpu.queue.submit(std::iter::once(encoder.finish()));

        surface_texture.present();
        self.update.remove(Update::DRAW | Update::FORCE);
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.surface_config.width = width.max(1);
            gpu.surface_config.height = height.max(1);
            gpu.surface.configure(&gpu.device, &gpu.surface_config);
            // recreated lazily at the new size
            gpu.offscreen = None;
        }
    }
}

impl<T, W, S, F> ApplicationHandler for AppHandler<T, W, S, F>
where
    T: Theme,
    W: Widget,
    F: Fn(AppContext, S) -> W,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(self.attrs.clone())
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        self.info.size = Vector2::new(size.width as f64, size.height as f64);

        match self.create_gpu_state(window.clone()) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(err) => {
                log::error!("Failed to initialize rendering: {}", err);
                event_loop.exit();
                return;
            },
        }

        if self.widget.is_none() {
            let builder = self.builder.take().expect("widget builder already taken");
            let state = self.state.take().expect("application state already taken");
            self.widget = Some(builder(self.context(), state));
        }

        self.window = Some(window);
        self.update.insert(Update::FORCE | Update::LAYOUT | Update::DRAW);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("Close requested");
                if self.config.window.close_on_request {
                    event_loop.exit();
                }
            },
            WindowEvent::Resized(size) => {
                self.info.size = Vector2::new(size.width as f64, size.height as f64);
                self.resize_surface(size.width, size.height);
                self.update.insert(Update::LAYOUT | Update::DRAW);
                self.request_redraw();
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.info.cursor_pos = Some(Vector2::new(position.x, position.y));
                self.update_pass(event_loop);
            },
            WindowEvent::CursorLeft { .. } => {
                self.info.cursor_pos = None;
                self.update_pass(event_loop);
            },
            WindowEvent::MouseInput {
                device_id,
                state,
                button,
            } => {
                self.info.buttons.push((device_id, button, state));
                self.update_pass(event_loop);
            },
            WindowEvent::KeyboardInput {
                device_id, event, ..
            } => {
                self.info.keys.push((device_id, event));
                self.update_pass(event_loop);
            },
            WindowEvent::RedrawRequested => {
                self.update_pass(event_loop);
            },
            _ => {},
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.update.get().is_empty() {
            self.request_redraw();
        }
    }
}

fn aa_support(config: &AaConfig) -> AaSupport {
    match config {
        AaConfig::Area => AaSupport::area_only(),
        AaConfig::Msaa8 => AaSupport {
            area: false,
            msaa8: true,
            msaa16: false,
        },
        AaConfig::Msaa16 => AaSupport {
            area: false,
            msaa8: false,
            msaa16: true,
        },
    }
}
