//! Demo application shell
//!
//! Window setup, egui integration, and the event loop shared by the combined
//! `playground` browser and the standalone demo binaries.

use common::{GraphicsContext, PlotCamera};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

use crate::equations_ui::draw_equations_sidebar;
use crate::panel::Panel;
use crate::registry::{self, DEMOS};
use crate::renderer::PlotRenderer;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: PlotRenderer,
    camera: PlotCamera,
    panel: Panel,
    demo_index: usize,
    /// Whether the demo selector (and digit shortcuts) are active
    selector: bool,
    view_zoom: f32,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext, demo_index: usize, selector: bool) -> Self {
        let renderer = PlotRenderer::new(&ctx, 4096, 8192);
        let camera = PlotCamera::new(ctx.aspect_ratio());
        let panel = (DEMOS[demo_index].build)();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            camera,
            panel,
            demo_index,
            selector,
            view_zoom: 1.0,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn set_demo(&mut self, index: usize) {
        if index >= DEMOS.len() {
            return;
        }
        self.demo_index = index;
        self.panel = (DEMOS[index].build)();
        self.view_zoom = 1.0;
        log::info!("switched to demo `{}`", DEMOS[index].slug);
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Build egui UI first so the scene reflects this frame's edits
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let panel = &mut self.panel;
        let selector = self.selector;
        let demo_index = self.demo_index;
        let mut selected = self.demo_index;

        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            let (title, equations, variables) = panel.equations();
            draw_equations_sidebar(ctx, title, equations, variables);

            egui::SidePanel::left("controls_panel")
                .min_width(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    if selector {
                        ui.strong("Demo");
                        egui::ComboBox::from_label("demo")
                            .selected_text(DEMOS[selected].name)
                            .show_ui(ui, |ui| {
                                for (i, demo) in DEMOS.iter().enumerate() {
                                    ui.selectable_value(&mut selected, i, demo.name);
                                }
                            });
                        ui.separator();
                    }
                    panel.sidebar(ui);
                });

            egui::TopBottomPanel::top("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(DEMOS[demo_index].name);
                    ui.separator();
                    panel.status(ui);
                });
            });
        });

        if selected != self.demo_index {
            self.set_demo(selected);
        }

        self.panel.frame(&mut self.camera);
        self.camera.zoom_by(self.view_zoom);
        self.renderer.update_camera(&self.ctx.queue, &self.camera);

        let scene = self.panel.scene();
        let counts = self.renderer.upload(&self.ctx.queue, &scene);

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, counts);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::KeyR => self.set_demo(self.demo_index),
            KeyCode::Digit1 if self.selector => self.set_demo(0),
            KeyCode::Digit2 if self.selector => self.set_demo(1),
            KeyCode::Digit3 if self.selector => self.set_demo(2),
            _ => {}
        }
    }

    fn handle_scroll(&mut self, delta: f32) {
        self.view_zoom *= 1.0 - delta * 0.1;
        self.view_zoom = self.view_zoom.clamp(0.2, 5.0);
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

/// Open a demo window and run it until closed.
///
/// `initial_slug` routes to a demo by registry slug (unknown slugs fall back
/// to the first demo); `selector` enables the in-window demo switcher used by
/// the combined browser.
pub fn run(title: &str, initial_slug: Option<&str>, selector: bool) {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(title, 1280, 720));

    let demo_index = initial_slug.map(registry::select).unwrap_or(0);
    let mut app = App::new(ctx, demo_index, selector);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(key),
                                        state,
                                        ..
                                    },
                                ..
                            } => app.handle_key(*key, *state),
                            WindowEvent::MouseWheel { delta, .. } => {
                                let scroll = match delta {
                                    MouseScrollDelta::LineDelta(_, y) => *y,
                                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                                };
                                app.handle_scroll(scroll);
                            }
                            WindowEvent::RedrawRequested => match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => eprintln!("Render error: {:?}", e),
                            },
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
