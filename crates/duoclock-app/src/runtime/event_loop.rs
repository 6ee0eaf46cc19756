use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use duoclock_core::TickSchedule;

use crate::device::Gpu;
use crate::runtime::{App, AppControl, FrameCtx};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "duoclock".to_string(),
            initial_size: LogicalSize::new(640.0, 420.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until the window is closed or a fatal error occurs.
    ///
    /// The refresh timer starts one interval after the window opens, so the
    /// app's initial (placeholder) state is what the first frame paints.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        // Window/GPU creation failures happen inside `resumed`, where they
        // cannot propagate through winit; re-raise them here.
        if let Some(err) = state.init_error.take() {
            return Err(err);
        }

        Ok(())
    }
}

struct WindowState {
    window: Arc<Window>,
    gpu: Gpu,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,

    window: Option<WindowState>,
    schedule: TickSchedule,
    init_error: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            window: None,
            schedule: TickSchedule::default(),
            init_error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone()))
            .context("GPU initialization failed")?;

        self.window = Some(WindowState { window, gpu });
        Ok(())
    }

    fn fire_tick(&mut self) {
        self.app.on_tick();
        if let Some(ws) = &self.window {
            ws.window.request_redraw();
        }
        // Re-arm from "now": no drift correction, matching the clock's
        // self-rescheduling contract.
        self.schedule.arm(Instant::now());
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to open clock window: {e:#}");
            self.init_error = Some(e);
            event_loop.exit();
            return;
        }

        // First paint shows the placeholders; the first real tick lands one
        // interval from now.
        self.schedule.arm(Instant::now());
        if let Some(ws) = &self.window {
            ws.window.request_redraw();
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::ResumeTimeReached { .. }) {
            self.fire_tick();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.schedule.deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ws) = self.window.as_mut() else {
            return;
        };
        if ws.window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                // Closing the window ends the loop; no further ticks fire.
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                ws.gpu.resize(new_size);
                ws.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = ws.window.inner_size();
                ws.gpu.resize(new_size);
                ws.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let mut ctx = FrameCtx {
                    window: &ws.window,
                    gpu: &mut ws.gpu,
                };
                if self.app.on_frame(&mut ctx) == AppControl::Exit {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
