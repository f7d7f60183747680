use crate::render::{Renderer, Viewport};
use crate::time::{FrameClock, FrameTime};
use crate::window::WindowBackend;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame context passed to [`App::update`].
pub struct FrameCtx<'a> {
    /// Register renderables here; the loop flushes them after `update`.
    pub renderer: &'a mut Renderer,

    /// Current drawable size in pixels.
    pub viewport: Viewport,

    /// Timing snapshot for this iteration.
    pub time: FrameTime,
}

/// Application contract implemented by the game layer.
pub trait App {
    /// Called once per loop iteration, between input polling and the draw
    /// pass. Register renderables through `ctx.renderer`.
    fn update(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

/// Loop pacing configuration.
#[derive(Debug, Copy, Clone)]
pub struct LoopConfig {
    pub target_fps: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

/// Drives the cooperative single-threaded loop:
/// poll → update → render → swap → tick → sleep.
///
/// One thread owns the graphics context and runs the whole body; the only
/// suspension point is the end-of-iteration sleep, which is a plain blocking
/// wait. The close flag is checked once per iteration, never mid-sleep.
/// GPU disposal happens strictly after the loop exits, so a pending draw can
/// never race a delete.
pub fn run<W, A>(window: &mut W, renderer: &mut Renderer, app: &mut A, config: LoopConfig)
where
    W: WindowBackend,
    A: App,
{
    let mut clock = FrameClock::new(config.target_fps);
    log::info!(
        "render loop starting (target {} fps, frame budget {:?})",
        config.target_fps,
        clock.target_interval()
    );

    loop {
        window.poll_events();
        if window.should_close() {
            break;
        }

        let mut ctx = FrameCtx {
            renderer,
            viewport: window.viewport(),
            time: clock.frame_time(),
        };
        if app.update(&mut ctx) == AppControl::Exit {
            break;
        }

        renderer.render_registered_objects();
        window.swap_buffers();

        clock.tick();
        std::thread::sleep(clock.sleep_time());
    }

    log::info!("render loop stopped after frame {}", clock.frame_time().frame_index);
    renderer.dispose();
}
