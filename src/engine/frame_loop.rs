use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crate::foundation::core::Window;
use crate::foundation::error::{DriftlineError, DriftlineResult};
use crate::interaction::hover::PointerEvent;
use crate::render::backend::{FrameRGBA, LayerBackend, execute_plan};
use crate::render::plan::FramePlan;

use super::context::Engine;

/// The window system side of the loop: clock, pointer input, presentation and vsync.
pub trait FrameHost {
    /// Host clock in milliseconds.
    fn now_ms(&mut self) -> f64;
    fn window(&self) -> Window;
    /// Pointer events since the previous frame, oldest first.
    fn drain_events(&mut self) -> Vec<PointerEvent>;
    fn present(&mut self, plan: &FramePlan, frame: FrameRGBA) -> DriftlineResult<()>;
    /// Block until the next frame is due. `false` ends the loop.
    fn wait_next_frame(&mut self) -> bool;
}

/// Cancels a running [`RenderLoop`]. Cloning shares the same flag.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    stopped: Arc<AtomicBool>,
    worker: Option<Arc<std::sync::Mutex<Option<JoinHandle<DriftlineResult<LoopReport>>>>>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoopReport {
    pub frames: u64,
    /// The loop ended through [`LoopHandle::stop`] rather than the host.
    pub cancelled: bool,
}

impl LoopHandle {
    /// Ask the loop to end. It finishes the frame in flight first.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Stop a loop started with [`RenderLoop::start`] and wait for it.
    ///
    /// For a loop driven with [`RenderLoop::run`] this only sets the flag.
    pub fn stop_and_join(self) -> DriftlineResult<Option<LoopReport>> {
        self.stop();
        let Some(worker) = self.worker else {
            return Ok(None);
        };
        let handle = worker
            .lock()
            .map_err(|_| DriftlineError::render("render loop handle poisoned"))?
            .take();
        match handle {
            Some(h) => h
                .join()
                .map_err(|_| DriftlineError::render("render loop thread panicked"))?
                .map(Some),
            None => Ok(None),
        }
    }
}

/// Iterative frame loop: drain input, plan, execute, present, wait.
pub struct RenderLoop<B: LayerBackend> {
    engine: Engine,
    backend: B,
    handle: LoopHandle,
}

impl<B: LayerBackend> RenderLoop<B> {
    pub fn new(engine: Engine, backend: B) -> Self {
        Self {
            engine,
            backend,
            handle: LoopHandle::default(),
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Render one frame.
    pub fn step(&mut self, host: &mut dyn FrameHost) -> DriftlineResult<()> {
        let window = host.window();
        for event in host.drain_events() {
            self.engine.handle_pointer(event, window);
        }
        let plan = self.engine.frame(host.now_ms(), window);
        let frame = execute_plan(&mut self.backend, &plan)?;
        host.present(&plan, frame)
    }

    /// Run on the calling thread until the handle is stopped or the host declines another frame.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self, host: &mut dyn FrameHost) -> DriftlineResult<LoopReport> {
        let mut report = LoopReport::default();
        loop {
            if self.handle.is_stopped() {
                report.cancelled = true;
                break;
            }
            self.step(host)?;
            report.frames += 1;
            if !host.wait_next_frame() {
                break;
            }
        }
        tracing::debug!(
            frames = report.frames,
            cancelled = report.cancelled,
            "render loop ended"
        );
        Ok(report)
    }
}

impl<B: LayerBackend + Send + 'static> RenderLoop<B> {
    /// Run on a dedicated thread. The returned handle stops it.
    pub fn start<H: FrameHost + Send + 'static>(mut self, mut host: H) -> LoopHandle {
        let mut handle = self.handle();
        let worker = std::thread::spawn(move || self.run(&mut host));
        handle.worker = Some(Arc::new(std::sync::Mutex::new(Some(worker))));
        handle
    }
}

/// Sink for frames presented by a [`ScriptedHost`].
pub type FrameSink = dyn FnMut(u64, &FramePlan, FrameRGBA) -> DriftlineResult<()> + Send;

/// Headless host with a fixed frame clock and a scripted pointer.
pub struct ScriptedHost {
    window: Window,
    clock_ms: f64,
    frame_ms: f64,
    frame: u64,
    frames: u64,
    script: Vec<Vec<PointerEvent>>,
    sink: Box<FrameSink>,
}

impl ScriptedHost {
    /// `script[i]` is delivered before frame `i`; frames past the script get no input.
    pub fn new(
        window: Window,
        frames: u64,
        start_ms: f64,
        frame_ms: f64,
        script: Vec<Vec<PointerEvent>>,
        sink: Box<FrameSink>,
    ) -> Self {
        Self {
            window,
            clock_ms: start_ms,
            frame_ms,
            frame: 0,
            frames,
            script,
            sink,
        }
    }

    /// Pointer moving left to right across the window at 60% of its height.
    pub fn pointer_sweep(
        window: Window,
        frames: u64,
        start_ms: f64,
        frame_ms: f64,
        sink: Box<FrameSink>,
    ) -> Self {
        let last = frames.saturating_sub(1).max(1) as f64;
        let script = (0..frames)
            .map(|i| {
                vec![PointerEvent::Move {
                    x: window.width * i as f64 / last,
                    y: window.height * 0.6,
                }]
            })
            .collect();
        Self::new(window, frames, start_ms, frame_ms, script, sink)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frame
    }
}

impl FrameHost for ScriptedHost {
    fn now_ms(&mut self) -> f64 {
        self.clock_ms
    }

    fn window(&self) -> Window {
        self.window
    }

    fn drain_events(&mut self) -> Vec<PointerEvent> {
        usize::try_from(self.frame)
            .ok()
            .and_then(|i| self.script.get_mut(i))
            .map(std::mem::take)
            .unwrap_or_default()
    }

    fn present(&mut self, plan: &FramePlan, frame: FrameRGBA) -> DriftlineResult<()> {
        (self.sink)(self.frame, plan, frame)
    }

    fn wait_next_frame(&mut self) -> bool {
        self.frame += 1;
        self.clock_ms += self.frame_ms;
        self.frame < self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/frame_loop.rs"]
mod tests;
