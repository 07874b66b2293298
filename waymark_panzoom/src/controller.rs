// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size, Vec2};
use waymark_gesture::{GesturePhase, GestureState, VelocityEstimate};
use waymark_timing::{FrameQueue, FrameSlot};
use waymark_view::{CoverViewport, CoverViewportDebugInfo, LayoutMode, ScaleBounds, Transform};

use crate::config::PanZoomConfig;
use crate::event::InputEvent;
use crate::inertia::{InertiaParams, InertiaRun};

/// Work the controller schedules for the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameTask {
    Apply,
    InertiaStep,
}

/// Gesture-driven pan/zoom controller for one viewport.
///
/// The controller owns the viewport and content geometry, the transform,
/// the gesture state, the drag velocity estimate and any running inertia.
/// Input handlers mutate the raw transform and request a bounded update; the
/// host calls [`PanZoomController::on_frame`] once per display refresh and
/// renders whatever transform it returns.
///
/// Until both geometries are known and non-degenerate the controller is
/// uninitialized: it ignores input and publishes nothing.
#[derive(Clone, Debug)]
pub struct PanZoomController {
    config: PanZoomConfig,
    layout: LayoutMode,
    viewport: Size,
    content: Size,
    view: Option<CoverViewport>,
    gesture: GestureState,
    velocity: VelocityEstimate,
    inertia: Option<InertiaRun>,
    queue: FrameQueue<FrameTask>,
    apply_slot: FrameSlot,
    inertia_slot: FrameSlot,
    published: Option<Transform>,
}

impl Default for PanZoomController {
    fn default() -> Self {
        Self::new(PanZoomConfig::default())
    }
}

impl PanZoomController {
    /// Creates an uninitialized controller.
    #[must_use]
    pub fn new(config: PanZoomConfig) -> Self {
        Self {
            config,
            layout: LayoutMode::default(),
            viewport: Size::ZERO,
            content: Size::ZERO,
            view: None,
            gesture: GestureState::default(),
            velocity: VelocityEstimate::new(config.velocity_weight),
            inertia: None,
            queue: FrameQueue::new(),
            apply_slot: FrameSlot::new(),
            inertia_slot: FrameSlot::new(),
            published: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Sets up the default view for the given geometry and layout.
    ///
    /// Computes the cover-fit scale bounds and resets the transform to the
    /// layout's initial view, then requests a bounded update. If either size
    /// has a zero dimension this does nothing and returns `false`.
    pub fn initialize(&mut self, viewport: Size, content: Size, layout: LayoutMode) -> bool {
        let Some(mut view) = CoverViewport::new(viewport, content, self.config.max_scale) else {
            return false;
        };
        view.reset(layout, self.config.compact_zoom);
        self.viewport = viewport;
        self.content = content;
        self.layout = layout;
        self.view = Some(view);
        self.request_update();
        true
    }

    /// Handles a viewport resize or layout change.
    ///
    /// Cancels inertia, ends any gesture and re-runs
    /// [`PanZoomController::initialize`]; the previous pan/zoom is discarded.
    pub fn resize(&mut self, viewport: Size, layout: LayoutMode) -> bool {
        self.interrupt();
        self.viewport = viewport;
        self.layout = layout;
        self.initialize(viewport, self.content, layout)
    }

    /// Handles the content finishing loading (or reloading) at `content` size.
    ///
    /// Behaves like [`PanZoomController::resize`] with the current viewport.
    pub fn content_loaded(&mut self, content: Size) -> bool {
        self.interrupt();
        self.content = content;
        self.initialize(self.viewport, content, self.layout)
    }

    /// Returns `true` once both geometries are usable.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.view.is_some()
    }

    /// Dispatches one input event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent<'_>) {
        match event {
            InputEvent::PointerDown { position, time_ms } => self.pointer_down(position, time_ms),
            InputEvent::PointerMove { position, time_ms } => self.pointer_move(position, time_ms),
            InputEvent::PointerUp { time_ms } => self.pointer_up(time_ms),
            InputEvent::TouchStart { touches, time_ms } => self.touch_start(touches, time_ms),
            InputEvent::TouchMove { touches, time_ms } => self.touch_move(touches, time_ms),
            InputEvent::TouchEnd { touches, time_ms } => self.touch_end(touches, time_ms),
            InputEvent::Wheel { position, delta_y } => self.wheel(position, delta_y),
            InputEvent::Resize { viewport, layout } => {
                self.resize(viewport, layout);
            }
            InputEvent::ContentLoaded { content } => {
                self.content_loaded(content);
            }
        }
    }

    /// Pointer pressed: starts a drag unless a pinch is in progress.
    pub fn pointer_down(&mut self, position: Point, time_ms: f64) {
        if self.view.is_none() || self.gesture.is_pinching() {
            return;
        }
        self.begin_drag(position, time_ms);
    }

    /// Pointer moved: pans while dragging.
    pub fn pointer_move(&mut self, position: Point, time_ms: f64) {
        self.drag_to(position, time_ms);
    }

    /// Pointer released: ends the drag and may start inertia.
    pub fn pointer_up(&mut self, time_ms: f64) {
        if self.gesture.is_dragging() {
            self.release(time_ms);
        }
    }

    /// Touches started; `touches` lists every finger now down.
    ///
    /// One finger starts a drag, two or more start a pinch from the first two.
    pub fn touch_start(&mut self, touches: &[Point], time_ms: f64) {
        if self.view.is_none() {
            return;
        }
        match touches {
            [] => {}
            [single] => {
                if !self.gesture.is_pinching() {
                    self.begin_drag(*single, time_ms);
                }
            }
            [a, b, ..] => self.begin_pinch([*a, *b]),
        }
    }

    /// Touches moved; `touches` lists every finger still down.
    pub fn touch_move(&mut self, touches: &[Point], time_ms: f64) {
        match (self.gesture.phase(), touches) {
            (GesturePhase::Dragging, [single]) => self.drag_to(*single, time_ms),
            (GesturePhase::Pinching, [a, b, ..]) => self.pinch_to([*a, *b]),
            _ => {}
        }
    }

    /// Touches lifted; `touches` lists the fingers still down.
    ///
    /// A pinch that loses a finger ends without resuming a drag. A drag ends
    /// when the last finger lifts; if one finger remains, the drag follows it
    /// from its current position.
    pub fn touch_end(&mut self, touches: &[Point], time_ms: f64) {
        match (self.gesture.phase(), touches) {
            (GesturePhase::Pinching, [] | [_]) => {
                self.gesture.end();
            }
            (GesturePhase::Dragging, []) => self.release(time_ms),
            (GesturePhase::Dragging, [remaining]) => self.gesture.begin_drag(*remaining),
            _ => {}
        }
    }

    /// Zooms by `exp(-delta_y * k)` around the cursor at `position`.
    ///
    /// The content point under the cursor stays put (up to clamping at the
    /// scale bounds). Cancels inertia.
    pub fn wheel(&mut self, position: Point, delta_y: f64) {
        if self.view.is_none() {
            return;
        }
        self.cancel_inertia();
        let factor = (-delta_y * self.config.wheel_sensitivity).exp();
        if let Some(view) = self.view.as_mut() {
            let target = view.transform().scale * factor;
            view.rescale_about(position, target);
        }
        self.request_update();
    }

    /// Replaces the raw transform, for example to restore a saved view.
    ///
    /// Cancels inertia; the transform is clamped on the next bounded update.
    pub fn set_transform(&mut self, transform: Transform) {
        if self.view.is_none() {
            return;
        }
        self.cancel_inertia();
        if let Some(view) = self.view.as_mut() {
            view.set_transform(transform);
        }
        self.request_update();
    }

    /// Requests a bounded update on the next frame.
    ///
    /// Any number of requests before that frame coalesce into one update.
    pub fn request_update(&mut self) {
        self.apply_slot.request(&mut self.queue, FrameTask::Apply);
    }

    /// Clamps the transform into bounds and publishes it immediately.
    ///
    /// Returns `None` while uninitialized. Calling this twice in a row
    /// publishes the same transform.
    pub fn apply_bounded_transform(&mut self) -> Option<Transform> {
        let transform = self.view.as_mut()?.apply_bounded();
        self.published = Some(transform);
        Some(transform)
    }

    /// Runs everything scheduled for this frame at time `now_ms`.
    ///
    /// Returns the transform to render if a bounded update ran. Work
    /// scheduled while the frame runs waits for the next call.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<Transform> {
        let mut published = None;
        for (id, task) in self.queue.take_frame() {
            match task {
                FrameTask::Apply => {
                    if self.apply_slot.fire(id) {
                        published = self.apply_bounded_transform().or(published);
                    }
                }
                FrameTask::InertiaStep => {
                    if self.inertia_slot.fire(id) {
                        self.step_inertia(now_ms);
                    }
                }
            }
        }
        published
    }

    /// Returns `true` if [`PanZoomController::on_frame`] has work queued.
    ///
    /// Hosts use this to decide whether to request another animation frame.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The raw transform, which may be out of bounds until the next update.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.view.as_ref().map(CoverViewport::transform)
    }

    /// The most recently published transform.
    #[must_use]
    pub fn published(&self) -> Option<Transform> {
        self.published
    }

    /// Current scale bounds.
    #[must_use]
    pub fn bounds(&self) -> Option<ScaleBounds> {
        self.view.as_ref().map(CoverViewport::bounds)
    }

    /// Maps a view point to content coordinates under the raw transform.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Option<Point> {
        self.transform().map(|t| t.view_to_content(pt))
    }

    /// Maps a content point to view coordinates under the raw transform.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Option<Point> {
        self.transform().map(|t| t.content_to_view(pt))
    }

    /// Active gesture.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns `true` while inertia is running.
    #[must_use]
    pub fn is_inertia_running(&self) -> bool {
        self.inertia.is_some()
    }

    /// Current inertia velocity in px/ms, if inertia is running.
    #[must_use]
    pub fn inertia_velocity(&self) -> Option<Vec2> {
        self.inertia.as_ref().map(InertiaRun::velocity)
    }

    /// Current drag velocity estimate in px/ms.
    #[must_use]
    pub fn drag_velocity(&self) -> Vec2 {
        self.velocity.velocity()
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            view: self.view.as_ref().map(CoverViewport::debug_info),
            layout: self.layout,
            phase: self.gesture.phase(),
            drag_velocity: self.velocity.velocity(),
            inertia_velocity: self.inertia_velocity(),
            published: self.published,
            queued_tasks: self.queue.len(),
        }
    }

    fn begin_drag(&mut self, position: Point, time_ms: f64) {
        self.cancel_inertia();
        self.velocity.reset_at(time_ms);
        self.gesture.begin_drag(position);
    }

    fn drag_to(&mut self, position: Point, time_ms: f64) {
        let Some(delta) = self.gesture.drag_to(position) else {
            return;
        };
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.pan_by(delta);
        self.velocity.sample(delta, time_ms);
        self.request_update();
    }

    fn release(&mut self, time_ms: f64) {
        self.gesture.end();
        let params = InertiaParams {
            friction: self.config.friction,
            reference_frame_ms: self.config.reference_frame_ms,
            min_speed: self.config.min_inertia_speed,
        };
        if let Some(run) = InertiaRun::start(self.velocity.velocity(), time_ms, params) {
            self.inertia = Some(run);
            self.inertia_slot.request(&mut self.queue, FrameTask::InertiaStep);
        }
    }

    fn begin_pinch(&mut self, touches: [Point; 2]) {
        let Some(scale) = self.transform().map(|t| t.scale) else {
            return;
        };
        self.cancel_inertia();
        self.velocity.reset();
        self.gesture
            .begin_pinch(touches, scale, self.config.min_pinch_distance);
    }

    fn pinch_to(&mut self, touches: [Point; 2]) {
        let Some(step) = self.gesture.pinch_to(touches) else {
            return;
        };
        let Some(view) = self.view.as_mut() else {
            return;
        };
        view.rescale_about(step.center, step.scale);
        self.request_update();
    }

    fn step_inertia(&mut self, now_ms: f64) {
        let (Some(run), Some(view)) = (self.inertia.as_mut(), self.view.as_mut()) else {
            self.inertia = None;
            return;
        };
        let step = run.step(now_ms);
        view.pan_by(step.displacement);
        if step.finished {
            self.inertia = None;
        } else {
            self.inertia_slot.request(&mut self.queue, FrameTask::InertiaStep);
        }
        self.request_update();
    }

    fn cancel_inertia(&mut self) {
        self.inertia = None;
        self.inertia_slot.cancel(&mut self.queue);
    }

    fn interrupt(&mut self) {
        self.cancel_inertia();
        self.gesture.end();
        self.velocity.reset();
    }
}

/// Debug snapshot of a [`PanZoomController`].
#[derive(Clone, Copy, Debug)]
pub struct PanZoomDebugInfo {
    /// Viewport state, if initialized.
    pub view: Option<CoverViewportDebugInfo>,
    /// Layout used for the initial view.
    pub layout: LayoutMode,
    /// Active gesture phase.
    pub phase: GesturePhase,
    /// Drag velocity estimate in px/ms.
    pub drag_velocity: Vec2,
    /// Inertia velocity in px/ms, if running.
    pub inertia_velocity: Option<Vec2>,
    /// Last published transform.
    pub published: Option<Transform>,
    /// Tasks waiting for the next frame.
    pub queued_tasks: usize,
}
