use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use horologe_engine::coords::Viewport;
use horologe_engine::schedule::{
    DEFAULT_REDRAW_INTERVAL, Scheduler, SchedulerId, TaskToken, TickControl,
};
use horologe_engine::scene::DrawList;
use horologe_engine::text::TextMeasure;
use horologe_engine::time::{ClockTime, LocalClock, Monotonic, TimeSource};

use crate::painter::Painter;
use crate::renderer::ClockFaceRenderer;
use crate::style::FaceStyle;

/// State written by the redraw task and read by the host's draw pass.
#[derive(Debug)]
struct ViewState {
    time: Cell<ClockTime>,
    redraw_requested: Cell<bool>,
    ticks: Cell<u64>,
}

/// A clock face bound to a host's attach/detach lifecycle.
///
/// While attached, a scheduler task re-samples the time source every
/// `interval` and flags a redraw. The host polls [`take_redraw`](Self::take_redraw)
/// and calls [`draw`](Self::draw) or [`frame`](Self::frame) when it is set.
///
/// The task only holds a weak reference to the view: a view dropped without
/// [`detach`](Self::detach) stops its task on the next tick.
#[derive(Debug)]
pub struct ClockView<S: TimeSource = LocalClock> {
    style: FaceStyle,
    source: S,
    interval: Duration,
    state: Rc<ViewState>,
    /// Scheduler the redraw task lives on, and its token there.
    attachment: Option<(SchedulerId, TaskToken)>,
}

impl ClockView<LocalClock> {
    /// View showing system local time.
    pub fn local(style: FaceStyle) -> Self {
        Self::new(style, LocalClock::new())
    }
}

impl<S> ClockView<S>
where
    S: TimeSource + Clone + 'static,
{
    pub fn new(style: FaceStyle, source: S) -> Self {
        let state = Rc::new(ViewState {
            time: Cell::new(source.now()),
            redraw_requested: Cell::new(true),
            ticks: Cell::new(0),
        });
        Self { style, source, interval: DEFAULT_REDRAW_INTERVAL, state, attachment: None }
    }

    /// Overrides the redraw cadence. Takes effect on the next `attach`.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts the redraw task on `scheduler`.
    ///
    /// Attaching an attached view returns the existing token; a view is
    /// attached to one scheduler at a time, and attaching it to a second one
    /// leaves it on the first.
    pub fn attach<C: Monotonic>(&mut self, scheduler: &mut Scheduler<C>) -> TaskToken {
        if let Some((owner, token)) = self.attachment {
            if owner != scheduler.id() {
                log::warn!("clock view already attached to {owner:?}; ignoring {:?}", scheduler.id());
            }
            return token;
        }

        let state: Weak<ViewState> = Rc::downgrade(&self.state);
        let source = self.source.clone();
        let token = scheduler.start(self.interval, move |tick| {
            let Some(state) = state.upgrade() else {
                log::debug!("clock view dropped while attached; stopping {:?}", tick.token);
                return TickControl::Stop;
            };
            state.time.set(source.now());
            state.redraw_requested.set(true);
            state.ticks.set(state.ticks.get() + 1);
            TickControl::Continue
        });

        log::debug!("clock view attached as {token:?}");
        self.attachment = Some((scheduler.id(), token));
        token
    }

    /// Stops the redraw task. Returns `false` if the view was not attached
    /// to `scheduler`, in which case nothing on `scheduler` is touched.
    ///
    /// After this returns `true`, the scheduler never runs the view's task again.
    pub fn detach<C: Monotonic>(&mut self, scheduler: &mut Scheduler<C>) -> bool {
        let Some((owner, token)) = self.attachment else {
            return false;
        };
        if owner != scheduler.id() {
            log::warn!("clock view is attached to {owner:?}, not {:?}; not detaching", scheduler.id());
            return false;
        }

        self.attachment = None;
        if !scheduler.stop(token) {
            log::debug!("clock view task {token:?} had already stopped");
        }
        log::debug!("clock view detached after {} ticks", self.state.ticks.get());
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    // ── draw pass ─────────────────────────────────────────────────────────

    /// Time sampled by the most recent tick (or at construction).
    pub fn time(&self) -> ClockTime {
        self.state.time.get()
    }

    /// Number of redraw ticks delivered since construction.
    pub fn ticks(&self) -> u64 {
        self.state.ticks.get()
    }

    /// Returns and clears the pending redraw flag.
    pub fn take_redraw(&self) -> bool {
        self.state.redraw_requested.replace(false)
    }

    pub fn draw(&self, painter: &mut Painter<'_>, viewport: Viewport) {
        ClockFaceRenderer::new(&self.style).paint(painter, self.time(), viewport);
    }

    pub fn frame(&self, viewport: Viewport, measure: &dyn TextMeasure) -> DrawList {
        ClockFaceRenderer::new(&self.style).frame(self.time(), viewport, measure)
    }
}
