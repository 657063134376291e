use slider_color::Rgba;
use slider_math::{clamp01, Direction, Pos2, Rect, TrackGeometry, Vec2};

use crate::{
    paint, AnimationState, Ease, FontId, ImageSource, ProgressAnimation, Response, Shape,
    SliderFrame, SwitchSliderStyle, TextMeasure,
};

/// How long the button takes to spring back across the whole track, in seconds.
///
/// A release part way along takes proportionally less.
pub const RELEASE_SECONDS_PER_TRACK: f32 = 0.5;

/// A "slide to confirm" control.
///
/// The slider is driven entirely by the host: hand it a layout rect with
/// [`Self::set_rect`], forward pointer events, call [`Self::update`] once per
/// frame with the current time, and paint the output of [`Self::shapes`].
///
/// Progress is the position of the button along the track, `0` at the left
/// and `1` at the right. In right-to-left layouts the button starts at `1`
/// and completes at `0`.
#[derive(Clone, Debug)]
pub struct SwitchSlider {
    style: SwitchSliderStyle,
    direction: Direction,
    rect: Rect,
    progress: f32,
    tracking: bool,
    completed: bool,
    animation: ProgressAnimation,

    /// Invalidated by style changes that affect layout.
    intrinsic_size: Option<Vec2>,

    needs_repaint: bool,

    /// So we only complain once about each unusable layout.
    warned_degenerate: bool,
}

impl SwitchSlider {
    pub fn new(style: SwitchSliderStyle, direction: Direction) -> Self {
        if let Err(err) = style.validate() {
            log::warn!("Switch slider created with an invalid style: {err}");
        }
        Self {
            style,
            direction,
            rect: Rect::ZERO,
            progress: direction.initial_progress(),
            tracking: false,
            completed: false,
            animation: ProgressAnimation::new(Ease::Linear),
            intrinsic_size: None,
            needs_repaint: true,
            warned_degenerate: false,
        }
    }

    /// Use this curve for the release animation. Linear by default.
    #[inline]
    pub fn with_release_ease(mut self, ease: Ease) -> Self {
        self.animation = ProgressAnimation::new(ease);
        self
    }

    // ------------------------------------------------------------------------
    // Queries

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// How far the button has travelled towards completion, in `0..=1`.
    #[inline]
    pub fn travel(&self) -> f32 {
        self.direction.mirror(self.progress)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn style(&self) -> &SwitchSliderStyle {
        &self.style
    }

    /// Is the user dragging the button?
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Has the button reached the end of the track?
    ///
    /// A completed slider ignores pointer input until [`Self::reset`].
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[inline]
    pub fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    /// Something changed since the last [`Self::update`].
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.rect, self.style.track_gap, self.direction)
    }

    pub fn frame(&self) -> SliderFrame {
        SliderFrame {
            rect: self.rect,
            progress: self.progress,
            direction: self.direction,
            gap: self.style.track_gap,
        }
    }

    /// Where the button currently is.
    pub fn button_rect(&self) -> Rect {
        self.geometry().button_rect(self.progress)
    }

    // ------------------------------------------------------------------------
    // Layout

    /// The size this slider would like to be. Cached until the style changes.
    pub fn intrinsic_size(&mut self, measure: &dyn TextMeasure) -> Vec2 {
        *self
            .intrinsic_size
            .get_or_insert_with(|| crate::intrinsic_size(&self.style, measure))
    }

    /// Place the slider. `rect` is in the same space as the pointer positions.
    pub fn set_rect(&mut self, rect: Rect) {
        if rect == self.rect {
            return;
        }
        self.rect = rect;
        self.needs_repaint = true;

        if self.geometry().ranges().can_drag() {
            self.warned_degenerate = false;
        } else if !self.warned_degenerate {
            self.warned_degenerate = true;
            log::warn!(
                "Switch slider of size {:?} with gap {} is too small for its button to move",
                rect.size(),
                self.style.track_gap
            );
        }
    }

    // ------------------------------------------------------------------------
    // Input

    /// The pointer went down at `pos`.
    ///
    /// Starts a drag if `pos` is on the button. Grabbing the button while it
    /// springs back stops it where it is.
    pub fn pointer_down(&mut self, pos: Pos2, now: f64) -> Response {
        let mut response = Response::default();
        if self.tracking || self.completed || !self.geometry().ranges().can_drag() {
            return response;
        }

        if let Some(progress) = self.animation.value_at(now) {
            self.set_progress_internal(progress, &mut response);
        }

        if !self.button_rect().contains(pos) {
            return response;
        }

        self.animation.cancel();
        self.tracking = true;
        response.drag_started = true;
        response.repaint = true;
        log::debug!("Switch slider drag started at progress {}", self.progress);
        response
    }

    /// The pointer moved to `pos`. Only matters while dragging.
    pub fn pointer_move(&mut self, pos: Pos2) -> Response {
        let mut response = Response::default();
        if !self.tracking {
            return response;
        }
        let geometry = self.geometry();
        if !geometry.ranges().can_drag() {
            return response;
        }

        let progress = geometry.progress_for_pointer(pos);
        log::trace!("Switch slider progress {progress}");
        self.set_progress_internal(progress, &mut response);

        self.complete_if_at_end(&mut response);
        response
    }

    /// The pointer was released. Springs the button back unless it made it
    /// all the way.
    pub fn pointer_up(&mut self, now: f64) -> Response {
        let mut response = Response::default();
        if !self.tracking {
            return response;
        }
        self.tracking = false;
        response.drag_stopped = true;
        response.repaint = true;

        if self.travel() < 1.0 {
            self.animate_to_start(now);
        }
        log::debug!("Switch slider released at progress {}", self.progress);
        response
    }

    /// Advance animations to `now`. Call once per frame.
    pub fn update(&mut self, now: f64) -> Response {
        let mut response = Response::default();
        if let Some(progress) = self.animation.tick(now) {
            self.set_progress_internal(progress, &mut response);
            response.repaint = true;
        }
        if std::mem::take(&mut self.needs_repaint) {
            response.repaint = true;
        }
        response
    }

    /// Send the button back to the start, animated, and accept input again.
    pub fn reset(&mut self, now: f64) -> Response {
        let mut response = Response {
            repaint: true,
            drag_stopped: self.tracking,
            ..Default::default()
        };
        if let Some(progress) = self.animation.value_at(now) {
            self.set_progress_internal(progress, &mut response);
        }
        self.tracking = false;
        self.completed = false;
        self.animate_to_start(now);
        response
    }

    /// Jump to `progress` without animating.
    ///
    /// Jumping to the end of the track completes the slider, ending any drag.
    pub fn set_progress(&mut self, progress: f32) -> Response {
        let mut response = Response::default();
        self.animation.cancel();
        self.set_progress_internal(progress, &mut response);
        self.complete_if_at_end(&mut response);
        response
    }

    fn complete_if_at_end(&mut self, response: &mut Response) {
        if self.completed || self.travel() < 1.0 {
            return;
        }
        response.drag_stopped = self.tracking;
        response.completed = true;
        self.tracking = false;
        self.completed = true;
        log::debug!("Switch slider completed");
    }

    fn set_progress_internal(&mut self, progress: f32, response: &mut Response) {
        let progress = clamp01(progress);
        if progress != self.progress {
            self.progress = progress;
            self.needs_repaint = true;
            response.mark_changed();
        }
    }

    fn animate_to_start(&mut self, now: f64) {
        let travel = self.travel();
        let duration = travel * RELEASE_SECONDS_PER_TRACK;
        let target = self.direction.mirror(0.0);
        log::debug!("Switch slider animating from {} to {target} over {duration}s", self.progress);
        self.animation.start(self.progress, target, now, duration);
        if !self.animation.is_animating() {
            self.progress = target;
        }
    }

    // ------------------------------------------------------------------------
    // Style

    /// Replace the whole style.
    pub fn set_style(&mut self, style: SwitchSliderStyle) {
        if let Err(err) = style.validate() {
            log::warn!("Switch slider given an invalid style: {err}");
        }
        self.style = style;
        self.intrinsic_size = None;
        self.needs_repaint = true;
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.style.text = text;
        self.intrinsic_size = None;
        self.needs_repaint = true;
    }

    pub fn set_text_font(&mut self, font: FontId) {
        self.style.text_font = font;
        self.intrinsic_size = None;
        self.needs_repaint = true;
    }

    pub fn set_image(&mut self, image: Option<ImageSource>) {
        self.style.image = image;
        self.intrinsic_size = None;
        self.needs_repaint = true;
    }

    pub fn set_track_gap(&mut self, gap: f32) {
        self.style.track_gap = gap;
        self.intrinsic_size = None;
        self.needs_repaint = true;
    }

    pub fn set_button_color(&mut self, color: Rgba) {
        self.style.button_color = color;
        self.needs_repaint = true;
    }

    pub fn set_track_color(&mut self, color: Rgba) {
        self.style.track_color = color;
        self.needs_repaint = true;
    }

    pub fn set_text_color(&mut self, color: Rgba) {
        self.style.text_color = color;
        self.needs_repaint = true;
    }

    // ------------------------------------------------------------------------
    // Painting

    /// What to paint this frame, back to front.
    pub fn shapes(&self, measure: &dyn TextMeasure) -> Vec<Shape> {
        paint(&self.frame(), &self.style, measure)
    }
}
