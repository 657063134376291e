use slider_math::{clamp01, lerp};

/// The shape of an animation curve over time.
#[derive(Clone, Copy, Debug, Default)]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,

    /// Cubic bezier curve, corresponding to the control points `P1.x`, `P1.y`, `P2.x`, `P2.y`.
    CubicBezier(f32, f32, f32, f32),

    /// User defined shaping function. Given a `time` within `0..=1`, this function should remap to
    /// a new value, usually - but not necessarily - within the same range.
    Custom(fn(f32) -> f32),
}

impl Ease {
    /// Maximum allowable error for iterative bezier solve
    const EPSILON: f32 = 0.000_000_1;

    /// Maximum number of iterations during bezier solve
    const MAX_ITERS: u8 = 8;

    /// Remap a `time` within `0..=1` with this curve.
    pub fn remap(&self, time: f32) -> f32 {
        let time = clamp01(time);
        match *self {
            Self::Linear => time,
            Self::CubicBezier(p1x, p1y, p2x, p2y) => {
                let t = Self::find_t(time, p1x, p2x);
                Self::bezier_position(t, p1y, p2y)
            }
            Self::Custom(f) => f(time),
        }
    }

    /// One coordinate of a bezier with end points `0` and `1`, at parameter `t`.
    fn bezier_position(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * p1 * t * u * u + 3.0 * p2 * u * t * t + t * t * t
    }

    fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Newton's method: the parameter `t` at which the curve's x equals `x`.
    fn find_t(x: f32, p1x: f32, p2x: f32) -> f32 {
        // x itself is a good first guess: animation curves stay close to x = t.
        (0..Self::MAX_ITERS).fold(x, |guess, _| {
            let error = Self::bezier_position(guess, p1x, p2x) - x;
            let slope = Self::bezier_slope(guess, p1x, p2x);
            if error.abs() < Self::EPSILON || slope == 0.0 {
                guess
            } else {
                clamp01(guess - error / slope)
            }
        })
    }

    /// Material Design "Standard curve".
    pub const fn standard() -> Self {
        Self::CubicBezier(0.4, 0.0, 0.2, 1.0)
    }

    /// Material Design "Deceleration curve": fast start, gentle landing.
    pub const fn ease_out() -> Self {
        Self::CubicBezier(0.0, 0.0, 0.2, 1.0)
    }

    /// Material Design "Acceleration curve".
    pub const fn ease_in() -> Self {
        Self::CubicBezier(0.4, 0.0, 1.0, 1.0)
    }
}

/// Where a [`ProgressAnimation`] is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    /// Nothing is moving.
    #[default]
    Settled,

    /// Moving from `from` to `to`, started at `start_time` (host seconds).
    Animating {
        from: f32,
        to: f32,
        start_time: f64,
        duration: f32,
    },
}

/// An explicit two-state animation of a progress value.
///
/// The host drives it by calling [`Self::tick`] once per frame with its
/// current time. Starting a new animation replaces the one in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressAnimation {
    state: AnimationState,
    ease: Ease,
}

impl ProgressAnimation {
    pub fn new(ease: Ease) -> Self {
        Self {
            state: AnimationState::Settled,
            ease,
        }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Animate from `from` to `to` over `duration` seconds, starting at `now`.
    ///
    /// Any animation in flight is dropped. A duration that is not positive
    /// leaves the animation settled: the caller should jump straight to `to`.
    pub fn start(&mut self, from: f32, to: f32, now: f64, duration: f32) {
        self.state = if duration > 0.0 && duration.is_finite() {
            AnimationState::Animating {
                from,
                to,
                start_time: now,
                duration,
            }
        } else {
            AnimationState::Settled
        };
    }

    /// Stop where we are.
    pub fn cancel(&mut self) {
        self.state = AnimationState::Settled;
    }

    /// The animated value at `now`, or `None` when settled.
    pub fn value_at(&self, now: f64) -> Option<f32> {
        self.sample(now).map(|(value, _)| value)
    }

    /// The value at `now`, and whether the animation has run its course.
    fn sample(&self, now: f64) -> Option<(f32, bool)> {
        match self.state {
            AnimationState::Settled => None,
            AnimationState::Animating {
                from,
                to,
                start_time,
                duration,
            } => {
                let t = ((now - start_time) / duration as f64) as f32;
                if 1.0 <= t {
                    Some((to, true))
                } else {
                    Some((lerp(from..=to, self.ease.remap(t)), false))
                }
            }
        }
    }

    /// Advance to `now`.
    ///
    /// Returns the current value while animating, including the final value
    /// on the frame the animation ends. After that the state is
    /// [`AnimationState::Settled`] and this returns `None`.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let (value, finished) = self.sample(now)?;
        if finished {
            self.state = AnimationState::Settled;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_animation() {
        let mut anim = ProgressAnimation::default();
        assert_eq!(anim.tick(0.0), None);

        anim.start(0.8, 0.0, 10.0, 0.4);
        assert!(anim.is_animating());
        assert_eq!(anim.tick(10.0), Some(0.8));
        let mid = anim.tick(10.2).unwrap_or(f32::NAN);
        assert!((mid - 0.4).abs() < 1e-5, "{mid}");
        assert_eq!(anim.tick(10.4), Some(0.0));
        assert!(!anim.is_animating());
        assert_eq!(anim.tick(10.5), None);
    }

    #[test]
    fn test_settles_with_inexact_duration() {
        // 0.1 and 0.3 have no exact f32 representation.
        for duration in [0.1, 0.3, 0.7] {
            let mut anim = ProgressAnimation::default();
            anim.start(0.0, 1.0, 3.0, duration);
            let end = 3.0 + f64::from(duration);
            assert_eq!(anim.tick(end), Some(1.0), "{duration}");
            assert!(!anim.is_animating(), "{duration}");
            assert_eq!(anim.tick(end), None);
        }
    }

    #[test]
    fn test_time_before_start_is_clamped() {
        let mut anim = ProgressAnimation::default();
        anim.start(1.0, 0.0, 5.0, 1.0);
        assert_eq!(anim.value_at(4.0), Some(1.0));
    }

    #[test]
    fn test_new_animation_replaces_old() {
        let mut anim = ProgressAnimation::default();
        anim.start(1.0, 0.0, 0.0, 1.0);
        anim.start(0.5, 1.0, 0.5, 2.0);
        assert_eq!(
            anim.state(),
            AnimationState::Animating {
                from: 0.5,
                to: 1.0,
                start_time: 0.5,
                duration: 2.0
            }
        );
        assert_eq!(anim.tick(2.5), Some(1.0));
    }

    #[test]
    fn test_zero_duration_settles() {
        let mut anim = ProgressAnimation::default();
        anim.start(1.0, 0.0, 0.0, 0.0);
        assert!(!anim.is_animating());
        anim.start(1.0, 0.0, 0.0, f32::NAN);
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_ease_end_points() {
        for ease in [
            Ease::Linear,
            Ease::standard(),
            Ease::ease_in(),
            Ease::ease_out(),
            Ease::Custom(|t| t * t),
        ] {
            assert!(ease.remap(0.0).abs() < 1e-4, "{ease:?}");
            assert!((ease.remap(1.0) - 1.0).abs() < 1e-4, "{ease:?}");
        }
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        let t = 0.3;
        assert!(Ease::ease_out().remap(t) > Ease::Linear.remap(t));
        assert!(Ease::ease_in().remap(t) < Ease::Linear.remap(t));
    }
}
