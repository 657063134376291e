/// What happened to a [`crate::SwitchSlider`] as the result of one input event or frame.
///
/// A small bag of flags the host checks and then throws away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use = "You should check if the slider was completed or needs a repaint"]
pub struct Response {
    pub(crate) changed: bool,
    pub(crate) drag_started: bool,
    pub(crate) drag_stopped: bool,
    pub(crate) completed: bool,
    pub(crate) repaint: bool,
}

impl Response {
    /// The progress changed.
    #[inline]
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// The button was grabbed this event.
    #[inline]
    pub fn drag_started(&self) -> bool {
        self.drag_started
    }

    /// The button was let go this event, or tracking ended because the slider completed.
    #[inline]
    pub fn drag_stopped(&self) -> bool {
        self.drag_stopped
    }

    /// The button reached the trailing end of the track this event.
    ///
    /// This is the "slide to confirm" moment.
    #[inline]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// The host should paint the slider again.
    #[inline]
    pub fn repaint(&self) -> bool {
        self.repaint
    }

    /// Combine the flags of two responses.
    pub fn union(self, other: Self) -> Self {
        Self {
            changed: self.changed || other.changed,
            drag_started: self.drag_started || other.drag_started,
            drag_stopped: self.drag_stopped || other.drag_stopped,
            completed: self.completed || other.completed,
            repaint: self.repaint || other.repaint,
        }
    }

    pub(crate) fn mark_changed(&mut self) {
        self.changed = true;
        self.repaint = true;
    }
}

impl std::ops::BitOr for Response {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Response {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
