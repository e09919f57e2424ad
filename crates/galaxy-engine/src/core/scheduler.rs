/// Handle returned by the platform when a frame callback is requested
/// (`requestAnimationFrame`'s id on the web).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Platform primitive for one-shot per-refresh callbacks.
pub trait FrameRequester {
    /// Ask for a single callback at the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested callback that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// Never started.
    #[default]
    Idle,
    Running,
    /// Cancelled; terminal.
    Stopped,
}

/// Tail self-scheduling frame loop.
///
/// Exactly one callback is outstanding while running. Each delivered
/// callback runs one step and re-arms at its end; there is no catch-up
/// stepping, so a slow frame only delays the next one. The pending handle is
/// always recorded so `cancel` can revoke it.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    state: SchedulerState,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the first callback. Has no effect unless idle.
    pub fn start<R: FrameRequester + ?Sized>(&mut self, requester: &mut R) {
        if self.state != SchedulerState::Idle {
            log::warn!("frame scheduler start ignored in state {:?}", self.state);
            return;
        }
        self.state = SchedulerState::Running;
        self.pending = Some(requester.request_frame());
    }

    /// Accept a delivered callback. Returns true if the caller should run a
    /// step now; false for stale deliveries (after cancel, or with nothing
    /// pending).
    pub fn fire(&mut self) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        match self.pending.take() {
            Some(_) => {
                self.frames += 1;
                true
            }
            None => false,
        }
    }

    /// Re-arm at the end of a frame. No-op once stopped or if a callback is
    /// already pending.
    pub fn rearm<R: FrameRequester + ?Sized>(&mut self, requester: &mut R) {
        if self.state != SchedulerState::Running || self.pending.is_some() {
            return;
        }
        self.pending = Some(requester.request_frame());
    }

    /// Stop the loop and revoke the outstanding callback. Idempotent.
    pub fn cancel<R: FrameRequester + ?Sized>(&mut self, requester: &mut R) {
        if let Some(handle) = self.pending.take() {
            requester.cancel_frame(handle);
        }
        if self.state != SchedulerState::Stopped {
            log::debug!("frame loop stopped after {} frames", self.frames);
        }
        self.state = SchedulerState::Stopped;
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of frames delivered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records requests and cancellations like a browser's rAF table.
    #[derive(Debug, Default)]
    pub(crate) struct MockFrames {
        pub next: i32,
        pub outstanding: Vec<FrameHandle>,
        pub cancelled: Vec<FrameHandle>,
    }

    impl FrameRequester for MockFrames {
        fn request_frame(&mut self) -> FrameHandle {
            self.next += 1;
            let handle = FrameHandle(self.next);
            self.outstanding.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.outstanding.retain(|h| *h != handle);
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn start_arms_one_callback() {
        let mut frames = MockFrames::default();
        let mut sched = FrameScheduler::new();
        sched.start(&mut frames);
        assert!(sched.is_running());
        assert_eq!(sched.pending(), Some(FrameHandle(1)));
        assert_eq!(frames.outstanding.len(), 1);
    }

    #[test]
    fn tail_rearm_keeps_single_outstanding_callback() {
        let mut frames = MockFrames::default();
        let mut sched = FrameScheduler::new();
        sched.start(&mut frames);
        for i in 1..=10 {
            frames.outstanding.clear(); // delivered
            assert!(sched.fire());
            sched.rearm(&mut frames);
            sched.rearm(&mut frames); // second rearm is a no-op
            assert_eq!(frames.outstanding.len(), 1);
            assert_eq!(sched.frames(), i);
        }
    }

    #[test]
    fn cancel_revokes_pending_handle() {
        let mut frames = MockFrames::default();
        let mut sched = FrameScheduler::new();
        sched.start(&mut frames);
        sched.cancel(&mut frames);
        assert_eq!(frames.cancelled, vec![FrameHandle(1)]);
        assert!(frames.outstanding.is_empty());
        assert_eq!(sched.state(), SchedulerState::Stopped);
    }

    #[test]
    fn stale_callback_after_cancel_is_ignored() {
        let mut frames = MockFrames::default();
        let mut sched = FrameScheduler::new();
        sched.start(&mut frames);
        sched.cancel(&mut frames);
        assert!(!sched.fire());
        sched.rearm(&mut frames);
        assert!(sched.pending().is_none());
        assert_eq!(frames.next, 1);
    }

    #[test]
    fn cancel_is_idempotent_and_safe_before_start() {
        let mut frames = MockFrames::default();
        let mut sched = FrameScheduler::new();
        sched.cancel(&mut frames);
        sched.cancel(&mut frames);
        assert!(frames.cancelled.is_empty());
        sched.start(&mut frames);
        assert!(!sched.is_running(), "stopped scheduler must not restart");
    }

    #[test]
    fn fire_without_pending_is_rejected() {
        let mut frames = MockFrames::default();
        let mut sched = FrameScheduler::new();
        sched.start(&mut frames);
        assert!(sched.fire());
        assert!(!sched.fire(), "duplicate delivery must not double-step");
    }
}
