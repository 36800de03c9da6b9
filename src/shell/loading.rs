use std::time::Duration;

/// How long the splash view stays up after the page mounts.
pub const SPLASH_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
}

/// One-shot gate between the splash view and the main view.
///
/// The transition is one way: once `Ready`, the gate never goes back to
/// `Loading`. In the browser the gate is fired by a timer; `advance` drives
/// it from an explicit clock instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    state: LoadingState,
    delay: Duration,
    elapsed: Duration,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(SPLASH_DELAY)
    }
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: LoadingState::Loading,
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadingState::Ready
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Timer callback. Returns true only for the call that flipped the gate.
    pub fn fire(&mut self) -> bool {
        if self.is_ready() {
            return false;
        }
        self.state = LoadingState::Ready;
        true
    }

    /// Moves the clock forward, firing once the delay has fully elapsed.
    pub fn advance(&mut self, by: Duration) -> LoadingState {
        self.elapsed = self.elapsed.saturating_add(by);
        if self.elapsed >= self.delay {
            self.fire();
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let gate = LoadingGate::default();
        assert_eq!(gate.state(), LoadingState::Loading);
        assert_eq!(gate.delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_fires_at_delay_boundary() {
        let mut gate = LoadingGate::default();
        assert_eq!(gate.advance(Duration::from_millis(1499)), LoadingState::Loading);
        assert_eq!(gate.advance(Duration::from_millis(1)), LoadingState::Ready);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let mut gate = LoadingGate::default();
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(gate.is_ready());
    }

    #[test]
    fn test_never_reverts() {
        let mut gate = LoadingGate::default();
        gate.advance(Duration::from_secs(2));
        for _ in 0..10 {
            assert_eq!(gate.advance(Duration::from_millis(500)), LoadingState::Ready);
        }
        gate.fire();
        assert_eq!(gate.state(), LoadingState::Ready);
    }

    #[test]
    fn test_clock_saturates() {
        let mut gate = LoadingGate::new(Duration::MAX);
        gate.advance(Duration::MAX);
        gate.advance(Duration::MAX);
        assert!(gate.is_ready());
    }
}
