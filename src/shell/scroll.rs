use super::nav::NavMenu;

/// Scroll offset in pixels beyond which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Latest vertical scroll sample. `scrolled` is always computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollWatcher {
    offset: f64,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn scrolled(&self) -> bool {
        is_scrolled(self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn derive(scroll: &ScrollWatcher, menu: &NavMenu) -> Self {
        Self {
            scrolled: scroll.scrolled(),
            menu_open: menu.is_open(),
        }
    }

    /// Background treatment of the fixed nav bar.
    pub fn bar_class(&self) -> &'static str {
        nav_bar_class(self.scrolled)
    }
}

pub fn nav_bar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "bg-white/95 backdrop-blur-md shadow-lg"
    } else {
        "bg-transparent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn test_watcher_follows_latest_sample() {
        let mut watcher = ScrollWatcher::new();
        assert!(!watcher.scrolled());
        watcher.on_scroll(80.0);
        assert!(watcher.scrolled());
        watcher.on_scroll(10.0);
        assert!(!watcher.scrolled());
    }

    #[test]
    fn test_bar_class() {
        let mut menu = NavMenu::new();
        let mut watcher = ScrollWatcher::new();
        let state = NavState::derive(&watcher, &menu);
        assert_eq!(state, NavState::default());
        assert_eq!(state.bar_class(), "bg-transparent");

        watcher.on_scroll(200.0);
        menu.toggle();
        let state = NavState::derive(&watcher, &menu);
        assert!(state.scrolled && state.menu_open);
        assert!(state.bar_class().contains("shadow-lg"));
    }
}
