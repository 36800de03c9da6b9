mod cursor;
mod loading;
mod nav;
mod scroll;
mod section;

use std::time::Duration;

pub use cursor::CursorPosition;
pub use loading::{LoadingState, SPLASH_DELAY};
pub use nav::{NavError, Viewport};
pub use scroll::NavState;
pub use section::SectionId;

use cursor::CursorTracker;
use loading::LoadingGate;
use nav::NavMenu;
use scroll::ScrollWatcher;

/// Which of the two disjoint view trees is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTree {
    Splash,
    Main,
}

/// Blocks of the main view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBlock {
    CursorGlow,
    FloatingShapes,
    Nav,
    Hero,
    StackMarquee,
    Section(SectionId),
    TraitsMarquee,
    Footer,
}

pub const MAIN_LAYOUT: [PageBlock; 11] = [
    PageBlock::CursorGlow,
    PageBlock::FloatingShapes,
    PageBlock::Nav,
    PageBlock::Hero,
    PageBlock::StackMarquee,
    PageBlock::Section(SectionId::About),
    PageBlock::Section(SectionId::Experience),
    PageBlock::Section(SectionId::Skills),
    PageBlock::TraitsMarquee,
    PageBlock::Section(SectionId::Contact),
    PageBlock::Footer,
];

/// The interactive shell of the page, independent of any rendering host.
///
/// Events from the host (timer, scroll, pointer, clicks) are fed in through
/// the `on_*` methods and navigation effects go out through the `Viewport`.
/// Scroll and pointer events that arrive before the gate opens are dropped,
/// since nothing is subscribed to them yet.
pub struct PageShell<V> {
    gate: LoadingGate,
    scroll: ScrollWatcher,
    cursor: CursorTracker,
    menu: NavMenu,
    viewport: V,
}

impl<V: Viewport> PageShell<V> {
    pub fn new(viewport: V, fine_pointer: bool) -> Self {
        Self {
            gate: LoadingGate::default(),
            scroll: ScrollWatcher::new(),
            cursor: CursorTracker::new(fine_pointer),
            menu: NavMenu::new(),
            viewport,
        }
    }

    pub fn view(&self) -> ViewTree {
        match self.gate.state() {
            LoadingState::Loading => ViewTree::Splash,
            LoadingState::Ready => ViewTree::Main,
        }
    }

    pub fn layout(&self) -> &'static [PageBlock] {
        match self.view() {
            ViewTree::Splash => &[],
            ViewTree::Main => &MAIN_LAYOUT,
        }
    }

    /// How long the host should wait before reporting the splash time as elapsed.
    pub fn splash_delay(&self) -> Duration {
        self.gate.delay()
    }

    pub fn nav_state(&self) -> NavState {
        NavState::derive(&self.scroll, &self.menu)
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    pub fn on_clock(&mut self, elapsed: Duration) {
        self.gate.advance(elapsed);
    }

    pub fn on_scroll(&mut self, offset: f64) {
        if self.gate.is_ready() {
            self.scroll.on_scroll(offset);
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.gate.is_ready() {
            self.cursor.pointer_moved(x, y);
        }
    }

    pub fn set_fine_pointer(&mut self, fine_pointer: bool) {
        self.cursor.set_fine_pointer(fine_pointer);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn navigate_to(&mut self, target: &str) {
        self.menu.select(target, &mut self.viewport);
    }

    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use super::nav::tests::FakeViewport;
    use super::*;

    fn loaded_shell() -> PageShell<FakeViewport> {
        let mut shell = PageShell::new(FakeViewport::with_all_sections(), true);
        shell.on_clock(SPLASH_DELAY);
        shell
    }

    #[test]
    fn test_splash_then_main() {
        let mut shell = PageShell::new(FakeViewport::with_all_sections(), true);
        assert_eq!(shell.view(), ViewTree::Splash);
        assert!(shell.layout().is_empty());

        shell.on_clock(Duration::from_millis(1000));
        assert_eq!(shell.view(), ViewTree::Splash);
        shell.on_clock(Duration::from_millis(500));
        assert_eq!(shell.view(), ViewTree::Main);
        assert_eq!(shell.nav_state(), NavState::default());
        assert_eq!(shell.layout(), &MAIN_LAYOUT);
    }

    #[test]
    fn test_sections_render_in_nav_order() {
        let sections = MAIN_LAYOUT
            .iter()
            .filter_map(|b| match b {
                PageBlock::Section(s) => Some(*s),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(sections, SectionId::ALL);
    }

    #[test]
    fn test_scroll_switches_nav_style() {
        let mut shell = loaded_shell();
        assert_eq!(shell.nav_state().bar_class(), "bg-transparent");
        shell.on_scroll(80.0);
        assert!(shell.nav_state().scrolled);
        assert_eq!(
            shell.nav_state().bar_class(),
            "bg-white/95 backdrop-blur-md shadow-lg"
        );
        shell.on_scroll(0.0);
        assert!(!shell.nav_state().scrolled);
    }

    #[test]
    fn test_events_before_ready_are_ignored() {
        let mut shell = PageShell::new(FakeViewport::default(), true);
        shell.on_scroll(500.0);
        shell.on_pointer_move(10.0, 10.0);
        shell.on_clock(SPLASH_DELAY);
        assert!(!shell.nav_state().scrolled);
        assert_eq!(shell.cursor(), CursorPosition::default());
    }

    #[test]
    fn test_menu_then_section_link() {
        let mut shell = loaded_shell();
        shell.toggle_menu();
        assert!(shell.nav_state().menu_open);

        shell.navigate_to("experience");
        assert!(!shell.nav_state().menu_open);
        let anchor = shell.viewport.anchors[&SectionId::Experience];
        assert_eq!(shell.viewport.offset, anchor);

        // the real page would now report the new offset back
        shell.on_scroll(anchor);
        assert_eq!(
            shell.nav_state(),
            NavState {
                scrolled: true,
                menu_open: false
            }
        );
    }

    #[test]
    fn test_navigate_to_unknown_only_closes_menu() {
        let mut shell = loaded_shell();
        shell.on_scroll(20.0);
        shell.on_pointer_move(3.0, 4.0);
        shell.toggle_menu();
        shell.navigate_to("nonexistent");

        assert_eq!(shell.nav_state(), NavState::default());
        assert_eq!(shell.cursor(), CursorPosition::new(3.0, 4.0));
        assert_eq!(shell.viewport.scrolls, 0);
        assert_eq!(shell.view(), ViewTree::Main);
    }

    #[test]
    fn test_cursor_echo_after_ready() {
        let mut shell = loaded_shell();
        shell.on_pointer_move(120.0, 340.0);
        assert_eq!(shell.cursor(), CursorPosition::new(120.0, 340.0));
    }

    #[test]
    fn test_touch_only_cursor_is_inert() {
        let mut shell = PageShell::new(FakeViewport::default(), false);
        shell.on_clock(SPLASH_DELAY);
        shell.on_pointer_move(120.0, 340.0);
        assert_eq!(shell.cursor(), CursorPosition::default());
    }

    #[test]
    fn test_clock_from_scheduled_delay() {
        let mut shell = PageShell::new(FakeViewport::default(), true);
        assert_eq!(shell.splash_delay(), SPLASH_DELAY);
        let delay = shell.splash_delay();
        shell.on_clock(delay);
        assert_eq!(shell.view(), ViewTree::Main);
        // a second fire from a stale timer leaves the page as it is
        shell.on_clock(delay);
        assert_eq!(shell.view(), ViewTree::Main);
    }

    #[test]
    fn test_pointer_capability_learned_after_mount() {
        let mut shell = PageShell::new(FakeViewport::default(), false);
        shell.on_clock(SPLASH_DELAY);
        shell.on_pointer_move(5.0, 6.0);
        assert_eq!(shell.cursor(), CursorPosition::default());
        shell.set_fine_pointer(true);
        shell.on_pointer_move(5.0, 6.0);
        assert_eq!(shell.cursor(), CursorPosition::new(5.0, 6.0));
    }

    #[test]
    fn test_scroll_to_top() {
        let mut shell = loaded_shell();
        shell.navigate_to("contact");
        assert!(shell.viewport.offset > 0.0);
        shell.scroll_to_top();
        assert_eq!(shell.viewport.offset, 0.0);
    }
}
