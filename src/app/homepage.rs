use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::about::About;
use super::contact::{Contact, Footer};
use super::cursor::CursorGlow;
use super::decor::{FloatingShapes, MarqueeBand};
use super::experience::Experience;
use super::hero::Hero;
use super::loading::{use_splash_timer, Splash};
use super::nav::Nav;
use super::skills::Skills;
use super::viewport::BrowserViewport;
use crate::content::{STACK_MARQUEE, TRAITS_MARQUEE};
use crate::shell::{PageBlock, PageShell, SectionId, ViewTree};

/// Interactive state of the page, shared with the nav and cursor components.
pub type Page = RwSignal<PageShell<BrowserViewport>>;

#[component]
pub fn HomePage() -> impl IntoView {
    // the fine pointer check needs the browser, so the cursor starts inert
    let page: Page = RwSignal::new(PageShell::new(BrowserViewport, false));
    provide_context(page);
    use_splash_timer(page);

    let view_tree = Memo::new(move |_| page.with(|p| p.view()));

    view! {
        <Title text="Portfolio" />
        {move || match view_tree.get() {
            ViewTree::Splash => Either::Left(view! { <Splash /> }),
            ViewTree::Main => Either::Right(view! { <MainView /> }),
        }}
    }
}

#[component]
fn MainView() -> impl IntoView {
    let page = expect_context::<Page>();
    let layout = page.with_untracked(|p| p.layout());

    view! {
        <div class="min-h-screen bg-white text-black selection:bg-lime-400 selection:text-black overflow-x-hidden">
            {layout.iter().map(|block| render_block(*block)).collect_view()}
        </div>
    }
}

fn render_block(block: PageBlock) -> AnyView {
    match block {
        PageBlock::CursorGlow => view! { <CursorGlow /> }.into_any(),
        PageBlock::FloatingShapes => view! { <FloatingShapes /> }.into_any(),
        PageBlock::Nav => view! { <Nav /> }.into_any(),
        PageBlock::Hero => view! { <Hero /> }.into_any(),
        PageBlock::StackMarquee => view! { <MarqueeBand marquee={&STACK_MARQUEE} /> }.into_any(),
        PageBlock::Section(SectionId::About) => view! { <About /> }.into_any(),
        PageBlock::Section(SectionId::Experience) => view! { <Experience /> }.into_any(),
        PageBlock::Section(SectionId::Skills) => view! { <Skills /> }.into_any(),
        PageBlock::TraitsMarquee => view! { <MarqueeBand marquee={&TRAITS_MARQUEE} /> }.into_any(),
        PageBlock::Section(SectionId::Contact) => view! { <Contact /> }.into_any(),
        PageBlock::Footer => view! { <Footer /> }.into_any(),
    }
}
