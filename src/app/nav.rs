use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::homepage::Page;
use crate::content::PROFILE;
use crate::shell::{NavState, SectionId};

const BAR_LINE: &str = "absolute left-0 h-0.5 w-8 bg-black transition-all";

#[component]
pub fn Nav() -> impl IntoView {
    let page = expect_context::<Page>();
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = scroll_y.get();
        page.update(|p| p.on_scroll(offset));
    });

    let nav_state = Memo::new(move |_| page.with(|p| p.nav_state()));
    let menu_open = move || nav_state.get().menu_open;

    let navigate_to = move |target: &'static str| page.update(|p| p.navigate_to(target));

    let desktop_links = SectionId::ALL
        .iter()
        .map(|section| {
            let anchor = section.anchor();
            view! {
                <button
                    on:click=move |_| navigate_to(anchor)
                    class="font-bold uppercase text-sm tracking-wider hover:text-lime-500 transition-colors relative group"
                >
                    {anchor}
                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-lime-500 group-hover:w-full transition-all duration-300" />
                </button>
            }
        })
        .collect_view();

    let mobile_links = SectionId::ALL
        .iter()
        .map(|section| {
            let anchor = section.anchor();
            view! {
                <button
                    on:click=move |_| navigate_to(anchor)
                    class="font-bold uppercase text-left py-2 hover:text-lime-500 transition-colors"
                >
                    {anchor}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 w-full z-50 transition-all duration-300 {}",
                nav_state.with(NavState::bar_class),
            )
        }>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        page.update(|p| p.scroll_to_top());
                    }
                    class="text-2xl font-black tracking-tighter group"
                >
                    <span class="group-hover:text-lime-500 transition-colors">
                        {PROFILE.short_name}
                    </span>
                    <span class="text-lime-500 group-hover:text-black transition-colors">"."</span>
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {desktop_links}
                    <a
                        href=PROFILE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-2 hover:bg-lime-400 rounded-full transition-colors"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain text-xl" />
                    </a>
                </div>

                <button
                    class="md:hidden relative w-8 h-6"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| page.update(|p| p.toggle_menu())
                >
                    <span class=move || {
                        format!("{BAR_LINE} {}", if menu_open() { "top-3 rotate-45" } else { "top-0" })
                    } />
                    <span class=move || {
                        format!(
                            "{BAR_LINE} top-3 {}",
                            if menu_open() { "opacity-0" } else { "opacity-100" },
                        )
                    } />
                    <span class=move || {
                        format!("{BAR_LINE} {}", if menu_open() { "top-3 -rotate-45" } else { "top-6" })
                    } />
                </button>
            </div>

            <div class=move || {
                format!(
                    "md:hidden bg-white border-t border-gray-100 overflow-hidden transition-all duration-300 {}",
                    if menu_open() { "max-h-64" } else { "max-h-0" },
                )
            }>
                <div class="p-6 flex flex-col gap-4">{mobile_links}</div>
            </div>
        </nav>
    }
}
