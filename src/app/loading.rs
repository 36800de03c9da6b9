use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::homepage::Page;
use crate::content::PROFILE;

/// Starts the splash timer for `page`.
///
/// The timer is stopped when the owning view is disposed, and a fire against
/// an already disposed page is dropped.
pub fn use_splash_timer(page: Page) {
    let delay = page.with_untracked(|p| p.splash_delay());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            if page.try_update(|p| p.on_clock(delay)).is_some() {
                log::debug!("splash done after {delay:?}");
            }
        },
        delay.as_millis() as f64,
    );
    on_cleanup(stop);
    start(());
}

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black flex items-center justify-center">
            <div class="text-center">
                <div class="text-6xl font-black text-white animate-pulse">
                    {PROFILE.short_name} <span class="text-lime-400">"."</span>
                </div>
                <div class="mt-4 w-48 h-1 bg-gray-800 mx-auto overflow-hidden">
                    <div class="h-full bg-lime-400 animate-loading-bar"></div>
                </div>
            </div>
        </div>
    }
}
