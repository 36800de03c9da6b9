use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};

use super::homepage::Page;
use crate::shell::CursorPosition;

/// Feeds window `mousemove` into the page. Moves only count while some input is a fine pointer.
pub fn use_cursor_position() -> Memo<CursorPosition> {
    let page = expect_context::<Page>();
    let fine_pointer = use_media_query("(any-pointer: fine)");

    Effect::new(move |_| {
        let fine = fine_pointer.get();
        page.update(|p| p.set_fine_pointer(fine));
    });

    // listener is removed when the owner is disposed
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        page.update(|p| p.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64));
    });

    Memo::new(move |_| page.with(|p| p.cursor()))
}

#[component]
pub fn CursorGlow() -> impl IntoView {
    let position = use_cursor_position();
    let style = move || {
        let (left, top) = position.get().glow_origin();
        format!(
            "left: {left}px; top: {top}px; background: radial-gradient(circle, rgba(163,230,53,0.15) 0%, transparent 70%);"
        )
    };

    view! {
        <div
            class="fixed w-64 h-64 rounded-full pointer-events-none -z-5 transition-all duration-300 ease-out hidden md:block"
            style=style
        />
    }
}
