use leptos::prelude::*;

use crate::content::Marquee;

#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden -z-10">
            <div class="absolute top-20 left-10 w-20 h-20 bg-lime-400 rounded-full opacity-20 animate-float" />
            <div class="absolute top-40 right-20 w-32 h-32 bg-orange-400 rotate-45 opacity-20 animate-float-delayed" />
            <div class="absolute bottom-40 left-1/4 w-16 h-16 bg-cyan-400 opacity-20 animate-float" />
            <div class="absolute top-1/3 right-1/3 w-24 h-24 border-4 border-lime-400 rounded-full opacity-20 animate-spin-slow" />
            <div class="absolute bottom-20 right-10 w-12 h-12 bg-pink-400 opacity-20 animate-float-delayed" />
        </div>
    }
}

#[component]
pub fn MarqueeBand(marquee: &'static Marquee) -> impl IntoView {
    let run = move || {
        marquee
            .words
            .iter()
            .map(|word| {
                view! {
                    <span>{*word}</span>
                    <span class=marquee.separator_class>{marquee.separator}</span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="overflow-hidden whitespace-nowrap py-4 bg-black text-white border-y-4 border-lime-400">
            <div class=format!("inline-flex gap-8 {}", marquee.animation_class())>
                {(0..Marquee::REPEAT)
                    .map(|_| {
                        view! {
                            <span class="flex items-center gap-8 text-2xl font-black tracking-wider">
                                {run()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
