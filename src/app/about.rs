use leptos::prelude::*;

use crate::content::{FUN_FACTS, PROFILE, STATS};
use crate::shell::SectionId;

#[component]
pub fn About() -> impl IntoView {
    let section = SectionId::About;
    view! {
        <section id=section.anchor() class="py-32 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <span class="text-lime-500 font-mono font-bold">{section.heading_label()}</span>
                        <h2 class="text-4xl md:text-5xl font-black tracking-tight">
                            "A boy who loves to play around with "
                            <span class="text-lime-500">"code"</span> "."
                        </h2>
                        <div class="space-y-4 text-lg text-gray-600 leading-relaxed">
                            <p>
                                "Hello! I'm " {PROFILE.nickname} ", a "
                                {PROFILE.job_title} " based in "
                                <span class="font-bold text-black">{PROFILE.location}</span>
                                {format!(
                                    ". I graduated from {} with a {}.",
                                    PROFILE.university,
                                    PROFILE.degree,
                                )}
                            </p>
                            <p>
                                "I specialize in diving deep into complex problems and emerging with solutions that actually work. Currently building cool stuff at "
                                <span class="font-bold text-black">{PROFILE.employer}</span> "."
                            </p>
                        </div>

                        <div class="grid grid-cols-3 gap-4 pt-6">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-4 border-2 border-black bg-white shadow-[4px_4px_0px_#a3e635]">
                                            <div class="text-3xl font-black">{stat.value}</div>
                                            <div class="text-sm font-bold text-gray-500">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative">
                        <div class="bg-gradient-to-br from-lime-400 to-green-500 p-8 shadow-[12px_12px_0px_#000] transform rotate-2 hover:rotate-0 transition-transform duration-300">
                            <div class="bg-white p-6 -rotate-1">
                                <h3 class="font-black text-2xl mb-4 flex items-center gap-2">
                                    <span class="text-yellow-500">"✨"</span>
                                    "Fun Facts"
                                </h3>
                                <ul class="space-y-3">
                                    {FUN_FACTS
                                        .iter()
                                        .map(|fact| {
                                            view! {
                                                <li class="flex items-start gap-2 font-medium">
                                                    <span class="text-lime-500 flex-shrink-0">"›"</span>
                                                    {*fact}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
