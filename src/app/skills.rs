use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;
use crate::shell::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    let section = SectionId::Skills;
    let cards = SKILL_CATEGORIES
        .iter()
        .map(|cat| {
            view! {
                <div class="group p-6 border-2 border-black bg-white hover:bg-lime-400 transition-all duration-300 hover:translate-x-1 hover:-translate-y-1 shadow-[4px_4px_0px_#000] hover:shadow-[6px_6px_0px_#000]">
                    <div class="text-4xl mb-4">{cat.icon}</div>
                    <h3 class="text-xl font-black mb-4">{cat.title}</h3>
                    <div class="flex flex-wrap gap-2">
                        {cat
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-100 group-hover:bg-white text-sm font-bold transition-colors">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=section.anchor() class="py-32 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center gap-4 mb-16">
                    <span class="text-lime-500 font-mono font-bold">{section.heading_label()}</span>
                    <div class="flex-1 h-px bg-gray-200" />
                </div>

                <h2 class="text-4xl md:text-6xl font-black mb-16">
                    "Tech Stack I " <span class="text-lime-500">"use"</span>
                </h2>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
            </div>
        </section>
    }
}
