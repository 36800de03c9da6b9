use leptos::prelude::*;

use crate::content::PROFILE;
use crate::shell::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col justify-center relative px-6 pt-20">
            <div class="max-w-7xl mx-auto w-full">
                <div class="space-y-6">
                    <div class="inline-flex items-center gap-2 bg-lime-400 px-4 py-2 font-mono text-sm font-bold animate-bounce-slow">
                        <span class="w-2 h-2 bg-green-600 rounded-full animate-pulse" />
                        "AVAILABLE FOR WORK"
                    </div>

                    <div class="space-y-2">
                        <h1 class="text-5xl md:text-7xl lg:text-9xl font-black tracking-tighter leading-none">
                            {PROFILE.first_name}
                        </h1>
                        <h1 class="text-5xl md:text-7xl lg:text-9xl font-black tracking-tighter leading-none text-transparent bg-clip-text bg-gradient-to-r from-lime-400 via-green-500 to-emerald-500 animate-gradient">
                            {PROFILE.last_name}
                        </h1>
                    </div>

                    <p class="text-xl md:text-2xl font-medium text-gray-600 max-w-xl">
                        {PROFILE.job_title} " turning "
                        <span class="text-black font-bold">"☕ caffeine"</span> " into "
                        <span class="text-black font-bold">"</> code"</span>
                        {format!(" since {}.", PROFILE.coding_since)}
                    </p>

                    <div class="flex flex-wrap gap-4 pt-6">
                        <a
                            href=format!("#{}", SectionId::Contact.anchor())
                            class="group bg-lime-400 text-black px-8 py-4 font-bold text-lg flex items-center gap-2 border-2 border-black transition-all duration-300 hover:translate-x-1 hover:-translate-y-1 shadow-[4px_4px_0px_#000] hover:shadow-[6px_6px_0px_#000] hover:bg-lime-300"
                        >
                            "Let's Talk"
                            <span class="group-hover:rotate-45 transition-transform">"🚀"</span>
                        </a>
                        <a
                            href=PROFILE.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group border-2 border-black px-8 py-4 font-bold text-lg flex items-center gap-2 hover:bg-gray-100 transition-all duration-300"
                        >
                            <i class="devicon-github-plain" />
                            "GitHub"
                            <span class="opacity-50">"↗"</span>
                        </a>
                    </div>
                </div>

                <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-3xl text-gray-400">
                    "↓"
                </div>
            </div>
        </section>
    }
}
