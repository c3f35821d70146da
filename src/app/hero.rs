use leptos::prelude::*;

use crate::{
    content::{AVATAR_URL, INSTAGRAM_URL, OWNER_NAME, SUMMARY, TAGLINE},
    nav::ScrollTarget,
    section::{ActiveSection, SectionId},
};

use super::{
    scene::HeroCanvas,
    scroll::{scroll_to, section_exists},
    sensor::use_section,
};

#[component]
pub fn Hero() -> impl IntoView {
    let active = expect_context::<ActiveSection>();
    let (node_ref, visible) = use_section(SectionId::Hero);

    let explore = move |_| {
        let next = SectionId::Experience;
        active.set(next);
        scroll_to(ScrollTarget::resolve(next, section_exists(next)));
    };

    let reveal = move || {
        let state = if visible.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!("transition-all duration-700 {state}")
    };

    view! {
        <section
            id=SectionId::Hero.as_str()
            node_ref=node_ref
            class="relative min-h-screen flex items-center justify-center py-20 pt-32 overflow-hidden"
        >
            <div class="absolute inset-0 z-0" aria-hidden="true">
                <HeroCanvas />
            </div>
            <div class="max-w-7xl mx-auto px-4 text-center relative z-10">
                <div class=move || {
                    format!(
                        "max-w-3xl mx-auto backdrop-blur-sm bg-white/30 dark:bg-neutral-900/40 p-8 rounded-2xl {}",
                        reveal(),
                    )
                }>
                    <div class="mb-8 flex justify-center">
                        <div class="relative w-48 h-48 rounded-full overflow-hidden shadow-xl">
                            <img src=AVATAR_URL alt=OWNER_NAME class="w-full h-full object-cover" />
                        </div>
                    </div>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6 leading-tight">
                        {OWNER_NAME}
                    </h1>
                    <div class=reveal style="transition-delay: 400ms">
                        <h2 class="text-xl md:text-2xl text-neutral-700 dark:text-neutral-300 mb-8">
                            {TAGLINE}
                        </h2>
                        <p class="text-lg text-neutral-600 dark:text-neutral-400 mb-10 max-w-2xl mx-auto">
                            {SUMMARY}
                        </p>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-8">
                            <button
                                on:click=explore
                                class="px-8 py-3 rounded-lg font-medium text-white bg-sky-600/90 hover:bg-sky-600 backdrop-blur-md"
                            >
                                "Explore Portfolio"
                            </button>
                            <a
                                href="#contact"
                                class="px-8 py-3 rounded-lg font-medium border border-sky-600 bg-white/50 hover:bg-white/70 dark:bg-neutral-900/50 backdrop-blur-md"
                            >
                                "Get in Touch"
                            </a>
                        </div>
                        <a
                            href=INSTAGRAM_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center text-neutral-600 dark:text-neutral-400 hover:text-sky-600 transition-colors"
                        >
                            "Follow me on Instagram"
                        </a>
                    </div>
                </div>
                <div class="absolute bottom-10 left-1/2 -translate-x-1/2">
                    <button
                        on:click=explore
                        class="flex flex-col items-center text-neutral-600 dark:text-neutral-400 hover:text-sky-600 transition-colors"
                        aria-label="Scroll down"
                    >
                        <span class="text-sm mb-2">"Scroll Down"</span>
                        <span class="animate-bounce">"⌄"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}
