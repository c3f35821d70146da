use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::{
    config::SiteConfig,
    content::OWNER_NAME,
    nav::{is_scrolled, NavState},
    section::{ActiveSection, SectionId},
    theme::Theme,
};

use super::scroll::{scroll_to, section_exists};

#[component]
pub fn Navbar() -> impl IntoView {
    let active = expect_context::<ActiveSection>();
    let offset = expect_context::<SiteConfig>().scrolled_offset;
    let theme = expect_context::<RwSignal<Theme>>();
    let nav = NavState::new(active);

    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || is_scrolled(scroll_y.get(), offset);

    let go = move |id: SectionId| {
        let target = nav.navigate(id, section_exists(id));
        scroll_to(target);
    };

    let links = move |mobile: bool| {
        nav.controls()
            .into_iter()
            .map(|(id, lit)| {
                let size = if mobile { "text-base" } else { "text-sm" };
                let color = if lit {
                    "text-sky-600 dark:text-sky-400"
                } else {
                    "text-neutral-700 dark:text-neutral-300"
                };
                view! {
                    <li>
                        <button
                            on:click=move |_| go(id)
                            aria-current=if lit { Some("true") } else { None }
                            class=format!(
                                "{size} {color} font-medium transition-colors hover:text-sky-600",
                            )
                        >
                            {id.label()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 {}",
                if scrolled() {
                    "bg-white/80 dark:bg-neutral-900/80 backdrop-blur-md shadow-sm"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
                <button
                    class="text-xl font-semibold"
                    on:click=move |_| go(SectionId::Hero)
                >
                    {OWNER_NAME}
                </button>
                <nav class="hidden md:block">
                    <ul class="flex space-x-6">{move || links(false)}</ul>
                </nav>
                <div class="flex items-center gap-4">
                    <button
                        class="text-neutral-700 dark:text-neutral-300 hover:text-sky-600"
                        aria-label="Toggle dark mode"
                        on:click=move |_| theme.update(|t| *t = t.toggled())
                    >
                        {move || match theme.get() {
                            Theme::Light => "☾",
                            Theme::Dark => "☀",
                        }}
                    </button>
                    <button
                        class="md:hidden text-neutral-700 dark:text-neutral-300"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.toggle_menu()
                    >
                        {move || if nav.is_menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                if nav.is_menu_open() {
                    Either::Left(
                        view! {
                            <div class="md:hidden bg-white dark:bg-neutral-900">
                                <nav class="max-w-7xl mx-auto px-4 py-4">
                                    <ul class="space-y-4">{links(true)}</ul>
                                </nav>
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </header>
    }
}
