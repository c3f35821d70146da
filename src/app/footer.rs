use leptos::prelude::*;

use crate::{
    content::{phone_href, EMAIL, GITHUB_URL, LINKEDIN_URL, OWNER_NAME, PHONE, TAGLINE},
    section::SectionId,
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white/80 dark:bg-neutral-900/80 border-t border-neutral-200 dark:border-neutral-800">
            <div class="max-w-7xl mx-auto px-4 py-8 md:py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-lg font-semibold mb-4">{OWNER_NAME}</h3>
                        <p class="text-neutral-600 dark:text-neutral-400 mb-4">{TAGLINE}</p>
                        <div class="flex space-x-4">
                            <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-sky-600">
                                "GitHub"
                            </a>
                            <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-sky-600">
                                "LinkedIn"
                            </a>
                            <a href=format!("mailto:{EMAIL}") class="hover:text-sky-600">
                                "Email"
                            </a>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"Navigation"</h3>
                        <ul class="space-y-2">
                            // plain anchors; the section sensors pick up the scroll
                            {SectionId::ALL
                                .iter()
                                .take(5)
                                .map(|id| {
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{id}")
                                                class="text-neutral-600 dark:text-neutral-400 hover:text-sky-600 transition-colors"
                                            >
                                                {id.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"Contact"</h3>
                        <p class="text-neutral-600 dark:text-neutral-400 mb-2">
                            "Feel free to get in touch for opportunities or collaboration."
                        </p>
                        <a href=format!("mailto:{EMAIL}") class="text-sky-600 block mb-2">
                            {EMAIL}
                        </a>
                        <a href=phone_href() class="text-sky-600 block">
                            {PHONE}
                        </a>
                    </div>
                </div>
                <div class="border-t border-neutral-200 dark:border-neutral-800 mt-8 pt-8 text-center text-neutral-600 dark:text-neutral-400">
                    <p>{format!("© {} {OWNER_NAME}. All rights reserved.", env!("BUILD_YEAR"))}</p>
                </div>
            </div>
        </footer>
    }
}
