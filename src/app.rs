mod footer;
mod hero;
mod navbar;
mod scene;
mod scroll;
mod sections;
mod sensor;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{config::SiteConfig, content::OWNER_NAME, section::ActiveSection, theme::Theme};

use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use scene::BackdropCanvas;
use sections::{
    CertificationsSection, ContactSection, EducationSection, ExperienceSection,
    ProjectsSection, ResumeSection, SkillsSection,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // page-lifetime state shared by the navbar, the sections and the scene
    provide_context(ActiveSection::new());
    provide_context(SiteConfig::default());
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored_theme.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| set_stored_theme.set(*t),
            false,
        );
    }

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <div class=move || {
                format!(
                    "{} relative min-h-screen bg-neutral-50 text-neutral-900 dark:bg-neutral-950 dark:text-neutral-100",
                    theme.get().root_class(),
                )
            }>
                <div class="fixed inset-0 pointer-events-none" aria-hidden="true">
                    <BackdropCanvas />
                </div>
                <div class="relative z-10">
                    <Navbar />
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                    <Footer />
                </div>
            </div>
        </Router>
    }
}

/// Every section of the portfolio, in page order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main>
            <Hero />
            <ExperienceSection />
            <ProjectsSection />
            <SkillsSection />
            <CertificationsSection />
            <EducationSection />
            <ResumeSection />
            <ContactSection />
        </main>
    }
}
