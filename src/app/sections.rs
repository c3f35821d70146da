use leptos::prelude::*;

use crate::{
    content::{
        phone_href, stagger_ms, CERTIFICATIONS, EDUCATION, EMAIL, EXPERIENCES, GITHUB_URL,
        LINKEDIN_URL, PHONE, PROJECTS, RESUME_URL, SKILL_CATEGORIES,
    },
    section::SectionId,
};

use super::sensor::use_section;

/// Fade/slide state classes for content that enters with its section.
fn reveal(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-8"
    }
}

#[component]
fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || {
            format!("text-center mb-16 transition-all duration-700 {}", reveal(visible.get()))
        }>
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            <p class="text-lg text-neutral-600 dark:text-neutral-300 max-w-3xl mx-auto leading-relaxed">
                {subtitle}
            </p>
        </div>
    }
}

/// Card wrapper class; cards reveal together with their section.
fn card_class(visible: Signal<bool>) -> impl Fn() -> String + Copy {
    move || {
        format!(
            "rounded-2xl overflow-hidden bg-white/70 dark:bg-neutral-900/70 backdrop-blur-md shadow-lg transition-all duration-700 {}",
            reveal(visible.get()),
        )
    }
}

fn delay_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_ms(index, step_ms))
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let id = SectionId::Experience;
    let (node_ref, visible) = use_section(id);
    let card = card_class(visible);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20 min-h-screen">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    title="Experience Atrium"
                    subtitle="Professional experiences that have shaped my expertise in data science and business analytics."
                    visible=visible
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            view! {
                                <article class=card style=delay_style(i, 200)>
                                    <div class="h-48 relative overflow-hidden">
                                        <img
                                            src=exp.image
                                            alt=format!("{} visualization", exp.company)
                                            class="w-full h-full object-cover"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-black/20 to-transparent" />
                                        <div class="absolute bottom-0 left-0 p-6 text-white">
                                            <h3 class="text-2xl font-bold mb-1">{exp.company}</h3>
                                            <p class="text-white/90 text-lg">{exp.role}</p>
                                        </div>
                                    </div>
                                    <div class="p-8">
                                        <p class="text-neutral-500 mb-4 font-medium">{exp.period}</p>
                                        <p class="mb-8 leading-relaxed text-lg">{exp.description}</p>
                                        <ul class="space-y-4">
                                            {exp
                                                .metrics
                                                .iter()
                                                .map(|m| {
                                                    view! {
                                                        <li class="p-4 rounded-lg bg-sky-50 dark:bg-sky-950/40 font-medium">
                                                            {*m}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let id = SectionId::Projects;
    let (node_ref, visible) = use_section(id);
    let card = card_class(visible);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20 min-h-screen">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    title="Data Analysis Portfolio"
                    subtitle="A collection of data analysis projects showcasing machine learning, visualization, and business intelligence."
                    visible=visible
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <article class=card style=delay_style(i, 200)>
                                    <div class="relative h-64 overflow-hidden group">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-black/20 to-transparent" />
                                    </div>
                                    <div class="p-8">
                                        <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                                        <p class="mb-6 leading-relaxed">{project.description}</p>
                                        <div class="flex flex-wrap gap-3 mb-6">
                                            {project
                                                .tools
                                                .iter()
                                                .map(|tool| {
                                                    view! {
                                                        <span class="px-4 py-2 rounded-full text-sm font-medium bg-sky-100 dark:bg-sky-900/50">
                                                            {*tool}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <a
                                            href=project.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="inline-flex items-center font-semibold text-lg hover:text-sky-600 transition-colors"
                                        >
                                            "View Project ↗"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let id = SectionId::Skills;
    let (node_ref, visible) = use_section(id);
    let card = card_class(visible);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    title="Skills Pavilion"
                    subtitle="An overview of my technical and analytical capabilities in data science and business analytics."
                    visible=visible
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div class=card style=delay_style(i, 100)>
                                    <div class="p-6">
                                        <h3 class="text-xl font-medium mb-6">{category.name}</h3>
                                        <div class="space-y-4">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(j, skill)| {
                                                    let level = skill.level;
                                                    let delay = 300 + stagger_ms(j, 100);
                                                    view! {
                                                        <div>
                                                            <div class="flex justify-between items-center mb-1">
                                                                <span>{skill.name}</span>
                                                                <span class="text-xs text-neutral-500">
                                                                    {format!("{level}%")}
                                                                </span>
                                                            </div>
                                                            <div class="w-full bg-neutral-200 dark:bg-neutral-700 rounded-full h-2">
                                                                <div
                                                                    class="h-2 rounded-full bg-sky-600 transition-[width] duration-1000"
                                                                    style=move || {
                                                                        let width = if visible.get() { level } else { 0 };
                                                                        format!("width: {width}%; transition-delay: {delay}ms")
                                                                    }
                                                                />
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let id = SectionId::Certifications;
    let (node_ref, visible) = use_section(id);
    let card = card_class(visible);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeading
                    title="Certifications Wall"
                    subtitle="Professional certifications and credentials that validate my expertise and continuous learning."
                    visible=visible
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <div class=card style=delay_style(i, 150)>
                                    <div class="p-6">
                                        <h3 class="text-xl font-medium mb-1">{cert.name}</h3>
                                        <p class="text-sky-600 mb-2">{cert.issuer}</p>
                                        <p class="text-neutral-500 text-sm">
                                            {format!("Issued: {}", cert.date)}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    let id = SectionId::Education;
    let (node_ref, visible) = use_section(id);
    let card = card_class(visible);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20">
            <div class="max-w-4xl mx-auto px-4">
                <SectionHeading
                    title="Education Tower"
                    subtitle="The academic foundation behind my work in data science and engineering."
                    visible=visible
                />
                <ol class="space-y-8 border-l-2 border-sky-600/40 pl-8">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, edu)| {
                            view! {
                                <li class=card style=delay_style(i, 200)>
                                    <div class="p-6">
                                        <h3 class="text-xl font-medium mb-1">{edu.degree}</h3>
                                        <p class="text-sky-600 mb-1">{edu.institution}</p>
                                        <p class="text-neutral-500 text-sm">{edu.period}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
pub fn ResumeSection() -> impl IntoView {
    let id = SectionId::Resume;
    let (node_ref, visible) = use_section(id);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20">
            <div class="max-w-3xl mx-auto px-4 text-center">
                <SectionHeading
                    title="Resume"
                    subtitle="A single-page summary of my experience, projects and skills."
                    visible=visible
                />
                <a
                    href=RESUME_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block px-8 py-3 rounded-lg font-medium text-white bg-sky-600 hover:bg-sky-700 transition-colors"
                >
                    "View Resume"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let id = SectionId::Contact;
    let (node_ref, visible) = use_section(id);
    let card = card_class(visible);

    view! {
        <section id=id.as_str() node_ref=node_ref class="py-20">
            <div class="max-w-3xl mx-auto px-4">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Feel free to reach out for opportunities or collaboration."
                    visible=visible
                />
                <div class=card>
                    <dl class="p-8 grid grid-cols-1 sm:grid-cols-2 gap-6">
                        <div>
                            <dt class="text-sm text-neutral-500">"Email"</dt>
                            <dd>
                                <a href=format!("mailto:{EMAIL}") class="hover:text-sky-600">
                                    {EMAIL}
                                </a>
                            </dd>
                        </div>
                        <div>
                            <dt class="text-sm text-neutral-500">"Phone"</dt>
                            <dd>
                                <a href=phone_href() class="hover:text-sky-600">
                                    {PHONE}
                                </a>
                            </dd>
                        </div>
                        <div>
                            <dt class="text-sm text-neutral-500">"GitHub"</dt>
                            <dd>
                                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-sky-600">
                                    "shashikathi"
                                </a>
                            </dd>
                        </div>
                        <div>
                            <dt class="text-sm text-neutral-500">"LinkedIn"</dt>
                            <dd>
                                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-sky-600">
                                    "in/shashikathi"
                                </a>
                            </dd>
                        </div>
                    </dl>
                </div>
            </div>
        </section>
    }
}
