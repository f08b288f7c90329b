use leptos::{html, prelude::*};

use crate::{
    content::{category_icon, Project, PROJECTS},
    filter::{categories, CategoryFilter},
    reveal::SECTION_THRESHOLD,
    timing::card_delay,
};

use super::{hooks::use_reveal, reveal_class};

#[component]
pub fn Projects() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, SECTION_THRESHOLD);
    let (filter, set_filter) = signal(CategoryFilter::All);

    let buttons = categories(PROJECTS)
        .into_iter()
        .map(|category| {
            let label = category.to_string();
            let selected = category.clone();
            view! {
                <button
                    on:click=move |_| set_filter.set(selected.clone())
                    class=move || {
                        if filter.get() == category {
                            "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-foreground text-background font-medium"
                        } else {
                            "px-4 py-2 rounded-full text-sm transition-all duration-300 bg-background hover:bg-background/80"
                        }
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="projects" node_ref=section class="py-20">
            <div class="section-container">
                <h2 class=move || {
                    reveal_class(
                        "section-title transition-all duration-700",
                        visible.get(),
                        "translate-y-10",
                        "translate-y-0",
                    )
                }>"Featured Projects"</h2>
                <div class=move || {
                    reveal_class(
                        "flex flex-wrap justify-center gap-2 mb-12 transition-all duration-700 delay-200",
                        visible.get(),
                        "translate-y-10",
                        "translate-y-0",
                    )
                }>{buttons}</div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                    {move || {
                        filter
                            .get()
                            .apply(PROJECTS)
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| view! { <ProjectCard project index visible /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    visible: ReadSignal<bool>,
) -> impl IntoView {
    let delay = format!("transition-delay: {}ms", card_delay(index).as_millis());
    view! {
        <div
            class=move || {
                reveal_class(
                    "group glass-card rounded-xl overflow-hidden transition-all duration-700 hover:shadow-lg",
                    visible.get(),
                    "translate-y-10",
                    "translate-y-0",
                )
            }
            style=delay
        >
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                <div class="absolute bottom-0 left-0 right-0 p-4 flex items-center gap-2 text-sm">
                    <i class=category_icon(project.category) />
                    <span>{project.category}</span>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-muted-foreground mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded-full bg-accent">{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {project
                        .github_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-1 text-sm hover:underline"
                                >
                                    <i class="devicon-github-plain" />
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .demo_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-1 text-sm hover:underline"
                                >
                                    <i class="extra-link" />
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
