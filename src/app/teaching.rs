use leptos::{html, prelude::*};

use crate::{
    content::{TEACHING_FEATURES, TESTIMONIALS},
    reveal::SECTION_THRESHOLD,
    rotator::Rotator,
    timing::ROTATION_PERIOD,
};

use super::{
    clock,
    hooks::{use_reveal, use_timed},
    reveal_class,
};

#[component]
pub fn Teaching() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, SECTION_THRESHOLD);
    let rotator = RwSignal::new(Rotator::new(
        TESTIMONIALS.len(),
        ROTATION_PERIOD,
        clock::now(),
    ));
    use_timed(rotator);
    on_cleanup(move || {
        rotator.try_update(|r| r.cancel());
    });

    view! {
        <section
            id="teaching"
            node_ref=section
            class="py-20 bg-accent/30 dark:bg-accent/10 relative overflow-hidden"
        >
            <div class="section-container">
                <div class="flex flex-col lg:flex-row gap-12 lg:gap-16 items-center">
                    <div class=move || {
                        reveal_class(
                            "lg:w-1/2 transition-all duration-1000",
                            visible.get(),
                            "-translate-x-10",
                            "translate-x-0",
                        )
                    }>
                        <div class="space-y-8">
                            <h2 class="text-3xl sm:text-4xl font-bold">
                                "CodeZen: Learning Through Practice"
                            </h2>
                            <p class="text-lg text-foreground/80 leading-relaxed">
                                "CodeZen is a hands-on learning platform I've developed to help aspiring developers gain practical skills through real-world projects, personalized mentorship, and a supportive community."
                            </p>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5 pt-2">
                                {TEACHING_FEATURES
                                    .iter()
                                    .map(|feature| {
                                        view! {
                                            <div class="glass-card p-5 rounded-xl flex flex-col gap-3 transition-all duration-300 hover:shadow-md hover:-translate-y-1">
                                                <div class="p-2 rounded-lg bg-accent text-foreground inline-flex">
                                                    <i class=feature.icon />
                                                </div>
                                                <h3 class="font-medium">{feature.title}</h3>
                                                <p class="text-sm text-muted-foreground">{feature.desc}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <a
                                href="#contact"
                                class="inline-flex items-center text-foreground font-medium hover:underline group mt-4"
                            >
                                "Interested in learning with CodeZen?"
                                <i class="extra-arrow-right ml-2 transition-transform group-hover:translate-x-1" />
                            </a>
                        </div>
                    </div>
                    <div class=move || {
                        reveal_class(
                            "lg:w-1/2 transition-all duration-1000 delay-300",
                            visible.get(),
                            "translate-x-10",
                            "translate-x-0",
                        )
                    }>
                        <div class="relative bg-accent/20 dark:bg-accent/5 rounded-2xl p-6 sm:p-8 overflow-hidden">
                            <h3 class="text-2xl font-semibold mb-8 relative z-10">
                                "Student Success Stories"
                            </h3>
                            <div class="relative">
                                {TESTIMONIALS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, testimonial)| {
                                        view! {
                                            <div class=move || {
                                                if rotator.with(|r| r.is_active(index)) {
                                                    "transition-all duration-700 ease-out inset-0 opacity-100 translate-x-0 relative"
                                                } else {
                                                    "transition-all duration-700 ease-out absolute inset-0 opacity-0 translate-x-20 pointer-events-none"
                                                }
                                            }>
                                                <div class="mb-6 text-lg sm:text-xl leading-relaxed text-foreground/90">
                                                    "\u{201C}" {testimonial.content} "\u{201D}"
                                                </div>
                                                <div class="flex items-center gap-4">
                                                    <img
                                                        src=testimonial.avatar
                                                        alt=testimonial.name
                                                        class="w-12 h-12 rounded-full object-cover border-2 border-background"
                                                    />
                                                    <div>
                                                        <h4 class="font-medium">{testimonial.name}</h4>
                                                        <p class="text-sm text-muted-foreground">
                                                            {testimonial.role}
                                                        </p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex justify-center gap-2 mt-8">
                                {(0..TESTIMONIALS.len())
                                    .map(|index| {
                                        view! {
                                            <button
                                                on:click=move |_| {
                                                    rotator.update(|r| {
                                                        r.select(index);
                                                    });
                                                }
                                                class=move || {
                                                    if rotator.with(|r| r.is_active(index)) {
                                                        "h-2.5 rounded-full transition-all duration-300 bg-foreground w-8"
                                                    } else {
                                                        "h-2.5 rounded-full transition-all duration-300 bg-foreground/30 w-2.5"
                                                    }
                                                }
                                                aria-label=format!("View testimonial {}", index + 1)
                                                aria-current=move || rotator.with(|r| r.is_active(index)).then_some("true")
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
