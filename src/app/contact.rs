use leptos::{html, prelude::*};

use crate::{
    contact::{ContactForm, Field, FormState, SimulatedTransport},
    content::{EMAIL, GITHUB_URL, LINKEDIN_URL},
    reveal::SECTION_THRESHOLD,
};

use super::{
    clock,
    hooks::{use_reveal, use_timed},
    reveal_class,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-border bg-background/50 focus:ring-2 focus:ring-primary/30 focus:border-primary outline-none transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, SECTION_THRESHOLD);
    let form = RwSignal::new(ContactForm::<SimulatedTransport>::default());
    use_timed(form);
    on_cleanup(move || {
        form.try_update(|f| f.cancel());
    });

    let state = move || form.with(|f| f.state());
    let value = move |field: Field| move || form.with(|f| f.draft().field(field).to_string());
    let on_input = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let v = event_target_value(&ev);
            form.update(|f| f.set_field(field, v));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Err(e)) = form.try_update(|f| f.submit(clock::now())) {
            log::warn!("contact form not sent: {e}");
        }
    };

    view! {
        <section id="contact" node_ref=section class="py-20 relative overflow-hidden">
            <div class="section-container">
                <h2 class=move || {
                    reveal_class(
                        "section-title transition-all duration-700",
                        visible.get(),
                        "translate-y-10",
                        "translate-y-0",
                    )
                }>"Get In Touch"</h2>
                <div class="max-w-5xl mx-auto">
                    <div class="flex flex-col lg:flex-row gap-12 lg:gap-16">
                        <div class=move || {
                            reveal_class(
                                "lg:w-5/12 transition-all duration-1000",
                                visible.get(),
                                "-translate-x-10",
                                "translate-x-0",
                            )
                        }>
                            <ContactInfo />
                        </div>
                        <div class=move || {
                            reveal_class(
                                "lg:w-7/12 transition-all duration-1000 delay-300",
                                visible.get(),
                                "translate-x-10",
                                "translate-x-0",
                            )
                        }>
                            <div class="glass-card p-6 sm:p-8 rounded-xl border border-border/50">
                                <h3 class="text-xl font-semibold mb-6">"Send a Message"</h3>
                                <form on:submit=on_submit class="space-y-5">
                                    <div>
                                        <label for="name" class="block text-sm font-medium mb-1.5">
                                            "Your Name"
                                        </label>
                                        <input
                                            type="text"
                                            id="name"
                                            name="name"
                                            prop:value=value(Field::Name)
                                            on:input=on_input(Field::Name)
                                            class=INPUT_CLASS
                                            placeholder="John Doe"
                                            required
                                        />
                                    </div>
                                    <div>
                                        <label for="email" class="block text-sm font-medium mb-1.5">
                                            "Your Email"
                                        </label>
                                        <input
                                            type="email"
                                            id="email"
                                            name="email"
                                            prop:value=value(Field::Email)
                                            on:input=on_input(Field::Email)
                                            class=INPUT_CLASS
                                            placeholder="john@example.com"
                                            required
                                        />
                                    </div>
                                    <div>
                                        <label
                                            for="message"
                                            class="block text-sm font-medium mb-1.5"
                                        >
                                            "Your Message"
                                        </label>
                                        <textarea
                                            id="message"
                                            name="message"
                                            rows=5
                                            prop:value=value(Field::Message)
                                            on:input=on_input(Field::Message)
                                            class=INPUT_CLASS
                                            placeholder="I'd like to discuss a project..."
                                            required
                                        />
                                    </div>
                                    <button
                                        type="submit"
                                        disabled=move || !form.with(|f| f.can_submit())
                                        class=move || {
                                            if state() == FormState::Submitting {
                                                "w-full py-3 px-6 rounded-lg font-medium transition-all duration-300 flex justify-center items-center text-primary-foreground bg-primary/80 cursor-wait"
                                            } else {
                                                "w-full py-3 px-6 rounded-lg font-medium transition-all duration-300 flex justify-center items-center text-primary-foreground bg-primary hover:bg-primary/90"
                                            }
                                        }
                                    >
                                        {move || match state() {
                                            FormState::Submitting => "Sending...",
                                            FormState::Success => "Message Sent!",
                                            FormState::Idle | FormState::Error => "Send Message",
                                        }}
                                    </button>
                                    <Show when=move || state() == FormState::Error>
                                        <p class="text-sm text-red-500" role="alert">
                                            "There was an error sending your message. Please try again."
                                        </p>
                                    </Show>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <p class="text-lg text-foreground/80">
                "Let's connect to discuss how we can work together on your next project, whether it's web development, AI automation, or technical collaboration."
            </p>
            <div class="space-y-5">
                <div class="flex items-start gap-4">
                    <div class="p-3 rounded-lg bg-accent text-foreground flex-shrink-0">
                        <i class="extra-email" />
                    </div>
                    <div>
                        <h3 class="font-medium mb-1">"Email"</h3>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="text-muted-foreground hover:text-foreground transition-colors"
                        >
                            {EMAIL}
                        </a>
                    </div>
                </div>
                <div class="flex items-start gap-4">
                    <div class="p-3 rounded-lg bg-accent text-foreground flex-shrink-0">
                        <i class="extra-message" />
                    </div>
                    <div>
                        <h3 class="font-medium mb-1">"Social Media"</h3>
                        <div class="flex gap-4 mt-2">
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 bg-background rounded-full hover:bg-foreground hover:text-background transition-colors"
                                aria-label="GitHub"
                            >
                                <i class="devicon-github-plain" />
                            </a>
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-2 bg-background rounded-full hover:bg-foreground hover:text-background transition-colors"
                                aria-label="LinkedIn"
                            >
                                <i class="devicon-linkedin-plain" />
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <div class="p-6 glass-card rounded-xl border border-border/50">
                <h3 class="font-medium mb-3">"Looking for a speaker?"</h3>
                <p class="text-sm text-muted-foreground mb-4">
                    "I'm available for speaking engagements on topics related to web development, AI automation, and tech education."
                </p>
                <a
                    href=format!("mailto:{EMAIL}")
                    class="inline-flex items-center text-foreground font-medium hover:underline"
                >
                    "Get in touch"
                    <i class="extra-send ml-2" />
                </a>
            </div>
        </div>
    }
}
