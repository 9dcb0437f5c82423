use dioxus::prelude::*;

const CARD_STYLE: &str = "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;";
const BUTTON_STYLE: &str = "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border: none; border-radius: 8px; font-size: 18px; font-weight: 600; cursor: pointer;";

/// (title, blurb, reveal delay in ms)
const FEATURES: &[(&str, &str, u32)] = &[
    ("Lead Capture", "Forms that follow visitors down the page instead of waiting at the bottom.", 0),
    ("Weekly Reports", "A digest of every lead, source, and conversion, in your inbox on Monday.", 150),
    ("Team Routing", "New leads land with the right person the moment they arrive.", 300),
];

#[component]
fn FeatureCard(title: String, blurb: String, delay: u32) -> Element {
    rsx! {
        div {
            style: "{CARD_STYLE}",
            "data-animation": "fade-up",
            "data-animation-delay": "{delay}",
            h3 {
                style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                "{title}"
            }
            p {
                style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                "{blurb}"
            }
        }
    }
}

/// Staggered in groups of three
#[component]
fn StoryCard(index: usize) -> Element {
    let delay = (index % 3) * 100;
    let number = index + 1;
    rsx! {
        div {
            style: "{CARD_STYLE}",
            "data-animation": "fade-up",
            "data-animation-delay": "{delay}",
            "Customer story #{number}"
        }
    }
}

/// Hidden content the modal copies from
#[component]
fn ModalTemplates() -> Element {
    rsx! {
        div {
            id: "modal-pricing",
            style: "display: none;",
            h2 { style: "margin: 0 0 12px 0;", "Pricing" }
            p { "Starter: free for one site. Growth: $29/month for unlimited sites and reports." }
        }
        div {
            id: "modal-demo",
            style: "display: none;",
            h2 { style: "margin: 0 0 12px 0;", "Book a demo" }
            p { "Pick a slot and we'll walk you through the weekly report live." }
            a { href: "#contact", "Or jump to the contact section" }
        }
    }
}

#[component]
pub fn Landing() -> Element {
    let mut extra_cards = use_signal(|| 0usize);

    rsx! {
        a { class: "skip-link", href: "#main-content", "Skip to content" }

        header {
            style: "display: flex; gap: 24px; justify-content: center; padding: 20px;",
            a { href: "#features", style: "color: #9ca3af;", "Features" }
            a { href: "#stories", style: "color: #9ca3af;", "Stories" }
            a { href: "#contact", style: "color: #9ca3af;", "Contact" }
            a { href: "#", style: "color: #4b5563;", "Top" }
        }

        main {
            id: "main-content",
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px 20px;",

            // Hero
            section {
                style: "text-align: center; max-width: 720px; min-height: 80vh;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Every lead, every Monday"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "One report with everything your site brought in last week."
                }
                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    button { style: "{BUTTON_STYLE}", "data-modal": "modal-pricing", "See pricing" }
                    a { href: "#", style: "{BUTTON_STYLE}", "data-modal": "modal-demo", "Book a demo" }
                    button { style: "{BUTTON_STYLE}", "data-modal": "modal-missing", "Broken trigger" }
                }
            }

            // Feature grid
            section {
                id: "features",
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; min-height: 60vh;",
                for (title, blurb, delay) in FEATURES.iter() {
                    FeatureCard { key: "{title}", title: title.to_string(), blurb: blurb.to_string(), delay: *delay }
                }
            }

            // Cards inserted after load are picked up by the mutation observer
            section {
                id: "stories",
                style: "display: flex; flex-direction: column; gap: 16px; max-width: 800px; width: 100%; min-height: 60vh;",
                div {
                    style: "{CARD_STYLE}",
                    "data-animation": "fade-up",
                    "data-animation-repeat": "true",
                    "This card fades out when you scroll away and back in when you return."
                }
                for i in 0..extra_cards() {
                    StoryCard { key: "{i}", index: i }
                }
                button {
                    style: "{BUTTON_STYLE}",
                    onclick: move |_| extra_cards += 3,
                    "Load more stories"
                }
            }

            section {
                id: "contact",
                style: "text-align: center; min-height: 50vh;",
                h2 { "data-animation": "fade-up", "Talk to us" }
                p {
                    "data-animation": "fade-up",
                    "data-animation-delay": "200",
                    style: "color: #9ca3af;",
                    "hello@example.com"
                }
            }
        }

        ModalTemplates {}
    }
}
