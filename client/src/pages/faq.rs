//! Static FAQ page rendered from a fixed question list.

use leptos::prelude::*;

const FAQ_ENTRIES: [(&str, &str); 6] = [
    (
        "How long does delivery take?",
        "Orders placed before 2pm ship the same day; most arrive within 2–4 business days.",
    ),
    (
        "Do you ship internationally?",
        "Not yet. We currently deliver to domestic addresses only.",
    ),
    (
        "Can I return an opened ink cartridge?",
        "Unopened consumables can be returned within 30 days. Opened cartridges can only be returned if defective.",
    ),
    (
        "Are your cartridges originals?",
        "Everything listed is original manufacturer stock. We do not sell refills or compatibles.",
    ),
    (
        "How do I track my order?",
        "Use the Orders page — sign in, or look your order up with the email address used at checkout.",
    ),
    (
        "Do you price match?",
        "For identical in-stock items from authorized resellers, yes. Contact us with a link.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <div class="content-page__hero">
                <h1>"Frequently Asked Questions"</h1>
            </div>
            <div class="content-page__body faq-list">
                {FAQ_ENTRIES
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <details class="faq-list__entry">
                                <summary>{*question}</summary>
                                <p>{*answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
