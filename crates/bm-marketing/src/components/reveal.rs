//! Staggered text reveal

use leptos::*;

/// Letter-by-letter pop-in, one animation per character
#[component]
pub fn RevealWord(word: &'static str, #[prop(default = 0.6)] delay: f64) -> impl IntoView {
    view! {
        <span class="inline-flex">
            {word
                .chars()
                .enumerate()
                .map(|(i, ch)| {
                    view! {
                        <span
                            class="letter-pop"
                            style=format!("animation-delay: {:.2}s", delay + i as f64 * 0.12)
                        >
                            {ch.to_string()}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
