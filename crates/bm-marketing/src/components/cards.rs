//! Card components for the landing page

use bm_core::ScoreBand;
use leptos::*;

/// One score with a band-colored gradient readout
#[component]
pub fn ScoreCard(label: &'static str, value: u32) -> impl IntoView {
    let gradient = match ScoreBand::from_score(value) {
        ScoreBand::Strong => "from-emerald-400 to-teal-300",
        ScoreBand::Moderate => "from-amber-400 to-yellow-300",
        ScoreBand::Weak => "from-rose-500 to-pink-400",
    };

    view! {
        <div class="rounded-xl bg-white/5 p-4 ring-1 ring-white/10">
            <p class="text-white/70 text-sm mb-2">{label} " score"</p>
            <div class="flex items-center gap-4">
                <div class=format!(
                    "text-3xl font-semibold bg-clip-text text-transparent bg-gradient-to-r {}",
                    gradient,
                )>{value}</div>
                <div class="h-2 flex-1 rounded-full bg-white/10 overflow-hidden">
                    <div
                        class=format!("h-2 rounded-full bg-gradient-to-r {}", gradient)
                        style=format!("width: {}%", value.min(100))
                    ></div>
                </div>
            </div>
        </div>
    }
}
