//! Results panel

use bm_core::Report;
use leptos::*;

use super::ScoreCard;

/// Score cards, top reasons, and improvement tips for one report
#[component]
pub fn ResultsView(report: Report) -> impl IntoView {
    let Report {
        global_score,
        local_score,
        final_score,
        top_reasons,
        tips,
    } = report;

    view! {
        <div>
            <div class="grid md:grid-cols-3 gap-4">
                <ScoreCard label="Global" value=global_score/>
                <ScoreCard label="Local" value=local_score/>
                <ScoreCard label="Overall" value=final_score/>
            </div>

            <div class="mt-6 grid md:grid-cols-2 gap-6">
                <div>
                    <h3 class="text-white/90 font-medium mb-2">"Top Reasons"</h3>
                    <ul class="space-y-2">
                        {top_reasons
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <li class="text-white/70">
                                        "• " <b class="text-white/90">{r.feature}</b> " — " {r.reason}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="text-white/90 font-medium mb-2">"Tips to Improve"</h3>
                    <ul class="space-y-2">
                        {tips
                            .into_iter()
                            .map(|t| view! { <li class="text-white/80">"• " {t}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
