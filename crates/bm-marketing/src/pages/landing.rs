//! BrowserMind landing page
//!
//! Hero, the one-click analysis flow, and the results panel. The lifecycle
//! itself lives in [`bm_core::AnalysisFlow`]; this page owns the browser
//! timers that drive it and renders whichever phase is current.

use std::time::Duration;

use bm_core::{AnalysisFlow, EpisodeId, FailureAction, Phase, ResultProvider};
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use tracing::warn;

use crate::components::*;
use crate::provider::MockAnalyze;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="relative min-h-screen overflow-hidden bg-neutral-950 text-white">
            // animated color wash + grain
            <div class="absolute inset-0 animated-gradient opacity-30 blur-3xl"></div>
            <div class="noise"></div>

            // floating magnifiers
            <BgMagnifiers/>

            <div class="relative z-10 flex min-h-screen flex-col items-center justify-center px-6">
                // title with staggered reveal
                <h1 class="text-center font-semibold tracking-tight">
                    <span class="block text-5xl md:text-6xl">
                        <span class="title-instant">"Browser"</span>
                        " "
                        <RevealWord word="Mind"/>
                    </span>
                    <span class="block text-lg md:text-2xl text-white/70 mt-3 subtitle-fade">
                        "Check how unique your browser is — in one click."
                    </span>
                </h1>

                <div class="mt-10 w-full max-w-xl">
                    <AnalysisPanel/>
                </div>
            </div>

            // vignette
            <div class="pointer-events-none absolute inset-0 bg-[radial-gradient(60%_80%_at_50%_100%,rgba(0,0,0,0)_0%,rgba(0,0,0,0.6)_100%)]"></div>

            <style>{KEYFRAMES}</style>
        </div>
    }
}

/// Button -> progress -> result cycle, one phase rendered at a time
#[component]
fn AnalysisPanel() -> impl IntoView {
    let flow = create_rw_signal(AnalysisFlow::default());
    let readout = store_value(None::<IntervalHandle>);

    let start = move |_| {
        // superseding the previous episode also kills its readout timer
        stop_readout(readout);
        if let Some(episode) = flow.try_update(|f| f.trigger()) {
            launch_episode(flow, readout, episode);
        }
    };

    let reset = move |_| flow.update(|f| f.reset());

    on_cleanup(move || stop_readout(readout));

    let phase = create_memo(move |_| flow.with(|f| f.phase()));

    view! {
        {move || match phase.get() {
            Phase::Idle => {
                view! {
                    <div class="flex justify-center">
                        <button
                            on:click=start
                            class="group relative inline-flex items-center gap-3 rounded-2xl bg-white/5 px-8 py-4 text-lg font-medium backdrop-blur-xl ring-1 ring-white/15 hover:ring-white/25 transition"
                        >
                            <span class="h-3 w-3 rounded-full bg-emerald-400 animate-pulse"></span>
                            "Get My Privacy Score"
                        </button>
                    </div>
                }
                    .into_view()
            }
            Phase::Loading => {
                let pct = move || flow.with(|f| f.progress());
                view! {
                    <div class="rounded-2xl bg-white/5 p-6 backdrop-blur-xl ring-1 ring-white/10">
                        <div class="flex items-center justify-between mb-3">
                            <p class="text-white/80">"Analyzing your browser…"</p>
                            <p class="text-white/60 text-sm">{move || format!("{}%", pct())}</p>
                        </div>
                        <div class="relative h-3 overflow-hidden rounded-full bg-white/10">
                            <div
                                class="absolute inset-y-0 left-0 rounded-full bg-gradient-to-r from-fuchsia-400 via-sky-400 to-emerald-400 transition-[width] duration-200 ease-out"
                                style=move || format!("width: {}%", pct())
                            ></div>
                            <div class="absolute inset-y-0 -left-20 w-20 bg-white/30 blur-md shimmer"></div>
                        </div>
                    </div>
                }
                    .into_view()
            }
            Phase::Done => {
                match flow.with_untracked(|f| f.report().cloned()) {
                    Some(report) => {
                        view! {
                            <div class="rounded-2xl bg-white/5 p-6 backdrop-blur-xl ring-1 ring-white/10">
                                <ResultsView report=report/>
                                <div class="mt-6 flex justify-center">
                                    <button
                                        on:click=reset
                                        class="text-sm text-white/70 hover:text-white transition underline underline-offset-4"
                                    >
                                        "Check again"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_view()
                    }
                    None => ().into_view(),
                }
            }
            Phase::Failed => {
                let message = flow.with_untracked(|f| {
                    f.error().unwrap_or("Analysis failed").to_string()
                });
                view! {
                    <div class="rounded-2xl bg-white/5 p-6 backdrop-blur-xl ring-1 ring-rose-400/30 text-center">
                        <p class="text-rose-300 mb-4">{message}</p>
                        <button
                            on:click=start
                            class="text-sm text-white/70 hover:text-white transition underline underline-offset-4"
                        >
                            "Try again"
                        </button>
                    </div>
                }
                    .into_view()
            }
        }}
    }
}

/// Clear the stored readout timer, if one is running.
fn stop_readout(readout: StoredValue<Option<IntervalHandle>>) {
    readout.update_value(|handle| {
        if let Some(handle) = handle.take() {
            handle.clear();
        }
    });
}

/// Start the readout timer and the provider request for `episode`.
///
/// The stored interval handle always belongs to the newest episode: the
/// click handler clears the previous one before a new episode launches,
/// and the callback stops itself as soon as the flow rejects its tick, so
/// a readout never outlives its episode.
fn launch_episode(
    flow: RwSignal<AnalysisFlow>,
    readout: StoredValue<Option<IntervalHandle>>,
    episode: EpisodeId,
) {
    let (tick_ms, settle_ms) = flow.with_untracked(|f| (f.config().tick_ms, f.config().settle_ms));

    let handle = set_interval_with_handle(
        move || {
            let live = flow
                .try_update(|f| f.tick(episode, tick_ms))
                .unwrap_or(false);
            if !live {
                stop_readout(readout);
            }
        },
        Duration::from_millis(tick_ms),
    );
    match handle {
        Ok(handle) => readout.set_value(Some(handle)),
        Err(err) => warn!("Failed to start progress readout: {:?}", err),
    }

    spawn_local(async move {
        match MockAnalyze::new().analyze().await {
            Ok(report) => {
                let accepted = flow
                    .try_update(|f| f.resolve(episode, report))
                    .unwrap_or(false);
                if accepted {
                    stop_readout(readout);
                    set_timeout(
                        move || {
                            let _ = flow.try_update(|f| f.settle(episode));
                        },
                        Duration::from_millis(settle_ms),
                    );
                }
            }
            Err(err) => {
                let action = flow
                    .try_update(|f| f.fail(episode, err))
                    .unwrap_or(FailureAction::Ignored);
                match action {
                    FailureAction::Ignored => {}
                    FailureAction::Retry(next) => {
                        stop_readout(readout);
                        launch_episode(flow, readout, next);
                    }
                    FailureAction::Surfaced | FailureAction::Discarded => {
                        stop_readout(readout)
                    }
                }
            }
        }
    });
}

const KEYFRAMES: &str = r#"
.title-instant {
  opacity: 0; transform: translateY(8px);
  animation: fadeUp 600ms ease forwards;
  animation-delay: .1s;
}
.subtitle-fade {
  opacity: 0; transform: translateY(6px);
  animation: fadeUp 600ms ease forwards;
  animation-delay: 1.4s;
}
.letter-pop {
  display: inline-block;
  opacity: 0; transform: translateY(10px) scale(.98);
  animation: popIn .45s cubic-bezier(.2,.7,.2,1) forwards;
}
@keyframes popIn {
  0% { opacity: 0; transform: translateY(10px) scale(.98); }
  100% { opacity: 1; transform: translateY(0) scale(1); }
}
@keyframes fadeUp {
  0% { opacity: 0; transform: translateY(8px); }
  100% { opacity: 1; transform: translateY(0); }
}
.animated-gradient {
  background: linear-gradient(120deg, rgba(217,70,239,.5), rgba(56,189,248,.5), rgba(52,211,153,.5));
  background-size: 300% 300%;
  animation: wash 18s ease-in-out infinite alternate;
}
@keyframes wash {
  0% { background-position: 0% 50%; }
  100% { background-position: 100% 50%; }
}
.noise {
  position: absolute; inset: 0; opacity: .06;
  background-image: radial-gradient(rgba(255,255,255,.6) 1px, transparent 1px);
  background-size: 3px 3px;
}
.realMag { position: absolute; filter: blur(.5px); }
.magA { top: -8vh; left: -12vw; animation: driftA 32s ease-in-out infinite alternate; }
.magB { bottom: -10vh; right: -16vw; animation: driftB 36s ease-in-out infinite alternate; }
.magC { top: 30vh; right: -20vw; animation: driftA 40s ease-in-out infinite alternate; }
.magWrap { position: relative; }
.scanLight {
  position: absolute; top: 20%; left: 20%; width: 35%; height: 35%;
  border-radius: 9999px; background: rgba(255,255,255,.12); filter: blur(14px);
  animation: sweep 5s ease-in-out infinite alternate;
}
.scanB { animation-duration: 7s; }
.scanC { animation-duration: 9s; }
@keyframes driftA {
  0%   { transform: translate(0,0) rotate(0deg) scale(1); }
  50%  { transform: translate(30vw, 16vh) rotate(8deg) scale(1.05); }
  100% { transform: translate(8vw, 30vh) rotate(14deg) scale(1.08); }
}
@keyframes driftB {
  0%   { transform: translate(0,0) rotate(0deg) scale(1); }
  50%  { transform: translate(-26vw, -10vh) rotate(-6deg) scale(.95); }
  100% { transform: translate(-5vw, -24vh) rotate(-12deg) scale(.9); }
}
.shimmer { animation: shimmer 1.3s linear infinite; }
@keyframes sweep {
  0% { transform: translate(0,0); }
  100% { transform: translate(60%, 40%); }
}
@keyframes shimmer {
  0% { transform: translateX(0%); }
  100% { transform: translateX(120%); }
}
"#;
