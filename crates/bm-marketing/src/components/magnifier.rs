//! Decorative magnifier artwork

use leptos::*;

/// Magnifier SVG: lens, metallic rim, and handle
#[component]
pub fn MagnifierSvg(#[prop(default = 340)] size: u32) -> impl IntoView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 200 200"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <defs>
                <radialGradient id="glass" cx="50%" cy="50%" r="50%">
                    <stop offset="0%" stop-color="rgba(255,255,255,0.28)"/>
                    <stop offset="70%" stop-color="rgba(255,255,255,0.08)"/>
                    <stop offset="100%" stop-color="rgba(255,255,255,0)"/>
                </radialGradient>
                <linearGradient id="rim" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#bcbcbc"/>
                    <stop offset="100%" stop-color="#6b6b6b"/>
                </linearGradient>
            </defs>

            // rim
            <circle cx="90" cy="90" r="60" stroke="url(#rim)" stroke-width="6" fill="none"/>
            // glass
            <circle cx="90" cy="90" r="55" fill="url(#glass)"/>
            // glare highlight
            <ellipse cx="72" cy="68" rx="18" ry="8" fill="white" opacity="0.18"/>

            // handle
            <g transform="rotate(38 90 90)">
                <rect x="130" y="86" width="70" height="12" rx="6" fill="url(#rim)"/>
                <rect x="198" y="86" width="14" height="12" rx="6" fill="#555"/>
            </g>
        </svg>
    }
}

/// Floating background magnifiers with scan-light sweeps
#[component]
pub fn BgMagnifiers() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden">
            <div class="realMag magA">
                <div class="magWrap">
                    <MagnifierSvg size=380/>
                    <div class="scanLight scanA"></div>
                </div>
            </div>
            <div class="realMag magB">
                <div class="magWrap">
                    <MagnifierSvg size=300/>
                    <div class="scanLight scanB"></div>
                </div>
            </div>
            <div class="realMag magC">
                <div class="magWrap">
                    <MagnifierSvg size=440/>
                    <div class="scanLight scanC"></div>
                </div>
            </div>
        </div>
    }
}
