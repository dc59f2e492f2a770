use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{BRAND_NAME, WELCOME_OVERLAY_MS};

/// Full-screen splash shown while the page settles. The timer is cancelled
/// if the page unmounts first.
#[function_component(WelcomeOverlay)]
pub fn welcome_overlay() -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_timeout(
            move || {
                debug!("welcome overlay dismissed");
                visible.set(false);
            },
            WELCOME_OVERLAY_MS,
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="welcome-overlay">
            <div class="welcome-content">
                <div class="welcome-logo">
                    <div class="welcome-ring ping"></div>
                    <div class="welcome-ring pulse"></div>
                    <div class="welcome-core">{"👑"}</div>
                </div>
                <h1 class="welcome-title">{BRAND_NAME}</h1>
                <p class="welcome-subtitle">{"Professional Makeup Artist"}</p>
                <div class="welcome-progress">
                    <div class="welcome-progress-bar"></div>
                </div>
            </div>
            <style>
                {r#"
                    .welcome-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        text-align: center;
                    }
                    .welcome-logo {
                        position: relative;
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 2rem;
                    }
                    .welcome-ring {
                        position: absolute;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                    }
                    .welcome-ring.ping {
                        inset: 0;
                        animation: welcomePing 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .welcome-ring.pulse {
                        inset: 0.5rem;
                        animation: welcomePulse 2s ease-in-out infinite;
                    }
                    .welcome-core {
                        position: absolute;
                        inset: 1rem;
                        border-radius: 50%;
                        background: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 3rem;
                    }
                    .welcome-title {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 700;
                        background: linear-gradient(90deg, #facc15, #eab308, #ca8a04);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .welcome-subtitle {
                        margin-top: 1rem;
                        font-size: 1.25rem;
                        color: #d1d5db;
                    }
                    .welcome-progress {
                        width: 16rem;
                        height: 0.25rem;
                        margin: 2rem auto 0;
                        border-radius: 9999px;
                        background: #1f2937;
                        overflow: hidden;
                    }
                    .welcome-progress-bar {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                        animation: welcomeLoad 2s ease-out forwards;
                    }
                    @keyframes welcomePing {
                        75%, 100% { transform: scale(1.6); opacity: 0; }
                    }
                    @keyframes welcomePulse {
                        50% { opacity: 0.5; }
                    }
                    @keyframes welcomeLoad {
                        from { width: 0; }
                        to { width: 100%; }
                    }
                "#}
            </style>
        </div>
    }
}
