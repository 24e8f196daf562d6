use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::HERO_IMAGE;

#[function_component(Hero)]
pub fn hero() -> Html {
    let loaded = use_state(|| false);

    // Flip on first paint so the portrait and wordmark fade in
    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                loaded.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class={classes!("hero-portrait", (*loaded).then(|| "loaded"))}>
                <img src={HERO_IMAGE} alt="Model Portrait" />
                <div class="hero-portrait-fade"></div>
            </div>

            <div class="container hero-grid">
                <div class={classes!("hero-copy", (*loaded).then(|| "loaded"))}>
                    <h1 class="hero-wordmark">
                        <span class="hero-wordmark-line">
                            <span class="hero-wordmark-mark">{"U"}</span>
                            <span class="hero-wordmark-rest">{"SHOPAL"}</span>
                        </span>
                    </h1>
                    <FadeIn delay={200}>
                        <h2 class="hero-tagline">
                            {"Luxe Beauty Brand"}<br/>{"Equity Partner"}
                        </h2>
                    </FadeIn>
                    <FadeIn delay={400}>
                        <p class="hero-lede">
                            {"The Fastest Growing Brand Platform"}<br/>
                            {"Building and Investing in the Iconic Brands of the Future"}
                        </p>
                    </FadeIn>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-label">{"Scroll"}</div>
                <div class="scroll-indicator-line"></div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                        overflow: hidden;
                        background: var(--lush-cream);
                    }
                    .hero-portrait {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 0;
                        opacity: 0;
                        transition: opacity 1s ease-out;
                    }
                    .hero-portrait.loaded {
                        opacity: 1;
                    }
                    .hero-portrait img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: top;
                        opacity: 0.9;
                        filter: grayscale(20%);
                        transition: transform 20s;
                    }
                    .hero-portrait img:hover {
                        transform: scale(1.05);
                    }
                    .hero-portrait-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, var(--lush-cream), rgba(244, 239, 232, 0.6), transparent);
                    }
                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        pointer-events: none;
                    }
                    .hero-copy {
                        max-width: 42rem;
                        margin-top: 5rem;
                        pointer-events: auto;
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 1s ease-out;
                    }
                    .hero-copy.loaded {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .hero-wordmark {
                        font-size: 12vw;
                        line-height: 0.85;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        margin: 0 0 2rem;
                    }
                    .hero-wordmark-line {
                        display: block;
                        position: relative;
                    }
                    .hero-wordmark-mark {
                        position: absolute;
                        left: -0.25rem;
                        top: 0;
                        color: var(--lush-accent);
                        font-family: var(--font-serif);
                        font-style: italic;
                    }
                    .hero-wordmark-rest {
                        padding-left: 8vw;
                    }
                    .hero-tagline {
                        font-size: 1.875rem;
                        font-weight: 500;
                        font-family: var(--font-serif);
                        text-transform: uppercase;
                        letter-spacing: -0.025em;
                        color: rgba(40, 30, 21, 0.9);
                        margin: 0 0 2.5rem;
                    }
                    .hero-lede {
                        font-size: 1.125rem;
                        font-weight: 300;
                        line-height: 1.625;
                        max-width: 28rem;
                        color: rgba(40, 30, 21, 0.7);
                        border-left: 2px solid var(--lush-accent);
                        padding-left: 1.5rem;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 3rem;
                        right: 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        opacity: 0.5;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    .scroll-indicator-label {
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        writing-mode: vertical-rl;
                    }
                    .scroll-indicator-line {
                        width: 1px;
                        height: 3rem;
                        background: var(--lush-dark);
                    }
                    @keyframes pulse {
                        50% { opacity: 0.2; }
                    }
                    @media (min-width: 768px) {
                        .hero-portrait {
                            width: 55%;
                        }
                        .hero-portrait-fade {
                            background: linear-gradient(to right, var(--lush-cream), rgba(244, 239, 232, 0.2), transparent);
                        }
                        .hero-copy {
                            margin-top: 0;
                        }
                        .hero-wordmark {
                            font-size: 6.5rem;
                        }
                        .hero-wordmark-mark {
                            left: -0.75rem;
                        }
                        .hero-wordmark-rest {
                            padding-left: 4.5rem;
                        }
                        .hero-tagline {
                            font-size: 3rem;
                        }
                        .hero-lede {
                            font-size: 1.25rem;
                        }
                        .scroll-indicator {
                            right: 3rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
