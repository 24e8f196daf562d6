use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::METRICS_IMAGE;

#[function_component(Metrics)]
pub fn metrics() -> Html {
    html! {
        <section class="metrics">
            <div class="metrics-dots"></div>
            <div class="container metrics-inner">
                <div class="metrics-grid">
                    <FadeIn class={classes!("metric")}>
                        <h4 class="metric-heading">{"Average Ticket Value"}</h4>
                        <div class="metric-figure">
                            <span class="metric-gt">{">"}</span>
                            <span class="metric-currency">{"¥"}</span>
                            <span class="metric-value">{"5000"}</span>
                        </div>
                        <div class="metric-badge">
                            <div class="metric-badge-mark">{"BC"}</div>
                            <div class="metric-badge-text">{"Bonnie & Clyde"}<br/>{"Developed in 2020"}</div>
                        </div>
                    </FadeIn>

                    <FadeIn delay={100} class={classes!("metrics-image-cell")}>
                        <div class="metrics-image">
                            <img src={METRICS_IMAGE} alt="Cosmetics Art" />
                        </div>
                    </FadeIn>

                    <FadeIn delay={200} class={classes!("metric")}>
                        <h4 class="metric-heading">{"CBEC Shanghai Delivery"}</h4>
                        <div class="metric-figure">
                            <span class="metric-value">{"4"}</span>
                            <span class="metric-unit">{"Hours"}</span>
                        </div>
                        <p class="metric-body">
                            {"Bonnie & Clyde, developed in 2020, has over 10M users in the coveted 28-35yr old range, commanding the highest ATV in multi-brand beauty."}
                        </p>
                    </FadeIn>
                </div>
            </div>
            <style>
                {r#"
                    .metrics {
                        position: relative;
                        overflow: hidden;
                        background: var(--lush-cream);
                        padding: 6rem 0;
                        border-top: 1px solid rgba(40, 30, 21, 0.1);
                    }
                    .metrics-dots {
                        position: absolute;
                        inset: 0;
                        opacity: 0.05;
                        pointer-events: none;
                        background-image: radial-gradient(#281E15 1px, transparent 1px);
                        background-size: 20px 20px;
                    }
                    .metrics-inner {
                        position: relative;
                        z-index: 10;
                    }
                    .metrics-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 5rem;
                        align-items: center;
                    }
                    .metric {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .metric-heading {
                        font-size: 1.25rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(40, 30, 21, 0.6);
                        border-bottom: 1px solid rgba(40, 30, 21, 0.2);
                        padding-bottom: 1rem;
                        margin: 0;
                    }
                    .metric-figure {
                        display: flex;
                        align-items: baseline;
                    }
                    .metric-gt {
                        font-size: 2.25rem;
                        margin-right: 1rem;
                        opacity: 0.5;
                        font-family: var(--font-serif);
                        font-style: italic;
                    }
                    .metric-currency {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-right: 0.5rem;
                    }
                    .metric-value {
                        font-size: 6rem;
                        line-height: 1;
                        font-family: var(--font-serif);
                    }
                    .metric-unit {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-left: 1rem;
                        font-family: var(--font-serif);
                        font-style: italic;
                        color: var(--lush-accent);
                    }
                    .metric-badge {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 2.5rem;
                    }
                    .metric-badge-mark {
                        font-size: 3rem;
                        font-family: var(--font-serif);
                        color: var(--lush-accent);
                    }
                    .metric-badge-text {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        opacity: 0.6;
                    }
                    .metric-body {
                        font-size: 1rem;
                        line-height: 1.625;
                        color: rgba(40, 30, 21, 0.8);
                        padding-top: 1rem;
                        margin: 0;
                    }
                    .metrics-image-cell {
                        display: none;
                        height: 100%;
                    }
                    .metrics-image {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        min-height: 400px;
                        overflow: hidden;
                        border-radius: 2px;
                    }
                    .metrics-image img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1) contrast(1.25);
                        transition: all 0.7s;
                    }
                    .metrics-image img:hover {
                        filter: grayscale(0) contrast(1.25);
                    }
                    @media (min-width: 768px) {
                        .metric-value {
                            font-size: 7rem;
                        }
                        .metric-unit {
                            font-size: 3rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .metrics-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .metrics-image-cell {
                            display: block;
                        }
                        .metric-value {
                            font-size: 6rem;
                        }
                        .metric-body {
                            font-size: 1.125rem;
                        }
                    }
                    @media (min-width: 1280px) {
                        .metric-value {
                            font-size: 7rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
