use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{DETAILED_STATS, HEADLINE_STATS};
use crate::reveal::stagger_delay;

#[function_component(StatsBar)]
pub fn stats_bar() -> Html {
    html! {
        <section class="stats-bar">
            <div class="container">
                <div class="stats-bar-grid">
                    { for HEADLINE_STATS.iter().enumerate().map(|(idx, stat)| html! {
                        <FadeIn
                            key={idx}
                            delay={stagger_delay(idx, 150)}
                            class={classes!("stats-bar-item", (idx > 0).then(|| "stats-bar-item-divided"))}
                        >
                            <div class="stats-bar-figure">
                                <span class="stats-bar-value">{stat.value}</span>
                                {
                                    match stat.suffix {
                                        Some(suffix) => html! { <span class="stats-bar-suffix">{suffix}</span> },
                                        None => html! { <span class="stats-bar-plus">{"+"}</span> },
                                    }
                                }
                            </div>
                            <p class="stats-bar-label">{stat.label}</p>
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .stats-bar {
                        position: relative;
                        z-index: 20;
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                        padding: 5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .stats-bar-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        text-align: center;
                    }
                    .stats-bar-item {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .stats-bar-item-divided {
                        padding-top: 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .stats-bar-figure {
                        display: flex;
                        align-items: baseline;
                        justify-content: center;
                        margin-bottom: 0.75rem;
                    }
                    .stats-bar-value {
                        font-size: 3.75rem;
                        font-weight: 300;
                        font-family: var(--font-serif);
                    }
                    .stats-bar-suffix {
                        font-size: 1.5rem;
                        font-weight: 300;
                        margin-left: 0.5rem;
                        color: var(--lush-accent);
                    }
                    .stats-bar-plus {
                        font-size: 2.25rem;
                        font-weight: 300;
                        margin-left: 0.25rem;
                        color: var(--lush-accent);
                        opacity: 0.8;
                    }
                    .stats-bar-label {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        opacity: 0.7;
                        margin: 0.5rem auto 0;
                        max-width: 240px;
                    }
                    @media (min-width: 768px) {
                        .stats-bar-grid {
                            grid-template-columns: repeat(3, 1fr);
                            text-align: left;
                        }
                        .stats-bar-figure {
                            justify-content: flex-start;
                        }
                        .stats-bar-item-divided {
                            padding-top: 0;
                            padding-left: 3rem;
                            border-top: none;
                            border-left: 1px solid rgba(255, 255, 255, 0.1);
                        }
                        .stats-bar-value {
                            font-size: 6rem;
                        }
                        .stats-bar-suffix {
                            font-size: 2.25rem;
                        }
                        .stats-bar-label {
                            font-size: 0.875rem;
                            margin-left: 0;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(DetailedStats)]
pub fn detailed_stats() -> Html {
    html! {
        <section class="detailed-stats">
            <div class="container">
                <div class="detailed-stats-grid">
                    { for DETAILED_STATS.iter().enumerate().map(|(idx, stat)| html! {
                        <FadeIn
                            key={idx}
                            delay={stagger_delay(idx, 200)}
                            class={classes!("detailed-stat", (idx > 0).then(|| "detailed-stat-divided"))}
                        >
                            <h4 class="detailed-stat-heading">{stat.heading}</h4>
                            <div class="detailed-stat-caption">{stat.caption}</div>
                            <div class="detailed-stat-value">
                                {stat.value}
                                { if stat.plus { html! { <span class="detailed-stat-plus">{"+"}</span> } } else { html! {} } }
                            </div>
                            <div class="detailed-stat-highlight">
                                <h5>{stat.highlight}</h5>
                                <p>{stat.highlight_body}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .detailed-stats {
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                        padding: 6rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .detailed-stats-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    .detailed-stat {
                        padding-top: 2rem;
                    }
                    .detailed-stat-divided {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .detailed-stat-heading {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: var(--lush-gray);
                        width: 6rem;
                        margin: 0 0 2rem;
                        padding-bottom: 0.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .detailed-stat-caption {
                        font-size: 1rem;
                        font-weight: 300;
                        color: var(--lush-gray);
                        height: 3rem;
                        margin-bottom: 3rem;
                    }
                    .detailed-stat-value {
                        display: flex;
                        align-items: flex-start;
                        font-size: 6rem;
                        font-weight: 300;
                        font-family: var(--font-serif);
                        color: #fff;
                    }
                    .detailed-stat-plus {
                        font-size: 2.25rem;
                        margin-top: 1rem;
                        color: var(--lush-accent);
                    }
                    .detailed-stat-highlight {
                        margin-top: 3rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .detailed-stat-highlight h5 {
                        font-size: 1.25rem;
                        font-family: var(--font-serif);
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.9);
                        margin: 0 0 0.5rem;
                    }
                    .detailed-stat-highlight p {
                        font-size: 0.75rem;
                        font-weight: 300;
                        line-height: 1.625;
                        max-width: 20rem;
                        color: var(--lush-gray);
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .detailed-stats-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .detailed-stat {
                            padding-top: 0;
                            padding-right: 2rem;
                        }
                        .detailed-stat-divided {
                            border-top: none;
                            border-left: 1px solid rgba(255, 255, 255, 0.1);
                            padding-left: 3rem;
                        }
                        .detailed-stat-value {
                            font-size: 8rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
