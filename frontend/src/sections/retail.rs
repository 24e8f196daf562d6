use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config;
use crate::content::{FLAGSHIP_STORES, RETAIL_LOCATIONS};
use crate::reveal::stagger_delay;

#[function_component(RetailLocations)]
pub fn retail_locations() -> Html {
    html! {
        <section class="retail">
            <div class="container">
                <FadeIn class={classes!("retail-header")}>
                    <div>
                        <h3>{"Retail Presence"}</h3>
                        <p>{"Representative locations from 200+ stores"}</p>
                    </div>
                    <div class="retail-flagships">
                        { for FLAGSHIP_STORES.iter().map(|store| html! { <span key={*store}>{*store}</span> }) }
                    </div>
                </FadeIn>

                <div class="retail-grid">
                    { for RETAIL_LOCATIONS.iter().enumerate().map(|(idx, location)| html! {
                        <FadeIn key={location.name} delay={stagger_delay(idx, 150)} class={classes!("retail-card")}>
                            <div class="retail-photo">
                                <div class="retail-photo-brand">{"USHOPAL"}</div>
                                <img src={config::asset(location.image)} alt={location.name} />
                                <div class="retail-photo-ring"></div>
                            </div>
                            <h4>{location.name}</h4>
                            {
                                match location.sub {
                                    Some(sub) => html! { <p class="retail-sub">{sub}</p> },
                                    None => html! {},
                                }
                            }
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .retail {
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                        padding: 6rem 0;
                    }
                    .retail-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        margin-bottom: 3rem;
                        padding-bottom: 1rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .retail-header h3 {
                        font-size: 0.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        margin: 0 0 0.5rem;
                    }
                    .retail-header p {
                        font-size: 0.75rem;
                        font-weight: 300;
                        color: rgba(255, 255, 255, 0.5);
                        margin: 0;
                    }
                    .retail-flagships {
                        display: flex;
                        gap: 1rem;
                        font-size: 0.75rem;
                        opacity: 0.6;
                    }
                    .retail-flagships span {
                        display: none;
                    }
                    .retail-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .retail-card {
                        cursor: pointer;
                    }
                    .retail-photo {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                        margin-bottom: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .retail-photo-brand {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 10;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        opacity: 0.7;
                        text-shadow: 0 2px 4px rgba(0, 0, 0, 0.4);
                    }
                    .retail-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.7;
                        transition: all 1s;
                    }
                    .retail-card:hover .retail-photo img {
                        transform: scale(1.1);
                        opacity: 1;
                    }
                    .retail-photo-ring {
                        position: absolute;
                        inset: 0;
                        box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.1);
                        transition: all 0.3s;
                    }
                    .retail-card:hover .retail-photo-ring {
                        box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.3);
                    }
                    .retail-card h4 {
                        font-size: 1.125rem;
                        font-weight: 500;
                        letter-spacing: 0.025em;
                        margin: 0;
                        transition: color 0.3s;
                    }
                    .retail-card:hover h4 {
                        color: var(--lush-accent);
                    }
                    .retail-sub {
                        font-size: 0.875rem;
                        font-weight: 300;
                        letter-spacing: 0.025em;
                        opacity: 0.5;
                        margin: 0.25rem 0 0;
                    }
                    @media (min-width: 768px) {
                        .retail-flagships span {
                            display: inline;
                        }
                        .retail-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .retail-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
