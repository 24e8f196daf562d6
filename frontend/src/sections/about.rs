use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{Icon, IconKind};
use crate::content::ABOUT_IMAGE;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-grid">
                    <FadeIn class={classes!("about-intro")}>
                        <h2 class="about-title">
                            {"About"}<br/><span class="accent font-serif italic">{"U"}</span>{"SHOPAL"}
                        </h2>
                        <div class="about-rule"></div>
                        <div class="about-image">
                            <img src={ABOUT_IMAGE} alt="Luxury Fashion Model" />
                            <div class="about-image-tint"></div>
                        </div>
                    </FadeIn>

                    <FadeIn delay={200} class={classes!("about-body")}>
                        <h3 class="about-subtitle">{"Growth"}<br/>{"Partners"}</h3>
                        <div class="about-copy">
                            <p class="about-copy-ruled">
                                {"We take luxury beauty brands from startup to market leaders. "}
                                {"We invest in founders developing the iconic brands of tomorrow."}
                            </p>
                            <p>
                                {"We are beauty brand equity partners. "}
                                {"The only luxury beauty player combining the future of the East and West."}
                            </p>
                        </div>
                        <div>
                            <button class="about-more">
                                {"Read More"}
                                <Icon kind={IconKind::ArrowRight} size={16} class={classes!("about-more-arrow")} />
                            </button>
                        </div>
                    </FadeIn>
                </div>
            </div>
            <style>
                {r#"
                    .about {
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                        padding: 6rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: start;
                    }
                    .about-intro {
                        display: flex;
                        flex-direction: column;
                    }
                    .about-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        line-height: 1.25;
                        margin: 0 0 1.5rem;
                    }
                    .about-rule {
                        height: 4px;
                        width: 6rem;
                        background: var(--lush-accent);
                        margin-bottom: 3rem;
                    }
                    .about-image {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 3 / 4;
                        overflow: hidden;
                        filter: grayscale(30%);
                        transition: all 0.7s;
                    }
                    .about-image:hover {
                        filter: grayscale(0);
                    }
                    .about-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-image-tint {
                        position: absolute;
                        inset: 0;
                        background: rgba(40, 30, 21, 0.1);
                    }
                    .about-body {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 2.5rem;
                    }
                    .about-subtitle {
                        font-size: 3rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        color: rgba(255, 255, 255, 0.9);
                        margin: 0;
                    }
                    .about-copy {
                        max-width: 32rem;
                        font-size: 1.125rem;
                        font-weight: 300;
                        line-height: 1.625;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .about-copy p {
                        margin: 0 0 2rem;
                    }
                    .about-copy-ruled {
                        border-left: 1px solid rgba(255, 255, 255, 0.2);
                        padding-left: 1.5rem;
                    }
                    .about-more {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: none;
                        border: none;
                        padding: 1rem 0 0;
                        color: inherit;
                        cursor: pointer;
                        font-size: 0.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        transition: color 0.3s;
                    }
                    .about-more:hover {
                        color: var(--lush-accent);
                    }
                    .about-more-arrow {
                        transition: transform 0.3s;
                    }
                    .about-more:hover .about-more-arrow {
                        transform: translateX(0.25rem);
                    }
                    @media (min-width: 768px) {
                        .about {
                            padding: 8rem 0;
                        }
                        .about-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .about-title {
                            font-size: 3.75rem;
                        }
                        .about-image {
                            aspect-ratio: 4 / 5;
                        }
                        .about-body {
                            padding-top: 6rem;
                        }
                        .about-subtitle {
                            font-size: 4.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
