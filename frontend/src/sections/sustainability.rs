use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config;

#[function_component(Sustainability)]
pub fn sustainability() -> Html {
    html! {
        <section class="sustainability">
            <div class="container sustainability-banner">
                <FadeIn class={classes!("sustainability-content")}>
                    <div class="sustainability-intro">
                        <p class="sustainability-copy">
                            {"Embracing the movement towards conscious beauty, we ensure "}
                            <span class="sustainability-underline">
                                {"our unwavering commitment to sustainability resonates"}
                            </span>
                            {" with the values of the emerging generation."}
                        </p>
                        <div class="sustainability-tag">
                            <p>{"Ethically Sourced"}</p>
                            <div class="sustainability-tag-rule"></div>
                        </div>
                    </div>
                    <h2 class="sustainability-title">
                        {"Sustain"}<span class="accent">{"ability"}</span>
                    </h2>
                </FadeIn>
            </div>

            <div class="sustainability-shelf">
                <img src={config::asset("sustainability-shelf.png")} alt="Sustainability Shelf" />
                <div class="sustainability-shelf-fade"></div>
                <div class="sustainability-shelf-top"></div>
            </div>
            <style>
                {r#"
                    .sustainability {
                        position: relative;
                        overflow: hidden;
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                    }
                    .sustainability-banner {
                        position: relative;
                        z-index: 10;
                        padding-top: 5rem;
                        padding-bottom: 5rem;
                    }
                    .sustainability-content {
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        min-height: 40vh;
                    }
                    .sustainability-intro {
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        justify-content: flex-end;
                        gap: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .sustainability-copy {
                        order: 2;
                        max-width: 36rem;
                        font-size: 0.875rem;
                        font-weight: 300;
                        line-height: 1.625;
                        opacity: 0.8;
                        margin: 0;
                    }
                    .sustainability-underline {
                        text-decoration: underline;
                        text-decoration-color: var(--lush-accent);
                        text-underline-offset: 4px;
                    }
                    .sustainability-tag {
                        order: 1;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        flex-shrink: 0;
                    }
                    .sustainability-tag p {
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        white-space: nowrap;
                        color: var(--lush-accent);
                        margin: 0;
                    }
                    .sustainability-tag-rule {
                        display: none;
                        width: 3rem;
                        height: 1px;
                        background: var(--lush-accent);
                    }
                    .sustainability-title {
                        font-size: 14vw;
                        line-height: 0.8;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        white-space: nowrap;
                        color: #fff;
                        margin: 0 0 0 -0.25rem;
                    }
                    .sustainability-shelf {
                        position: relative;
                        width: 100%;
                        height: 50vh;
                        margin-top: -5vh;
                    }
                    .sustainability-shelf img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: sepia(0.3) brightness(0.5);
                    }
                    .sustainability-shelf-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--lush-dark), transparent, rgba(40, 30, 21, 0.5));
                    }
                    .sustainability-shelf-top {
                        position: absolute;
                        top: 0;
                        width: 100%;
                        height: 8rem;
                        background: linear-gradient(to bottom, var(--lush-dark), transparent);
                    }
                    @media (min-width: 768px) {
                        .sustainability-intro {
                            flex-direction: row;
                            align-items: center;
                            gap: 2rem;
                            margin-bottom: 2rem;
                        }
                        .sustainability-copy {
                            order: 1;
                            font-size: 1.125rem;
                            text-align: right;
                        }
                        .sustainability-tag {
                            order: 2;
                        }
                        .sustainability-tag-rule {
                            display: block;
                        }
                        .sustainability-title {
                            margin-left: -0.5rem;
                        }
                        .sustainability-shelf {
                            margin-top: -10vh;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
