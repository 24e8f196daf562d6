use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::NEWS;
use crate::reveal::stagger_delay;

#[function_component(News)]
pub fn news() -> Html {
    html! {
        <section id="news" class="news">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title">{"News &"}<br/>{"Updates"}</h2>
                </FadeIn>
                <div class="news-grid">
                    { for NEWS.iter().enumerate().map(|(idx, item)| html! {
                        <FadeIn key={item.title} delay={stagger_delay(idx + 1, 100)}>
                            <div class="news-card">
                                <p class="news-tag">{item.tag}</p>
                                <h3>{item.title}</h3>
                                <p class="news-body">{item.body}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .news {
                        background: var(--lush-cream);
                        padding: 6rem 0;
                        border-top: 1px solid rgba(40, 30, 21, 0.1);
                    }
                    .news-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .news-card {
                        background: #fff;
                        padding: 2rem;
                        border: 1px solid rgba(40, 30, 21, 0.1);
                        transition: border-color 0.3s;
                    }
                    .news-card:hover {
                        border-color: var(--lush-accent);
                    }
                    .news-tag {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(40, 30, 21, 0.4);
                        margin: 0 0 1rem;
                    }
                    .news-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }
                    .news-body {
                        font-size: 0.875rem;
                        line-height: 1.625;
                        color: rgba(40, 30, 21, 0.7);
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .news {
                            padding: 8rem 0;
                        }
                        .news-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .news-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
