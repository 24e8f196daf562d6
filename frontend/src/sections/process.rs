use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::PROCESS_STEPS;
use crate::reveal::stagger_delay;

#[function_component(WorkProcess)]
pub fn work_process() -> Html {
    html! {
        <section id="process" class="process">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title process-title">{"Our Work"}<br/>{"Process"}</h2>
                </FadeIn>
                <div class="process-grid">
                    { for PROCESS_STEPS.iter().enumerate().map(|(idx, step)| html! {
                        <FadeIn key={step.number} delay={stagger_delay(idx + 1, 100)}>
                            <div class="process-step">
                                <div class="process-number">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .process {
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                        padding: 6rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .process-title {
                        color: #fff;
                    }
                    .process-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        margin-top: 4rem;
                    }
                    .process-step {
                        display: flex;
                        flex-direction: column;
                    }
                    .process-number {
                        font-size: 3.75rem;
                        font-family: var(--font-serif);
                        color: var(--lush-accent);
                        margin-bottom: 1.5rem;
                    }
                    .process-step h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 0 1rem;
                    }
                    .process-step p {
                        font-size: 0.875rem;
                        line-height: 1.625;
                        color: rgba(255, 255, 255, 0.7);
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .process {
                            padding: 8rem 0;
                        }
                        .process-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .process-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
