use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::reveal;

/// Palette, base typography and the shared reveal transition.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                :root {
                    --lush-cream: #F4EFE8;
                    --lush-dark: #281E15;
                    --lush-accent: #B5835A;
                    --lush-gray: #A39B92;
                    --font-serif: "Playfair Display", Georgia, serif;
                    --font-sans: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: var(--font-sans);
                    color: var(--lush-dark);
                    background: var(--lush-cream);
                    -webkit-font-smoothing: antialiased;
                    overflow-x: hidden;
                }

                ::selection {
                    background: var(--lush-accent);
                    color: #fff;
                }

                img {
                    display: block;
                }

                .container {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .font-serif {
                    font-family: var(--font-serif);
                }

                .font-sans {
                    font-family: var(--font-sans);
                }

                .font-bold {
                    font-weight: 700;
                }

                .font-black {
                    font-weight: 900;
                }

                .italic {
                    font-style: italic;
                }

                .section-title {
                    font-size: 3rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: -0.025em;
                    margin: 0 0 3rem;
                }

                .accent {
                    color: var(--lush-accent);
                }

                @media (min-width: 768px) {
                    .container {
                        padding: 0 3rem;
                    }

                    .section-title {
                        font-size: 4.5rem;
                    }
                }
            "#)} />
            <style>{ reveal::stylesheet() }</style>
        </>
    }
}
