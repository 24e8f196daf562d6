use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::Icon;
use crate::content::{COPYRIGHT, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <div class="container">
                <FadeIn class={classes!("footer-content")}>
                    <div class="footer-contact">
                        <h3>{"Contact Us"}</h3>
                        <div class="footer-socials">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href} aria-label={link.label} class="footer-social">
                                    <Icon kind={link.icon} size={28} stroke_width={1.2} />
                                </a>
                            }) }
                        </div>
                    </div>
                    <div class="footer-legal">
                        <p>{COPYRIGHT}</p>
                    </div>
                </FadeIn>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: var(--lush-cream);
                        padding: 5rem 0;
                        border-top: 1px solid rgba(40, 30, 21, 0.1);
                    }
                    .footer-content {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 3rem;
                    }
                    .footer-contact {
                        text-align: center;
                    }
                    .footer-contact h3 {
                        font-size: 1.5rem;
                        font-weight: 300;
                        font-family: var(--font-serif);
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 0 2.5rem;
                    }
                    .footer-socials {
                        display: flex;
                        justify-content: center;
                        gap: 2rem;
                    }
                    .footer-social {
                        color: var(--lush-dark);
                        transition: all 0.3s;
                    }
                    .footer-social:hover {
                        color: var(--lush-accent);
                        transform: translateY(-0.25rem);
                    }
                    .footer-legal {
                        margin-top: 3rem;
                        text-align: center;
                        font-size: 10px;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: rgba(40, 30, 21, 0.4);
                    }
                    @media (min-width: 768px) {
                        .footer-contact h3 {
                            font-size: 1.875rem;
                        }
                        .footer-legal {
                            font-size: 0.75rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
