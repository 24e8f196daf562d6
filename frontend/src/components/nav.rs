use std::rc::Rc;

use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config::SCROLL_THRESHOLD_PX;
use crate::content::NAV_LINKS;
use crate::dom::{self, ScrollSubscription};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkActivated,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: offset > SCROLL_THRESHOLD_PX,
                ..*self
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..*self
            },
            NavAction::LinkActivated => NavState {
                menu_open: false,
                ..*self
            },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window().and_then(|window| {
                    ScrollSubscription::new(window, move |offset| {
                        dispatcher.dispatch(NavAction::Scrolled(offset))
                    })
                });

                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        warn!("navbar will stay expanded: {}", err);
                        None
                    }
                };

                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    // No prevent_default here, the anchor still has to jump to its section.
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::LinkActivated))
    };

    html! {
        <nav class={classes!("site-nav", state.scrolled.then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">{"U"}</span>{"SHOPAL"}
                </a>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.href}
                            class={classes!("nav-link", link.primary.then(|| "nav-link-primary"))}
                        >
                            {link.label}
                        </a>
                    }) }
                    <span class="nav-lang">{"EN / CN"}</span>
                </div>

                <button class="nav-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    <Icon kind={if state.menu_open { IconKind::Close } else { IconKind::Menu }} size={28} />
                </button>
            </div>

            <div class={classes!("nav-mobile", state.menu_open.then(|| "open"))}>
                <div class="nav-mobile-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="nav-mobile-link" onclick={close_menu.clone()}>
                            {link.label}
                        </a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 2rem 0;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.5s ease-in-out;
                    }
                    .site-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(244, 239, 232, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        border-bottom-color: rgba(40, 30, 21, 0.05);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                        font-weight: 900;
                        font-size: 1.5rem;
                        letter-spacing: 0.025em;
                        color: var(--lush-dark);
                        text-decoration: none;
                    }
                    .logo-mark {
                        color: var(--lush-accent);
                        font-size: 1.875rem;
                        font-family: var(--font-serif);
                        font-style: italic;
                    }
                    .nav-desktop {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        color: rgba(40, 30, 21, 0.8);
                        text-decoration: none;
                        transition: all 0.3s;
                    }
                    .nav-link:hover {
                        color: var(--lush-accent);
                    }
                    .nav-link-primary {
                        background: var(--lush-dark);
                        color: var(--lush-cream);
                        padding: 0.625rem 1.5rem;
                        border-radius: 2px;
                    }
                    .nav-link-primary:hover {
                        background: var(--lush-accent);
                        color: #fff;
                    }
                    .nav-lang {
                        margin-left: 1.5rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        color: var(--lush-accent);
                        cursor: pointer;
                    }
                    .nav-lang:hover {
                        opacity: 0.7;
                    }
                    .nav-toggle {
                        background: none;
                        border: none;
                        color: var(--lush-dark);
                        cursor: pointer;
                    }
                    .nav-mobile {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        max-height: 0;
                        padding: 0 1.5rem;
                        opacity: 0;
                        overflow: hidden;
                        box-sizing: border-box;
                        background: var(--lush-cream);
                        border-top: 1px solid rgba(40, 30, 21, 0.1);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        transition: all 0.5s ease-in-out;
                    }
                    .nav-mobile.open {
                        max-height: 100vh;
                        padding: 2rem 1.5rem;
                        opacity: 1;
                    }
                    .nav-mobile-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .nav-mobile-link {
                        font-size: 0.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        color: var(--lush-dark);
                        text-decoration: none;
                    }
                    .nav-mobile-link:hover {
                        color: var(--lush-accent);
                    }
                    @media (min-width: 1024px) {
                        .nav-desktop {
                            display: flex;
                        }
                        .nav-toggle,
                        .nav-mobile {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::dom::testing::FakePage;

    fn apply(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_expanded_with_menu_closed() {
        let state = NavState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn scrolled_is_a_pure_function_of_offset() {
        for offset in [0.0, 20.0, 49.9, 50.0, 50.1, 80.0, 5000.0] {
            let from_top = apply(NavState::default(), NavAction::Scrolled(offset));
            let from_scrolled = apply(
                NavState { scrolled: true, menu_open: false },
                NavAction::Scrolled(offset),
            );
            assert_eq!(from_top.scrolled, offset > 50.0, "offset {}", offset);
            assert_eq!(from_scrolled.scrolled, from_top.scrolled, "offset {}", offset);
        }
    }

    #[test]
    fn scroll_down_then_back_up() {
        let state = NavState::default();
        assert!(!state.scrolled);
        let state = apply(state, NavAction::Scrolled(80.0));
        assert!(state.scrolled);
        let state = apply(state, NavAction::Scrolled(20.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_alternates_menu() {
        let mut state = NavState::default();
        for expected in [true, false, true, false] {
            state = apply(state, NavAction::ToggleMenu);
            assert_eq!(state.menu_open, expected);
        }
    }

    #[test]
    fn link_click_closes_menu_from_any_state() {
        let opened = apply(NavState::default(), NavAction::ToggleMenu);
        assert!(opened.menu_open);
        assert!(!apply(opened, NavAction::LinkActivated).menu_open);
        assert!(!apply(NavState::default(), NavAction::LinkActivated).menu_open);
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let state = apply(NavState::default(), NavAction::ToggleMenu);
        let state = apply(state, NavAction::Scrolled(300.0));
        assert!(state.menu_open && state.scrolled);

        let state = apply(state, NavAction::LinkActivated);
        assert!(state.scrolled);
        assert!(!state.menu_open);

        let state = apply(state, NavAction::Scrolled(0.0));
        assert!(!state.scrolled && !state.menu_open);
    }

    fn subscribed_state(page: &FakePage) -> (Rc<RefCell<Rc<NavState>>>, ScrollSubscription<FakePage>) {
        let state = Rc::new(RefCell::new(Rc::new(NavState::default())));
        let target = state.clone();
        let subscription = ScrollSubscription::new(page.clone(), move |offset| {
            let current = target.borrow().clone();
            *target.borrow_mut() = current.reduce(NavAction::Scrolled(offset));
        })
        .unwrap();
        (state, subscription)
    }

    #[test]
    fn mounting_mid_page_renders_compact_immediately() {
        let page = FakePage::at(640.0);
        let (state, _subscription) = subscribed_state(&page);
        assert!(state.borrow().scrolled);

        page.scroll_to(10.0);
        assert!(!state.borrow().scrolled);
    }

    #[test]
    fn scrolling_after_teardown_no_longer_dispatches() {
        let page = FakePage::default();
        let (state, subscription) = subscribed_state(&page);
        page.scroll_to(80.0);
        assert!(state.borrow().scrolled);

        drop(subscription);
        page.scroll_to(0.0);

        assert!(state.borrow().scrolled);
        assert_eq!(page.live_listeners(), 0);
        assert_eq!(page.removed_listeners(), 1);
    }

    #[test]
    fn unchanged_state_keeps_the_same_allocation() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
