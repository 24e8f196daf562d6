use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;
use crate::error::{Result, SiteError};
use crate::reveal::{IntersectionSample, RevealController, RevealPresentation, Transition};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Ends every observation made by a watcher.
trait Disconnect {
    fn disconnect(&self);
}

/// Browser observer together with the callback it calls into.
struct BrowserObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Disconnect for BrowserObserver {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Feeds one sample to the controller. `stop` runs only on the reveal
/// transition and must end the observation of that block.
fn deliver(controller: &RefCell<RevealController>, sample: IntersectionSample, stop: impl FnOnce()) -> bool {
    if controller.borrow_mut().observe(sample) != Transition::Reveal {
        return false;
    }
    stop();
    debug!("block revealed at ratio {:.2}", sample.ratio);
    true
}

/// Live observation of one wrapped block. Dropping it cancels the controller
/// and disconnects the watcher.
struct RevealWatch<W: Disconnect> {
    controller: Rc<RefCell<RevealController>>,
    watcher: W,
}

impl<W: Disconnect> RevealWatch<W> {
    fn new(controller: Rc<RefCell<RevealController>>, watcher: W) -> Self {
        controller.borrow_mut().start_watch();
        Self { controller, watcher }
    }
}

impl RevealWatch<BrowserObserver> {
    fn attach(
        element: &Element,
        controller: Rc<RefCell<RevealController>>,
        on_reveal: UseStateSetter<bool>,
    ) -> Result<Self> {
        if !dom::supports_intersection_observer(&dom::window()?) {
            return Err(SiteError::ObserverUnsupported);
        }

        let watched = controller.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let sample = IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                if deliver(&watched, sample, || observer.unobserve(&entry.target())) {
                    on_reveal.set(true);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        let watch = Self::new(
            controller,
            BrowserObserver {
                observer,
                _callback: callback,
            },
        );
        watch.watcher.observer.observe(element);
        Ok(watch)
    }
}

impl<W: Disconnect> Drop for RevealWatch<W> {
    fn drop(&mut self) {
        {
            let mut controller = self.controller.borrow_mut();
            if controller.cancel() {
                debug!("block unmounted before reveal, watch cancelled");
            } else {
                debug!("reveal watch released in phase {:?}", controller.phase());
            }
        }
        self.watcher.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Start offset of the transition in milliseconds.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Keeps its children transparent and shifted down until they first scroll
/// into view, then fades them in. Never hides them again.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let on_reveal = visible.setter();
        use_effect_with_deps(
            move |_| {
                let controller = Rc::new(RefCell::new(RevealController::new()));
                let watch = node_ref
                    .cast::<Element>()
                    .ok_or(SiteError::MissingNode)
                    .and_then(|element| RevealWatch::<BrowserObserver>::attach(&element, controller.clone(), on_reveal.clone()));

                let watch = match watch {
                    Ok(watch) => Some(watch),
                    Err(err) => {
                        // Never leave content hidden because we could not watch it.
                        warn!("showing block without reveal animation: {}", err);
                        if err == SiteError::ObserverUnsupported {
                            gloo_console::warn!("IntersectionObserver missing, scroll animations disabled");
                        }
                        controller.borrow_mut().reveal_unwatched();
                        on_reveal.set(true);
                        None
                    }
                };

                move || drop(watch)
            },
            (),
        );
    }

    let presentation = RevealPresentation::for_state(*visible, props.delay);

    html! {
        <div
            ref={node_ref}
            class={classes!(presentation.classes, props.class.clone())}
            style={presentation.style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::reveal::WatchPhase;

    #[derive(Clone, Default)]
    struct CountingWatcher {
        disconnects: Rc<Cell<usize>>,
    }

    impl Disconnect for CountingWatcher {
        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    fn mounted() -> (Rc<RefCell<RevealController>>, CountingWatcher, RevealWatch<CountingWatcher>) {
        let controller = Rc::new(RefCell::new(RevealController::new()));
        let watcher = CountingWatcher::default();
        let watch = RevealWatch::new(controller.clone(), watcher.clone());
        (controller, watcher, watch)
    }

    #[test]
    fn stops_observing_exactly_once() {
        let (controller, _watcher, _watch) = mounted();
        let stops = Cell::new(0);

        let samples = [(false, 0.0), (true, 0.15), (false, 0.0), (true, 0.9)];
        let reveals = samples
            .into_iter()
            .filter(|&(hit, ratio)| {
                deliver(&controller, IntersectionSample::new(hit, ratio), || stops.set(stops.get() + 1))
            })
            .count();

        assert_eq!(reveals, 1);
        assert_eq!(stops.get(), 1);
        assert!(controller.borrow().visible());
    }

    #[test]
    fn unmount_before_reveal_disconnects_and_ignores_late_callbacks() {
        let (controller, watcher, watch) = mounted();
        drop(watch);

        assert_eq!(watcher.disconnects.get(), 1);
        assert_eq!(controller.borrow().phase(), WatchPhase::Cancelled);

        let stopped = Cell::new(false);
        assert!(!deliver(&controller, IntersectionSample::new(true, 1.0), || stopped.set(true)));
        assert!(!stopped.get());
        assert!(!controller.borrow().visible());
    }

    #[test]
    fn unmount_after_reveal_still_disconnects() {
        let (controller, watcher, watch) = mounted();
        assert!(deliver(&controller, IntersectionSample::new(true, 0.5), || ()));
        drop(watch);

        assert_eq!(watcher.disconnects.get(), 1);
        assert_eq!(controller.borrow().phase(), WatchPhase::Finished);
        assert!(controller.borrow().visible());
    }
}
