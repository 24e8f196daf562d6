use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Window};

use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Something that scrolls vertically and reports it.
pub trait ScrollSource: Clone + 'static {
    type Handler;

    /// Current vertical scroll offset.
    fn offset(&self) -> Result<f64>;

    fn listen(&self, handler: Box<dyn FnMut()>) -> Result<Self::Handler>;

    fn unlisten(&self, handler: &Self::Handler) -> Result<()>;
}

impl ScrollSource for Window {
    type Handler = Closure<dyn FnMut()>;

    fn offset(&self) -> Result<f64> {
        Ok(self.scroll_y()?)
    }

    fn listen(&self, handler: Box<dyn FnMut()>) -> Result<Self::Handler> {
        let callback = Closure::wrap(handler);
        self.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(callback)
    }

    fn unlisten(&self, handler: &Self::Handler) -> Result<()> {
        self.remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
        Ok(())
    }
}

/// Scroll listener that reports offsets until dropped.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handler: S::Handler,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Installs the listener and reports the current offset once right away,
    /// since a reload can restore the page mid-scroll.
    pub fn new<F>(source: S, on_offset: F) -> Result<Self>
    where
        F: Fn(f64) + 'static,
    {
        let on_offset = Rc::new(on_offset);

        let reader = source.clone();
        let report = on_offset.clone();
        let handler = source.listen(Box::new(move || match reader.offset() {
            Ok(offset) => report(offset),
            Err(err) => warn!("could not read scroll offset: {}", err),
        }))?;
        debug!("installed scroll listener");

        match source.offset() {
            Ok(offset) => on_offset(offset),
            Err(err) => warn!("could not read initial scroll offset: {}", err),
        }

        Ok(Self { source, handler })
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        match self.source.unlisten(&self.handler) {
            Ok(()) => debug!("removed scroll listener"),
            Err(err) => warn!("failed to remove scroll listener: {}", err),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ScrollSource;
    use crate::error::Result;

    #[derive(Default)]
    struct PageState {
        offset: f64,
        handlers: Vec<Option<Box<dyn FnMut()>>>,
        removed: usize,
    }

    /// In-memory page that can be scrolled from a test.
    #[derive(Clone, Default)]
    pub struct FakePage {
        state: Rc<RefCell<PageState>>,
    }

    impl FakePage {
        pub fn at(offset: f64) -> Self {
            let page = Self::default();
            page.state.borrow_mut().offset = offset;
            page
        }

        pub fn scroll_to(&self, offset: f64) {
            self.state.borrow_mut().offset = offset;
            let mut handlers = std::mem::take(&mut self.state.borrow_mut().handlers);
            for handler in handlers.iter_mut().flatten() {
                handler();
            }
            self.state.borrow_mut().handlers = handlers;
        }

        pub fn live_listeners(&self) -> usize {
            self.state.borrow().handlers.iter().filter(|h| h.is_some()).count()
        }

        pub fn removed_listeners(&self) -> usize {
            self.state.borrow().removed
        }
    }

    impl ScrollSource for FakePage {
        type Handler = usize;

        fn offset(&self) -> Result<f64> {
            Ok(self.state.borrow().offset)
        }

        fn listen(&self, handler: Box<dyn FnMut()>) -> Result<usize> {
            let mut state = self.state.borrow_mut();
            state.handlers.push(Some(handler));
            Ok(state.handlers.len() - 1)
        }

        fn unlisten(&self, handler: &usize) -> Result<()> {
            let mut state = self.state.borrow_mut();
            if let Some(slot) = state.handlers.get_mut(*handler) {
                if slot.take().is_some() {
                    state.removed += 1;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::FakePage;
    use super::ScrollSubscription;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl Fn(f64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |offset| sink.borrow_mut().push(offset))
    }

    #[test]
    fn reports_initial_offset_then_every_scroll() {
        let page = FakePage::at(120.0);
        let (seen, record) = recorder();

        let subscription = ScrollSubscription::new(page.clone(), record).unwrap();
        page.scroll_to(20.0);
        page.scroll_to(80.0);

        assert_eq!(*seen.borrow(), vec![120.0, 20.0, 80.0]);
        assert_eq!(page.live_listeners(), 1);
        drop(subscription);
    }

    #[test]
    fn dropping_removes_the_listener() {
        let page = FakePage::default();
        let (seen, record) = recorder();

        let subscription = ScrollSubscription::new(page.clone(), record).unwrap();
        drop(subscription);
        page.scroll_to(300.0);

        assert_eq!(*seen.borrow(), vec![0.0]);
        assert_eq!(page.live_listeners(), 0);
        assert_eq!(page.removed_listeners(), 1);
    }
}
