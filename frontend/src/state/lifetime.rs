use futures::future::{AbortHandle, Abortable};
use leptos::*;
use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

#[derive(Default)]
struct LifetimeInner {
    alive: Cell<bool>,
    next_id: Cell<u64>,
    handles: RefCell<Vec<(u64, AbortHandle)>>,
}

/// Ties asynchronous work to a component instance.
///
/// Once ended, guarded futures are aborted at their next suspension point and
/// `is_alive` turns false so late callbacks can skip their state writes.
#[derive(Clone)]
pub struct Lifetime {
    inner: Rc<LifetimeInner>,
}

impl Lifetime {
    pub fn new() -> Self {
        let inner = LifetimeInner::default();
        inner.alive.set(true);
        Self {
            inner: Rc::new(inner),
        }
    }

    /// Lifetime that ends when the current reactive scope is disposed.
    pub fn bind_to_scope() -> Self {
        let lifetime = Self::new();
        let on_drop = lifetime.clone();
        on_cleanup(move || on_drop.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    pub fn end(&self) {
        if !self.inner.alive.replace(false) {
            return;
        }
        let handles = self.inner.handles.take();
        if !handles.is_empty() {
            log::debug!("aborting {} task(s) after unmount", handles.len());
        }
        for (_, handle) in handles {
            handle.abort();
        }
    }

    /// Runs `fut` unless the lifetime ends first; `None` when aborted.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        if !self.is_alive() {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.handles.borrow_mut().push((id, handle));

        let output = Abortable::new(fut, registration).await.ok();

        self.inner
            .handles
            .borrow_mut()
            .retain(|(handle_id, _)| *handle_id != id);
        output
    }

    pub fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        let lifetime = self.clone();
        spawn_local(async move {
            let _ = lifetime.guard(fut).await;
        });
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.inner.handles.borrow().len()
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds a busy flag for the duration of a flow, including early exits
/// and aborts.
pub struct InFlight {
    flag: RwSignal<bool>,
}

impl InFlight {
    pub fn begin(flag: RwSignal<bool>) -> Self {
        let _ = flag.try_set(true);
        Self { flag }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let _ = self.flag.try_set(false);
    }
}
