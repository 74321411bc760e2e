use catalog_domain::collection::RemoteCollection;
use catalog_domain::listing::RecordList;
use catalog_domain::moderation::{Identified, ModerationQueue};
use catalog_domain::record_form::EditTarget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseModerationQueueResult<R> {
    queue: Rc<RefCell<ModerationQueue<R>>>,
    pub reload: Callback<()>,
    redraw: UseForceUpdateHandle,
}

impl<R: Identified> UseModerationQueueResult<R> {
    pub fn with<T>(&self, f: impl FnOnce(&ModerationQueue<R>) -> T) -> T {
        f(&self.queue.borrow())
    }

    pub fn select(&self, id: i64) {
        if self.queue.borrow_mut().select(id) {
            self.redraw.force_update();
        }
    }

    /// Change the page or size of the pending list; refetches when `f` reports a change
    pub fn update(&self, f: impl FnOnce(&mut RecordList<EditTarget<R>>) -> bool) {
        if f(self.queue.borrow_mut().list_mut()) {
            self.reload.emit(());
        } else {
            self.redraw.force_update();
        }
    }

    /// Drop an approved or rejected record and fetch the queue again
    pub fn settle(&self, id: i64) {
        self.queue.borrow_mut().settle(id);
        self.reload.emit(());
    }
}

impl<R> Clone for UseModerationQueueResult<R> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
            reload: self.reload.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

/// Pending records awaiting moderation, loaded on mount
#[hook]
pub fn use_moderation_queue<C>(collection: &C, page_size: u32) -> UseModerationQueueResult<C::Item>
where
    C: RemoteCollection + Clone + 'static,
    C::Item: Identified + 'static,
{
    let queue = use_mut_ref(|| ModerationQueue::new(page_size));
    let redraw = use_force_update();

    let reload = {
        let collection = collection.clone();
        let queue = queue.clone();
        let redraw = redraw.clone();
        use_callback((), move |_: (), _| {
            let (ticket, request) = queue.borrow_mut().begin_load();
            redraw.force_update();

            let collection = collection.clone();
            let queue = queue.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let result = collection.search(&request).await;
                if let Err(e) = &result {
                    Logger::warn_with_component("moderation-queue", &format!("Failed to load pending records: {}", e));
                }
                if queue.borrow_mut().finish_load(ticket, result) {
                    redraw.force_update();
                }
            });
        })
    };

    use_effect_with((), {
        let reload = reload.clone();
        let queue = queue.clone();
        move |_| {
            reload.emit(());
            move || queue.borrow_mut().cancel()
        }
    });

    UseModerationQueueResult { queue, reload, redraw }
}
