use catalog_domain::collection::RemoteCollection;
use catalog_domain::listing::RecordList;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Shared list state plus the callback that (re)fetches the current page
pub struct UseRecordListResult<T> {
    list: Rc<RefCell<RecordList<T>>>,
    pub refresh: Callback<()>,
    redraw: UseForceUpdateHandle,
}

impl<T> UseRecordListResult<T> {
    /// Read the list for rendering
    pub fn with<R>(&self, f: impl FnOnce(&RecordList<T>) -> R) -> R {
        f(&self.list.borrow())
    }

    /// Change the query; refetches when `f` reports a change
    pub fn update(&self, f: impl FnOnce(&mut RecordList<T>) -> bool) {
        let changed = f(&mut self.list.borrow_mut());
        if changed {
            self.refresh.emit(());
        } else {
            self.redraw.force_update();
        }
    }
}

impl<T> Clone for UseRecordListResult<T> {
    fn clone(&self) -> Self {
        Self {
            list: Rc::clone(&self.list),
            refresh: self.refresh.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

impl<T> PartialEq for UseRecordListResult<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.list, &other.list)
    }
}

/// Paged list backed by a remote collection
///
/// The first page loads on mount. Results that arrive after a newer fetch
/// started, or after the component unmounted, are dropped.
#[hook]
pub fn use_record_list<C, F>(collection: &C, init: F) -> UseRecordListResult<C::Item>
where
    C: RemoteCollection + Clone + 'static,
    F: FnOnce() -> RecordList<C::Item>,
    C::Item: 'static,
{
    let list = use_mut_ref(init);
    let redraw = use_force_update();

    let refresh = {
        let collection = collection.clone();
        let list = list.clone();
        let redraw = redraw.clone();
        use_callback((), move |_: (), _| {
            let (ticket, request) = list.borrow_mut().begin();
            redraw.force_update();

            let collection = collection.clone();
            let list = list.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let result = collection.search(&request).await;
                if list.borrow_mut().finish(ticket, result) {
                    redraw.force_update();
                }
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        let list = list.clone();
        move |_| {
            refresh.emit(());
            move || list.borrow_mut().cancel()
        }
    });

    UseRecordListResult { list, refresh, redraw }
}
