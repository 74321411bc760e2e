pub mod home;
pub mod list_authors;
pub mod list_favorites;
pub mod list_quotes;
pub mod moderate_authors;
pub mod moderate_quotes;
pub mod submit_author;
pub mod submit_quote;

use catalog_domain::moderation::Identified;
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::hooks::use_moderation_queue::UseModerationQueueResult;

/// Pagination bar wired to a moderation queue
fn moderation_pagination<R: Identified + 'static>(queue: &UseModerationQueueResult<R>, size_options: &[u32]) -> Html {
    let (page, total_pages, size) = queue.with(|q| (q.list().query().page, q.list().total_pages(), q.list().query().size));
    let on_prev = {
        let queue = queue.clone();
        Callback::from(move |_: ()| queue.update(|l| l.prev_page()))
    };
    let on_next = {
        let queue = queue.clone();
        Callback::from(move |_: ()| queue.update(|l| l.next_page()))
    };
    let on_size = {
        let queue = queue.clone();
        Callback::from(move |size: u32| {
            queue.update(|l| {
                l.set_size(size);
                true
            })
        })
    };
    html! {
        <Pagination {page} {total_pages} {size} size_options={size_options.to_vec()} {on_prev} {on_next} {on_size} />
    }
}
