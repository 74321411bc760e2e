use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Zero-based
    pub page: u32,
    pub total_pages: u32,
    pub size: u32,
    pub size_options: Vec<u32>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_size: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());
    let on_size = {
        let on_size = props.on_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                on_size.emit(size);
            }
        })
    };

    html! {
        <div class="pagination">
            <button onclick={on_prev} disabled={props.page == 0}>{"‹"}</button>
            <span>{format!("{} / {}", props.page + 1, props.total_pages.max(1))}</span>
            <button onclick={on_next} disabled={props.page + 1 >= props.total_pages}>{"›"}</button>
            <select onchange={on_size}>
                { for props.size_options.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == props.size}>{size.to_string()}</option>
                }) }
            </select>
        </div>
    }
}
