use catalog_domain::collection::SortSpec;
use catalog_domain::favorites::Favorites;
use catalog_domain::historical_date::format_optional;
use catalog_domain::listing::sort_indicator;
use catalog_domain::Locale;
use shared::QuoteRecord;
use yew::prelude::*;

/// Sortable columns as `(field, header)`
const COLUMNS: [(&str, &str); 4] = [
    ("author.name", "Autor"),
    ("text", "Cytat"),
    ("period", "Okres"),
    ("source", "Źródło"),
];

#[derive(Properties, PartialEq)]
pub struct QuoteTableProps {
    pub quotes: Vec<QuoteRecord>,
    pub locale: Locale,
    #[prop_or_default]
    pub sort: Option<SortSpec>,
    pub on_sort: Callback<&'static str>,
    #[prop_or_default]
    pub favorites: Favorites,
    #[prop_or_default]
    pub on_toggle_favorite: Callback<(i64, bool)>,
}

#[function_component(QuoteTable)]
pub fn quote_table(props: &QuoteTableProps) -> Html {
    let show_stars = props.favorites.is_signed_in();

    let headers = COLUMNS.iter().map(|(field, header)| {
        let field: &'static str = field;
        let onclick = props.on_sort.reform(move |_: MouseEvent| field);
        html! {
            <th class="sortable" {onclick}>
                {format!("{}{}", header, sort_indicator(props.sort.as_ref(), field))}
            </th>
        }
    });

    let rows = props.quotes.iter().map(|quote| {
        let star = match props.favorites.is_favorite(quote.id) {
            Some(favorite) => {
                let id = quote.id;
                let onclick = props.on_toggle_favorite.reform(move |_: MouseEvent| (id, favorite));
                html! {
                    <td class="favorite" {onclick}>{ if favorite { "★" } else { "☆" } }</td>
                }
            }
            None => html! {},
        };
        html! {
            <tr key={quote.id}>
                <td>{quote.author_name().to_string()}</td>
                <td>
                    {quote.text.clone()}
                    <div class="quote-date">{format_optional(quote.quote_date_info.as_ref(), props.locale)}</div>
                </td>
                <td>{quote.period.clone().unwrap_or_default()}</td>
                <td>{quote.source.clone().unwrap_or_default()}</td>
                {star}
            </tr>
        }
    });

    html! {
        <table class="quote-table">
            <thead>
                <tr>
                    { for headers }
                    if show_stars {
                        <th></th>
                    }
                </tr>
            </thead>
            <tbody>
                { for rows }
            </tbody>
        </table>
    }
}
