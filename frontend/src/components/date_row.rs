use catalog_domain::historical_date::{labels, placeholder, UiDate};
use catalog_domain::Locale;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// One field of the date row changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateEdit {
    Type(String),
    Value(String),
    Precision(String),
    Era(String),
}

impl DateEdit {
    /// Apply to a date that has no derived fields depending on it
    pub fn apply(self, date: &mut UiDate) {
        match self {
            DateEdit::Type(label) => date.type_label = label,
            DateEdit::Value(value) => date.value = value,
            DateEdit::Precision(label) => date.approx_label = label,
            DateEdit::Era(label) => date.era_label = label,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DateRowProps {
    pub label: AttrValue,
    pub date: UiDate,
    pub locale: Locale,
    pub on_edit: Callback<DateEdit>,
}

fn options(choices: &[&'static str], selected: &str) -> Html {
    choices
        .iter()
        .map(|choice| {
            html! { <option value={*choice} selected={*choice == selected}>{*choice}</option> }
        })
        .collect()
}

/// Type, value, precision and era pickers for one historical date
#[function_component(DateRow)]
pub fn date_row(props: &DateRowProps) -> Html {
    let select_handler = |wrap: fn(String) -> DateEdit| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(wrap(select.value()));
        })
    };

    let on_value_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(DateEdit::Value(input.value()));
        })
    };

    let error = props.date.error_message(props.locale);

    html! {
        <div class="date-row">
            <label>{props.label.clone()}</label>
            <div class="date-row-fields">
                <select onchange={select_handler(DateEdit::Type)}>
                    {options(&labels::TYPES, &props.date.type_label)}
                </select>
                <input
                    type="text"
                    class={classes!("date-value", error.map(|_| "invalid"))}
                    placeholder={placeholder(props.date.kind())}
                    value={props.date.value.clone()}
                    oninput={on_value_input}
                />
                <select onchange={select_handler(DateEdit::Precision)}>
                    {options(&labels::PRECISIONS, &props.date.approx_label)}
                </select>
                <select onchange={select_handler(DateEdit::Era)}>
                    {options(&labels::ERAS, &props.date.era_label)}
                </select>
            </div>
            if let Some(message) = error {
                <div class="date-error">{message}</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_edits_apply_to_ui_date() {
        let mut date = UiDate::default();
        DateEdit::Type(labels::TYPE_CENTURY.to_string()).apply(&mut date);
        DateEdit::Value("XV w.".to_string()).apply(&mut date);
        DateEdit::Era(labels::BC.to_string()).apply(&mut date);
        assert!(date.is_valid());
        assert_eq!(date.era_label, labels::BC);
    }
}
