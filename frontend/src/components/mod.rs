pub mod author_form;
pub mod date_row;
pub mod menu;
pub mod nationality_picker;
pub mod pagination;
pub mod quote_form;
pub mod quote_table;
pub mod toast;
