pub mod use_favorites;
pub mod use_moderation_queue;
pub mod use_record_list;
pub mod use_session;
pub mod use_toast;
