pub mod api;
pub mod health;
pub mod selected_file;
