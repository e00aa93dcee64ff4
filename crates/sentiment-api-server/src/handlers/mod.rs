pub mod health;
pub mod process_text;
