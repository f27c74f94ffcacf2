// Reusable UI components

pub mod button;
pub mod dialog_helpers;
pub mod file_picker;
pub mod form_field;
mod section;
pub mod token_dialog;

pub use button::Button;
pub use form_field::{FormField, form_field};
pub use section::{choice_row, section};
pub use token_dialog::TokenDialog;
