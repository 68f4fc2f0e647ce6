pub mod back_button;
pub mod dust;
pub mod page_dots;
pub mod toast;
pub mod ui;
