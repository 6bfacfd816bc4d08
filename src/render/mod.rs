mod html;
mod terminal;

pub use html::render_page;
pub use terminal::{render_panel, render_screen};
