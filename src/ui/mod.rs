pub mod table;

pub use table::{render_page, render_pager};
