pub mod markdown;
pub mod text;

pub use markdown::render_markdown;
pub use text::render_text;
