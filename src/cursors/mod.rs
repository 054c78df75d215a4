pub mod text;

pub use text::TextCursor;
