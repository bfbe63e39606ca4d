//! Built-in formatters.

mod unnecessary_imports;
mod whitespace;

pub use unnecessary_imports::UnnecessaryImportsFormatter;
pub use whitespace::WhitespaceFormatter;
