pub mod dataset;
pub mod render;
pub mod repl;

pub use dataset::Source;
pub use render::OutputFormat;
pub use repl::Session;
