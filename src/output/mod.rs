mod app;
mod build;
mod rich_text;
mod serve;

pub use app::*;
pub use build::*;
pub use rich_text::*;
pub use serve::*;
