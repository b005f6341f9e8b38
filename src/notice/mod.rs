mod content;
mod load;
mod record;
mod store;

pub use content::*;
pub use load::*;
pub use record::*;
pub use store::*;
