mod guide;
mod index;
#[path = "404.rs"]
mod not_found;

pub use guide::Guide;
pub use index::Index;
pub use not_found::NotFound;
