pub mod context;
pub mod loader;

pub use context::DataContext;
