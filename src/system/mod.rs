// System Layer
pub mod catalog;
pub mod logging;
pub mod settings;

pub use catalog::FsCatalog;
pub use settings::Settings;
