// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutManager, LayoutMode};

// Re-export components
pub use components::{
    CommandBar, FileList, OptionDialog, QueueView, StatusBar, TitleBar, WarningScreen,
};

pub use theme::{Theme, ThemeManager};
