// UI Components
pub mod command_bar;
pub mod file_list;
pub mod option_dialog;
pub mod queue_view;
pub mod status_bar;
pub mod title_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use file_list::FileList;
pub use option_dialog::OptionDialog;
pub use queue_view::QueueView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use warning::WarningScreen;
