// Data Models
pub mod printable;
pub mod printer_panel;
pub mod view_model;

pub use printable::{PrintableItem, Printer};
pub use printer_panel::PrinterPanel;
pub use view_model::DialogView;
