//! Presentation: formatting, tables and dashboard view models.

pub mod format;
pub mod table;
pub mod view;

pub use format::{format_amount, format_days, format_probability};
pub use table::{Cell, CellStyle, Table};
pub use view::{ScreenView, ViewBody, admin_view, dca_view};
