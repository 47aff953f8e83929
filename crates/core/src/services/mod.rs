pub mod expense_service;
pub mod format_service;
pub mod projection_service;
