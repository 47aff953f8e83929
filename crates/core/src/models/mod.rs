pub mod category;
pub mod draft;
pub mod expense;
pub mod ledger;
pub mod selection;
pub mod settings;
pub mod view;
