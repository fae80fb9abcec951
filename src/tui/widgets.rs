pub mod form;
pub mod header;
pub mod modal;
pub mod portfolio;
pub mod sections;
pub mod tooltip;
