pub mod contact;
pub mod page;
pub mod portfolio;
pub mod projects;
