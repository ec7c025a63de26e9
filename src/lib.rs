pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod mock;
pub mod output;
pub mod pagination;
pub mod records;
pub mod store;

pub use controller::ListController;
pub use error::ListError;
pub use filter::{DateRange, FilterCriteria};
pub use pagination::{pagination_pages, PageState, PageToken, ResponsivePager};
pub use records::{Approvable, Decision, FieldMatch, FieldValue, FilterField, Record};
pub use store::RecordStore;

#[cfg(test)]
mod tests;
