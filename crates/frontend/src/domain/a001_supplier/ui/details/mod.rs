//! Supplier Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API client (fetch, create, update, delete)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)
//! - page.rs: route entry point wiring the ViewModel to router and context

mod model;
mod page;
mod view;
mod view_model;

pub use model::{ApiError, HttpSupplierApi, SupplierApi};
pub use page::SupplierDetailsPage;
pub use view::SupplierDetails;
pub use view_model::{LoadState, SupplierDetailsViewModel, LIST_PATH};
