//! Service layer for the product catalog.
//! - `product::repository` is the storage gateway (sea-orm or in-memory).
//! - `product::service` holds the catalog operations and the not-found policy.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
