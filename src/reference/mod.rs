//! Static reference tables: manufacturer brands and EU notified bodies.
//!
//! Both tables are fixed at compile time. Lookups never fail loudly; callers
//! substitute empty values when an entry is absent.

pub mod brands;
pub mod notified_bodies;
pub mod routes;

pub use brands::{find_brand, Brand, Signatory, BRANDS};
pub use notified_bodies::{find_notified_body, NotifiedBody, NOTIFIED_BODIES};
