//! # fakeapi-domain
//!
//! Pure domain model for the fakeapi mock backend.
//!
//! ## Responsibilities
//! - Foundational types: sequential identifiers, error conventions, timestamps
//! - Define the open [`FieldValue`](value::FieldValue) carried by every record field
//! - Define the five **record kinds**: auditors, users, companies, employees
//!   and certifications, with their wire field names
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;
pub mod value;

pub mod record;
