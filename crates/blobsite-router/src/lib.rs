//! Routing decisions for Blobsite.
//!
//! This crate is the decision core of the system, deliberately free of HTTP
//! types: it turns a normalized request path into a [`RouteDecision`] by
//! consulting a [`ContainerClient`], and nothing else. The HTTP layer maps
//! decisions to responses and does the logging; identical inputs against an
//! unchanged container always yield identical decisions.
//!
//! Pipeline per request:
//!
//! 1. [`gate::authorize`] — reject everyone but the one configured identity
//!    before any container traffic happens.
//! 2. [`normalize`] — canonicalize the raw path fragment.
//! 3. [`BlobRouter::route`] — primary fetch, then (only on a not-found) a
//!    metadata probe for a nested index document.
//!
//! [`ContainerClient`]: blobsite_store::ContainerClient

pub mod decision;
pub mod gate;
pub mod normalize;
pub mod router;

pub use decision::RouteDecision;
pub use gate::{authorize, Identity};
pub use normalize::normalize;
pub use router::BlobRouter;
