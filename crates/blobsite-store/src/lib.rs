//! Object-store container access for Blobsite.
//!
//! A container is a flat namespace of named blobs with metadata (content
//! type and an entity tag). This crate defines how the rest of Blobsite
//! addresses and reads that namespace:
//!
//! - [`ObjectKey`] — container-relative key, never with a leading `/`
//! - [`FetchedObject`] — streamed content plus content type and entity tag
//! - [`ContainerClient`] — the fetch/probe interface the router consumes
//!
//! # Backends
//!
//! - [`MemoryContainer`] — `HashMap`-based container for tests and embedding
//! - [`BlobContainer`] — real storage via the `object_store` crate
//!   (`az://`, `s3://`, `file://`, `memory:` URLs)
//!
//! # Design Rules
//!
//! 1. "Not found" is a distinct, matchable outcome ([`ContainerError::NotFound`]),
//!    never inferred from error text.
//! 2. [`ContainerClient::probe_exists`] is metadata-only; it must not
//!    transfer blob content.
//! 3. The container is read-only from this crate's point of view; there is
//!    no write or delete surface.
//! 4. Backend failures are propagated with their code and message, never
//!    silently swallowed.

pub mod blob;
pub mod error;
pub mod key;
pub mod memory;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use blob::{BlobContainer, ContainerConfig};
pub use error::{ContainerError, ContainerResult};
pub use key::ObjectKey;
pub use memory::MemoryContainer;
pub use object::{ContentStream, FetchedObject};
pub use traits::ContainerClient;
