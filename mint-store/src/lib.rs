//! Mint Store - Content-Addressed Storage Clients
//!
//! Clients for the content store the mint pipeline uploads to. Two
//! implementations of the `ContentStore` trait:
//!
//! - **IpfsClient**: talks to an IPFS-compatible HTTP API (`/api/v0/add`)
//!   and derives retrieval URIs from a configured gateway base
//! - **MemoryStore**: sha256-addressed in-memory map for tests and
//!   development runs
//!
//! Uploads are content-addressed: the store returns a stable path for the
//! bytes, and the retrieval URI is always `<gateway-base>/<path>`.

pub mod client;
pub mod config;
pub mod error;
pub mod memory;

pub use client::{ContentStore, IpfsClient};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
