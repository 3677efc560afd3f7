//! Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "vercel")]
mod vercel;

#[cfg(feature = "vercel")]
pub use vercel::VercelProvider;
