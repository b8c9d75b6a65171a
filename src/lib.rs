//! dot3 client: terminal client for the dot3 document filtering and
//! retrieval service.
//!
//! - Filter word management and message filtering
//! - PDF upload for indexing, semantic query over indexed chunks
//! - Cookie-based login sessions with agents and permission levels
//!
//! [`dashboard::Dashboard`] is the façade: one handler per UI action,
//! driving a typed [`view::ViewState`] through the [`client::Api`] seam.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod types;
pub mod util;
pub mod view;

pub use config::Config;
pub use dashboard::Dashboard;
pub use types::*;
