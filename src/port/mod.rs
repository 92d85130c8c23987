//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the search flows and the outside world:
//! the terminal on the driving side, the film catalog and the query history
//! store on the driven side.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!     ┌─────────┐    │      Application        │
//!     │Terminal ├───►│                         │
//!     │ Prompt  │    │  Domain + Port          │
//!     └─────────┘    └────────────┬────────────┘
//!                                 │
//!                 ┌───────────────┴──────────────┐
//!                 ▼                              ▼
//!          ┌─────────────┐               ┌──────────────┐
//!          │   Catalog   │               │ Record Store │
//!          │   Adapter   │               │   Adapter    │
//!          └─────────────┘               └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Prompt`] - Free-text user input
//! - [`FilmCatalog`] - Relational film catalog lookups
//! - [`RecordStore`] - Query history persistence

pub mod inbound;
pub mod outbound;

pub use inbound::prompt::Prompt;
pub use outbound::catalog::FilmCatalog;
pub use outbound::records::RecordStore;
