//! Translation between an [`lpbridge_model::LpModel`] and a remote
//! bounded-variable simplex service.

pub mod bounds;
pub mod config;
pub mod request;
pub mod response;
pub mod session;
pub mod transport;
pub mod wire;

pub use bounds::{BoundKind, Bounds, UnusedBound, map_bounds};
pub use config::SessionConfig;
pub use request::{build_request, build_request_at, constraint_name};
pub use response::{interpret, interpret_response};
pub use session::{PendingSolve, Session, SubmitError};
pub use transport::{HttpTransport, Transport, TransportError};
pub use wire::{WireRequest, WireResponse};
