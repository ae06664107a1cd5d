//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: compact `fmt` output
//! without module targets, filtered by `RUST_LOG` when set and by the
//! configured `LOG_LEVEL` otherwise.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown, with the collection size
//! - **Entity Operations**: Create, List, Get, Update, Delete with `entity_type` and `id`
//! - **Client Calls**: one span per `InstrumentClient` call (`#[instrument]`)
//! - **HTTP Requests**: one line per request with method, status, path and request id,
//!   plus the body for POST/PUT/PATCH
//! - **Errors**: internal faults at `error`, rejected operations at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request lines and mutations
//! LOG_LEVEL=info catalog-service
//!
//! # Full payloads of every store request
//! RUST_LOG=debug catalog-service
//!
//! # Only the store actor
//! RUST_LOG=catalog_service::framework=debug catalog-service
//! ```
//!
//! **With `RUST_LOG=info`** a create looks like:
//!
//! ```text
//! INFO Created entity_type="Instrument" id=Xk29Qa size=11
//! INFO request method=POST status=201 path=/api/instruments request_id=... body={"name":"Yamaha C40",...}
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already names the source
        .compact()
        .init();
}
