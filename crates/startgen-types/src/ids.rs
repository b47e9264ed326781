//! Stable logical identifiers for catalog entries.
//!
//! A logical id is what callers request; the catalog maps it to a coordinate.

// Requestable starters
pub const DEP_WEB: &str = "web";
pub const DEP_DATA_REDIS: &str = "data-redis";
pub const DEP_DATA_REDIS_REACTIVE: &str = "data-redis-reactive";
pub const DEP_DATA_JPA: &str = "data-jpa";
pub const DEP_JDBC: &str = "jdbc";

// Session marker. Requesting it produces no starter; the session customizer
// decides which session artifact(s) it becomes. Its own catalog entry is the
// legacy generic artifact.
pub const DEP_SESSION: &str = "session";

// Session artifacts selected by the customizer
pub const DEP_SESSION_CORE: &str = "session-core";
pub const DEP_SESSION_DATA_REDIS: &str = "session-data-redis";
pub const DEP_SESSION_JDBC: &str = "session-jdbc";

// Implicit starters added by the engine
pub const DEP_ROOT_STARTER: &str = "root";
pub const DEP_TEST_STARTER: &str = "test";
