// Session ownership and the route access rules built on it

pub mod context;
pub mod guard;
pub mod session;

pub use context::{use_session, use_session_provider, SessionContext};
pub use guard::{Access, RouteAccess};
pub use session::SessionStore;
