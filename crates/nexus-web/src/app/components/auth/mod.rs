// Authentication components

pub mod require_auth;
pub mod role_gate;

pub use require_auth::RequireAuth;
pub use role_gate::RoleGate;
