pub mod auth;
pub mod cards;
pub mod footer;
pub mod loader;
pub mod modal;
pub mod navbar;
pub mod quick_edit_event;
pub mod shell;
pub mod tabs;

pub use auth::{RequireAuth, RoleGate};
pub use cards::{CommunityCard, EventCard};
pub use footer::Footer;
pub use loader::{ErrorNotice, Loader};
pub use modal::Modal;
pub use navbar::NavBar;
pub use quick_edit_event::QuickEditEvent;
pub use shell::Shell;
pub use tabs::TabBar;
