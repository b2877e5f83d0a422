pub mod admin_dashboard;
pub mod communities;
pub mod community;
pub mod create_community;
pub mod create_event;
pub mod edit_event;
pub mod event_details;
pub mod event_registration;
pub mod events;
pub mod landing;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod student_home;
pub mod unauthorized;

pub use admin_dashboard::AdminDashboardPage;
pub use communities::CommunitiesPage;
pub use community::CommunityPage;
pub use create_community::CreateCommunityPage;
pub use create_event::CreateEventPage;
pub use edit_event::EditEventPage;
pub use event_details::EventDetailsPage;
pub use event_registration::EventRegistrationPage;
pub use events::EventsPage;
pub use landing::LandingPage;
pub use leaderboard::LeaderboardPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use student_home::StudentHomePage;
pub use unauthorized::UnauthorizedPage;
