//! Profiles, statistics and the leaderboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{auth::Role, community::Community, events::Event, null_as_default};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub earned_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub name: String,
    #[serde(default)]
    pub earned_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub college_name: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub communities_joined: Vec<Community>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certificates: Vec<Certificate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
}

impl UserSummary {
    /// First letter of the name, used as an avatar.
    pub fn initial(&self) -> char {
        initial(&self.name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileEvents {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ongoing: Vec<Event>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upcoming: Vec<Event>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: Vec<Event>,
}

/// Body of `GET /users/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user: UserSummary,
    #[serde(default)]
    pub events: ProfileEvents,
}

/// One entry of `GET /users/activity`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub community: Option<String>,
}

impl Activity {
    /// Community name when present, otherwise the activity type.
    pub fn context(&self) -> &str {
        self.community.as_deref().filter(|c| !c.is_empty()).unwrap_or(&self.kind)
    }
}

/// Body of `GET /users/admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub community_members: u64,
    #[serde(default)]
    pub total_communities: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub events_attended: u64,
    #[serde(default)]
    pub certificates: u64,
    #[serde(default)]
    pub badges: u64,
}

impl LeaderboardEntry {
    pub fn initial(&self) -> char {
        initial(&self.name)
    }
}

/// Ordering offered by the leaderboard filter row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardSort {
    /// Server order (by points)
    #[default]
    All,
    Events,
    Certificates,
}

impl LeaderboardSort {
    pub const ALL: [LeaderboardSort; 3] = [LeaderboardSort::All, LeaderboardSort::Events, LeaderboardSort::Certificates];

    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardSort::All => "All Students",
            LeaderboardSort::Events => "By Events",
            LeaderboardSort::Certificates => "By Certificates",
        }
    }

    /// Stable sort, so ties keep the server's ranking.
    pub fn apply(&self, entries: &mut [LeaderboardEntry]) {
        match self {
            LeaderboardSort::All => {}
            LeaderboardSort::Events => entries.sort_by(|a, b| b.events_attended.cmp(&a.events_attended)),
            LeaderboardSort::Certificates => entries.sort_by(|a, b| b.certificates.cmp(&a.certificates)),
        }
    }
}

/// Label for a 1-based leaderboard position.
pub fn rank_label(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

fn initial(name: &str) -> char {
    name.trim().chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?')
}

/// Tabs of the profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileTab {
    Events,
    Analytics,
    Certificates,
    Badges,
    Activity,
    Communities,
}

impl ProfileTab {
    /// Tabs shown to the given role, in display order.
    pub fn for_role(role: Option<Role>) -> &'static [ProfileTab] {
        static ADMIN: [ProfileTab; 4] = [
            ProfileTab::Events,
            ProfileTab::Analytics,
            ProfileTab::Activity,
            ProfileTab::Communities,
        ];
        static MEMBER: [ProfileTab; 5] = [
            ProfileTab::Events,
            ProfileTab::Certificates,
            ProfileTab::Badges,
            ProfileTab::Activity,
            ProfileTab::Communities,
        ];
        if role.is_some_and(|r| r.is_admin()) {
            return &ADMIN;
        }
        &MEMBER
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Events => "events",
            ProfileTab::Analytics => "analytics",
            ProfileTab::Certificates => "certificates",
            ProfileTab::Badges => "badges",
            ProfileTab::Activity => "activity",
            ProfileTab::Communities => "communities",
        }
    }
}

/// Tabs of the admin dashboard. `Overview` is active on mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Overview,
    Communities,
    CreateCommunity,
    Analytics,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Communities,
        AdminTab::CreateCommunity,
        AdminTab::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Communities => "communities",
            AdminTab::CreateCommunity => "create-community",
            AdminTab::Analytics => "analytics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, events_attended: u64, certificates: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            events_attended,
            certificates,
            ..Default::default()
        }
    }

    #[test]
    fn leaderboard_sorts_keep_ties_in_server_order() {
        let server = vec![entry("ana", 2, 5), entry("bo", 7, 1), entry("cy", 2, 5)];

        let mut all = server.clone();
        LeaderboardSort::All.apply(&mut all);
        assert_eq!(all, server);

        let mut by_events = server.clone();
        LeaderboardSort::Events.apply(&mut by_events);
        let names: Vec<_> = by_events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["bo", "ana", "cy"]);

        let mut by_certs = server;
        LeaderboardSort::Certificates.apply(&mut by_certs);
        let names: Vec<_> = by_certs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["ana", "cy", "bo"]);
    }

    #[test]
    fn rank_labels() {
        assert_eq!(rank_label(1), "🥇");
        assert_eq!(rank_label(2), "🥈");
        assert_eq!(rank_label(3), "🥉");
        assert_eq!(rank_label(4), "#4");
        assert_eq!(rank_label(12), "#12");
    }

    #[test]
    fn profile_tabs_depend_on_role() {
        let admin = ProfileTab::for_role(Some(Role::Admin));
        assert!(admin.contains(&ProfileTab::Analytics));
        assert!(!admin.contains(&ProfileTab::Badges));

        let student = ProfileTab::for_role(Some(Role::Student));
        assert_eq!(student.len(), 5);
        assert!(student.contains(&ProfileTab::Certificates));
        assert!(!student.contains(&ProfileTab::Analytics));

        assert_eq!(ProfileTab::for_role(None), student);
        assert_eq!(admin[0], ProfileTab::Events);
    }

    #[test]
    fn admin_dashboard_defaults_to_overview() {
        assert_eq!(AdminTab::default(), AdminTab::Overview);
        assert_eq!(AdminTab::ALL[0], AdminTab::default());
    }

    #[test]
    fn profile_parses_with_missing_collections() {
        let json = r#"{"user": {"name": "ada", "email": "ada@example.com", "badges": null}}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user.initial(), 'A');
        assert!(profile.user.badges.is_empty());
        assert!(profile.events.upcoming.is_empty());
    }

    #[test]
    fn activity_context_prefers_community() {
        let mut activity = Activity {
            kind: "registration".into(),
            ..Default::default()
        };
        assert_eq!(activity.context(), "registration");
        activity.community = Some("Robotics".into());
        assert_eq!(activity.context(), "Robotics");
    }

    #[test]
    fn stats_default_missing_counters() {
        let stats: AdminStats = serde_json::from_str(r#"{"totalStudents": 120}"#).unwrap();
        assert_eq!(stats.total_students, 120);
        assert_eq!(stats.total_communities, 0);
    }
}
