//! Communities and everything that hangs off one: chat, queries and
//! announcements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{auth::Role, events::Event, null_as_default};

/// Community category offered by the create forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Science,
    Arts,
    Sports,
    Business,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Science,
        Category::Arts,
        Category::Sports,
        Category::Business,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Science => "science",
            Category::Arts => "arts",
            Category::Sports => "sports",
            Category::Business => "business",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Science => "Science",
            Category::Arts => "Arts",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::Other => "Other",
        }
    }

    /// Parse a `<select>` value; anything unrecognised maps to `Other`.
    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|c| c.as_str() == value).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Populated reference to the user behind a message, query or announcement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl Author {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(Role::Admin.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    #[serde(default)]
    pub total_members: u64,
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub pending_queries: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub college_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Member references; only the count is displayed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub stats: Option<CommunityStats>,
}

impl Community {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Announcements with pinned ones first, otherwise in server order.
    pub fn sorted_announcements(&self) -> Vec<&Announcement> {
        let mut sorted: Vec<&Announcement> = self.announcements.iter().collect();
        sorted.sort_by_key(|a| !a.pinned);
        sorted
    }
}

/// Body of `GET /communities/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDetail {
    pub community: Community,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chat_messages: Vec<ChatMessage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: Vec<Query>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl ChatMessage {
    /// Display name of the sender, `"Unknown"` when the author was not populated.
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("Unknown", |a| a.name.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub created_by: Option<Author>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Kind of support query a member can raise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    #[default]
    General,
    Certificate,
    Registration,
    Attendance,
    #[serde(other)]
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 5] = [
        IssueType::General,
        IssueType::Certificate,
        IssueType::Registration,
        IssueType::Attendance,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::General => "general",
            IssueType::Certificate => "certificate",
            IssueType::Registration => "registration",
            IssueType::Attendance => "attendance",
            IssueType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::General => "General",
            IssueType::Certificate => "Certificate",
            IssueType::Registration => "Registration",
            IssueType::Attendance => "Attendance",
            IssueType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.as_str() == value).unwrap_or(IssueType::Other)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub issue_type: IssueType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub date_created: Option<chrono::DateTime<chrono::Utc>>,
}

impl Query {
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Payload of `POST /communities`.
pub struct CreateCommunityRequest {
    pub name: String,
    pub college_name: String,
    pub description: String,
    pub category: Category,
}

impl CreateCommunityRequest {
    pub fn validate(&self) -> Result<(), crate::validation::ValidationError> {
        use crate::validation::ValidationError;
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Community name"));
        }
        if self.college_name.trim().is_empty() {
            return Err(ValidationError::Required("College name"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Payload of `POST /communities/:id/chat`.
pub struct ChatPostRequest {
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Payload of `POST /communities/:id/announcements`.
pub struct AnnouncementRequest {
    pub title: String,
    pub content: String,
    pub pinned: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Payload of `POST /queries`.
pub struct CreateQueryRequest {
    pub community_id: String,
    pub issue_type: IssueType,
    pub description: String,
}

/// Tabs of the community page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Channel {
    #[default]
    Events,
    Chat,
    Queries,
    Announcements,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Events, Channel::Chat, Channel::Queries, Channel::Announcements];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Events => "events",
            Channel::Chat => "chat",
            Channel::Queries => "queries",
            Channel::Announcements => "announcements",
        }
    }

    /// Channels whose composer is reserved for administrators.
    pub fn is_admin_only(&self) -> bool {
        matches!(self, Channel::Announcements)
    }

    pub fn can_write(&self, role: Option<Role>) -> bool {
        if self.is_admin_only() {
            role.is_some_and(|r| r.is_admin())
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_author_name_falls_back() {
        let message: ChatMessage = serde_json::from_str(r#"{"_id":"m1","message":"hi"}"#).unwrap();
        assert_eq!(message.author_name(), "Unknown");
        let message: ChatMessage =
            serde_json::from_str(r#"{"_id":"m2","userId":{"_id":"u1","name":"Ada"},"message":"hi"}"#).unwrap();
        assert_eq!(message.author_name(), "Ada");
    }

    #[test]
    fn community_detail_tolerates_sparse_payloads() {
        let json = r#"{
            "community": {"_id": "c1", "name": "Robotics", "members": null, "category": "gardening"},
            "chatMessages": [{"_id": "m1", "userId": {"name": "Ada", "role": "admin"}, "message": "hi"}]
        }"#;
        let detail: CommunityDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.community.member_count(), 0);
        assert_eq!(detail.community.category, Category::Other);
        assert!(detail.queries.is_empty());
        let author = detail.chat_messages[0].author.as_ref().unwrap();
        assert!(author.is_admin());
    }

    #[test]
    fn announcements_are_written_by_admins_only() {
        assert!(!Channel::Announcements.can_write(None));
        assert!(!Channel::Announcements.can_write(Some(Role::Student)));
        assert!(Channel::Announcements.can_write(Some(Role::Admin)));
        for channel in [Channel::Events, Channel::Chat, Channel::Queries] {
            assert!(channel.can_write(Some(Role::User)));
        }
    }

    #[test]
    fn pinned_announcements_sort_first() {
        let community = Community {
            announcements: vec![
                Announcement {
                    title: "a".into(),
                    ..Default::default()
                },
                Announcement {
                    title: "b".into(),
                    pinned: true,
                    ..Default::default()
                },
                Announcement {
                    title: "c".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let titles: Vec<&str> = community.sorted_announcements().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["b", "a", "c"]);
    }

    #[test]
    fn query_request_uses_wire_names() {
        let request = CreateQueryRequest {
            community_id: "c1".into(),
            issue_type: IssueType::Attendance,
            description: "missing".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["communityId"], "c1");
        assert_eq!(value["issueType"], "attendance");
    }

    #[test]
    fn select_values_round_to_known_variants() {
        assert_eq!(Category::from_value("arts"), Category::Arts);
        assert_eq!(Category::from_value("unknown"), Category::Other);
        assert_eq!(IssueType::from_value("certificate"), IssueType::Certificate);
    }
}
