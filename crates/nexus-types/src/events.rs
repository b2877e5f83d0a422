//! Events, their prizes and custom registration forms.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    null_as_default,
    validation::{self, ValidationError},
};

/// Themes offered by the event forms and the events filter.
pub const THEMES: [&str; 11] = [
    "Artificial Intelligence",
    "Web Development",
    "Data Science",
    "Cybersecurity",
    "Mobile Development",
    "Cloud Computing",
    "Blockchain",
    "Machine Learning",
    "DevOps",
    "UI/UX Design",
    "Other",
];

/// Most prizes an event can award.
pub const MAX_PRIZES: usize = 3;

/// `datetime-local` input format used by the event forms.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub college_name: String,
}

/// The `communityId` field is either a bare id or the populated community.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommunityRef {
    Populated(CommunitySummary),
    Id(String),
}

impl CommunityRef {
    pub fn id(&self) -> &str {
        match self {
            CommunityRef::Populated(c) => &c.id,
            CommunityRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CommunityRef::Populated(c) => Some(c.name.as_str()),
            CommunityRef::Id(_) => None,
        }
    }

    pub fn college_name(&self) -> Option<&str> {
        match self {
            CommunityRef::Populated(c) => Some(c.college_name.as_str()),
            CommunityRef::Id(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub position: u32,
    pub amount: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Number,
    Select,
    Textarea,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Select,
        FieldType::Textarea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Textarea => "textarea",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.as_str() == value).unwrap_or_default()
    }
}

/// Extra question an organiser adds to an event's registration form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationField {
    pub field_name: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: String,
}

impl RegistrationField {
    /// Options as typed in the organiser's comma separated input.
    pub fn options_text(&self) -> String {
        self.options.join(", ")
    }

    pub fn set_options_text(&mut self, text: &str) {
        self.options = text.split(',').map(str::trim).filter(|o| !o.is_empty()).map(str::to_string).collect();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub community_id: Option<CommunityRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prizes: Vec<Prize>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_fields: Vec<RegistrationField>,
    #[serde(default)]
    pub attendance_provided: bool,
    #[serde(default)]
    pub certificates_provided: bool,
}

/// Where an event sits relative to a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

impl Event {
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        if self.end_date.is_some_and(|end| now > end) {
            return EventStatus::Completed;
        }
        if self.start_date.is_some_and(|start| now >= start) {
            return EventStatus::Ongoing;
        }
        EventStatus::Upcoming
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn community_id(&self) -> Option<&str> {
        self.community_id.as_ref().map(CommunityRef::id)
    }

    /// Registration closes once the deadline has passed.
    pub fn registration_open_at(&self, now: DateTime<Utc>) -> bool {
        match self.registration_deadline {
            Some(deadline) => now <= deadline,
            None => self.status_at(now) == EventStatus::Upcoming,
        }
    }
}

/// Render a timestamp for a `datetime-local` input.
pub fn to_datetime_local(value: DateTime<Utc>) -> String {
    value.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Parse a `datetime-local` input value. Seconds are optional.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Filters for `GET /events`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventSearch {
    pub search: String,
    pub theme: String,
}

impl EventSearch {
    /// Query parameters, leaving out blank filters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if !self.theme.is_empty() {
            pairs.push(("theme", self.theme.clone()));
        }
        pairs
    }
}

/// Ordered prize list with positions kept contiguous from 1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeList(Vec<Prize>);

impl PrizeList {
    pub fn as_slice(&self) -> &[Prize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_PRIZES
    }

    /// Append the next position with a zero amount. No-op when full.
    pub fn add(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        let position = self.0.len() as u32 + 1;
        self.0.push(Prize { position, amount: 0.0 });
        true
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.0.len() {
            return;
        }
        self.0.remove(index);
        for (i, prize) in self.0.iter_mut().enumerate() {
            prize.position = i as u32 + 1;
        }
    }

    pub fn set_amount(&mut self, index: usize, amount: f64) {
        if let Some(prize) = self.0.get_mut(index) {
            prize.amount = amount;
        }
    }
}

/// State of the create-event form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub registration_deadline: String,
    pub location: String,
    pub attendance_provided: bool,
    pub certificates_provided: bool,
    pub theme: String,
    pub description: String,
    pub prizes: PrizeList,
    pub registration_fields: Vec<RegistrationField>,
}

impl EventDraft {
    pub fn add_registration_field(&mut self) {
        self.registration_fields.push(RegistrationField::default());
    }

    /// Edit the field at `index`; out of range indices are ignored.
    pub fn update_field(&mut self, index: usize, edit: impl FnOnce(&mut RegistrationField)) {
        if let Some(field) = self.registration_fields.get_mut(index) {
            edit(field);
        }
    }

    pub fn remove_registration_field(&mut self, index: usize) {
        if index < self.registration_fields.len() {
            self.registration_fields.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Event name"));
        }
        validation::validate_event_schedule(&self.start_date, &self.end_date, &self.registration_deadline)?;
        validation::validate_prizes(self.prizes.as_slice())?;
        if self.registration_fields.iter().any(|f| f.field_name.trim().is_empty()) {
            return Err(ValidationError::Required("Registration field name"));
        }
        Ok(())
    }

    /// Validate and build the `POST /events` payload.
    pub fn to_request(&self, community_id: &str) -> Result<CreateEventRequest, ValidationError> {
        self.validate()?;
        Ok(CreateEventRequest {
            name: self.name.trim().to_string(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            registration_deadline: self.registration_deadline.clone(),
            location: self.location.clone(),
            attendance_provided: self.attendance_provided,
            certificates_provided: self.certificates_provided,
            theme: self.theme.clone(),
            description: self.description.clone(),
            prizes: self.prizes.as_slice().to_vec(),
            registration_fields: self.registration_fields.clone(),
            community_id: community_id.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Payload of `POST /events`. Dates are sent as entered.
pub struct CreateEventRequest {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub registration_deadline: String,
    pub location: String,
    pub attendance_provided: bool,
    pub certificates_provided: bool,
    pub theme: String,
    pub description: String,
    pub prizes: Vec<Prize>,
    pub registration_fields: Vec<RegistrationField>,
    pub community_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Payload of `PUT /events/:id` used by the quick edit form.
pub struct UpdateEventRequest {
    pub name: String,
    pub location: String,
    pub registration_deadline: String,
    pub description: String,
}

impl UpdateEventRequest {
    /// Prefill the form from an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            location: event.location.clone(),
            registration_deadline: event.registration_deadline.map(to_datetime_local).unwrap_or_default(),
            description: event.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Event name"));
        }
        if parse_datetime_local(&self.registration_deadline).is_none() {
            return Err(ValidationError::InvalidDate("Registration deadline"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Payload of `POST /events/:id/register`.
pub struct EventRegistration {
    /// Answers keyed by registration field name.
    pub responses: BTreeMap<String, String>,
}

impl EventRegistration {
    pub fn set(&mut self, field: &str, value: String) {
        self.responses.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> &str {
        self.responses.get(field).map(String::as_str).unwrap_or_default()
    }

    /// Every required field must have a non-blank answer.
    pub fn validate(&self, fields: &[RegistrationField]) -> Result<(), ValidationError> {
        for field in fields.iter().filter(|f| f.is_required) {
            if self.get(&field.field_name).trim().is_empty() {
                return Err(ValidationError::MissingAnswer(field.field_name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn registration_fields_are_edited_in_place() {
        let mut draft = EventDraft::default();
        draft.add_registration_field();
        draft.add_registration_field();
        draft.update_field(1, |f| f.field_name = "Branch".into());
        draft.update_field(5, |f| f.field_name = "ignored".into());
        draft.remove_registration_field(0);
        assert_eq!(draft.registration_fields.len(), 1);
        assert_eq!(draft.registration_fields[0].field_name, "Branch");
    }

    #[test]
    fn select_options_parse_from_text() {
        let mut field = RegistrationField::default();
        field.set_options_text(" CSE, ECE ,, Mech ");
        assert_eq!(field.options, ["CSE", "ECE", "Mech"]);
        assert_eq!(field.options_text(), "CSE, ECE, Mech");
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn event(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id: "e1".into(),
            name: "Hack".into(),
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    #[test]
    fn status_follows_start_and_end() {
        let e = event(at(2026, 5, 1, 10), at(2026, 5, 2, 10));
        assert_eq!(e.status_at(at(2026, 4, 30, 0)), EventStatus::Upcoming);
        assert_eq!(e.status_at(at(2026, 5, 1, 10)), EventStatus::Ongoing);
        assert_eq!(e.status_at(at(2026, 5, 2, 10)), EventStatus::Ongoing);
        assert_eq!(e.status_at(at(2026, 5, 2, 11)), EventStatus::Completed);
    }

    #[test]
    fn event_without_dates_is_upcoming() {
        let e = Event::default();
        assert_eq!(e.status_at(at(2026, 1, 1, 0)), EventStatus::Upcoming);
    }

    #[test]
    fn event_parses_populated_community() {
        let json = r#"{
            "_id": "e1", "name": "Hack",
            "startDate": "2026-05-01T10:00:00.000Z",
            "communityId": {"_id": "c1", "name": "Robotics", "collegeName": "MIT"},
            "participants": ["u1", "u2"],
            "prizes": [{"position": 1, "amount": 500}]
        }"#;
        let e: Event = serde_json::from_str(json).unwrap();
        assert_eq!(e.community_id(), Some("c1"));
        assert_eq!(e.community_id.as_ref().and_then(CommunityRef::name), Some("Robotics"));
        assert_eq!(e.participant_count(), 2);
        assert_eq!(e.prizes[0].amount, 500.0);
        assert_eq!(e.start_date, Some(at(2026, 5, 1, 10)));
    }

    #[test]
    fn event_parses_bare_community_id() {
        let json = r#"{"_id": "e1", "name": "Hack", "communityId": "c9"}"#;
        let e: Event = serde_json::from_str(json).unwrap();
        assert_eq!(e.community_id(), Some("c9"));
        assert_eq!(e.community_id.as_ref().and_then(CommunityRef::name), None);
    }

    #[test]
    fn prize_list_caps_and_renumbers() {
        let mut prizes = PrizeList::default();
        assert!(prizes.add());
        assert!(prizes.add());
        assert!(prizes.add());
        assert!(!prizes.add());
        assert_eq!(prizes.len(), MAX_PRIZES);

        prizes.set_amount(0, 300.0);
        prizes.set_amount(2, 100.0);
        prizes.remove(1);
        let positions: Vec<u32> = prizes.as_slice().iter().map(|p| p.position).collect();
        assert_eq!(positions, [1, 2]);
        assert_eq!(prizes.as_slice()[1].amount, 100.0);

        prizes.remove(7);
        assert_eq!(prizes.len(), 2);
    }

    #[test]
    fn search_skips_blank_filters() {
        assert!(EventSearch::default().query_pairs().is_empty());
        let search = EventSearch {
            search: "  ai ".into(),
            theme: "DevOps".into(),
        };
        assert_eq!(
            search.query_pairs(),
            vec![("search", "ai".to_string()), ("theme", "DevOps".to_string())]
        );
    }

    #[test]
    fn update_request_prefills_deadline_for_input() {
        let e = Event {
            registration_deadline: Some(at(2026, 4, 20, 18)),
            ..event(at(2026, 5, 1, 10), at(2026, 5, 2, 10))
        };
        let request = UpdateEventRequest::from_event(&e);
        assert_eq!(request.registration_deadline, "2026-04-20T18:00");
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn registration_requires_answers_for_required_fields() {
        let fields = vec![
            RegistrationField {
                field_name: "Team".into(),
                is_required: true,
                ..Default::default()
            },
            RegistrationField {
                field_name: "Notes".into(),
                ..Default::default()
            },
        ];
        let mut registration = EventRegistration::default();
        assert_eq!(
            registration.validate(&fields),
            Err(ValidationError::MissingAnswer("Team".into()))
        );
        registration.set("Team", "Rustaceans".into());
        assert_eq!(registration.validate(&fields), Ok(()));
    }

    #[test]
    fn draft_builds_request_with_community() {
        let mut draft = EventDraft {
            name: "Hack".into(),
            start_date: "2026-05-01T10:00".into(),
            end_date: "2026-05-02T10:00".into(),
            registration_deadline: "2026-04-25T10:00".into(),
            ..Default::default()
        };
        draft.prizes.add();
        draft.prizes.set_amount(0, 100.0);
        let request = draft.to_request("c1").unwrap();
        assert_eq!(request.community_id, "c1");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["registrationDeadline"], "2026-04-25T10:00");
        assert_eq!(value["prizes"][0]["position"], 1);
    }
}
