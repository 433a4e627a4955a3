//! Entity ↔ DTO mapping in the shape of a layered service.

use chrono::{DateTime, Duration, Utc};
use propmap::{map, map_all, MapAllInto, MapInto, Mappable};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Domain entity.
#[derive(Mappable, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub email_verified: bool,
    pub avatar_url: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    password_hash: String,
}

impl User {
    fn new(username: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username: username.to_string(),
            email: email.to_string(),
            first_name: None,
            last_name: None,
            role: UserRole::User,
            email_verified: false,
            avatar_url: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
            password_hash: "argon2-hash".to_string(),
        }
    }
}

/// Response DTO.
#[derive(Mappable, Debug, Clone, Default, PartialEq)]
#[mapper(default)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub email_verified: bool,
    pub avatar_url: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub password_hash: Option<String>,
}

/// Immutable summary built through its constructor.
#[derive(Mappable, Debug, Clone, PartialEq)]
#[mapper(constructor = new(id: UserId, username: String, display_name: Option<String>))]
pub struct UserSummary {
    #[mapper(readonly)]
    pub id: UserId,
    #[mapper(readonly)]
    pub username: String,
    #[mapper(readonly)]
    pub display_name: Option<String>,
}

impl UserSummary {
    pub fn new(id: UserId, username: String, display_name: Option<String>) -> Self {
        Self {
            id,
            username,
            display_name,
        }
    }
}

/// Partial update request applied onto an existing entity.
#[derive(Mappable, Debug, Clone, Default)]
#[mapper(default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

fn create_test_user(username: &str) -> User {
    let mut user = User::new(username, &format!("{username}@example.com"));
    user.first_name = Some("Test".to_string());
    user.role = UserRole::Admin;
    user.last_login_at = Some(user.created_at + Duration::minutes(5));
    user
}

#[test]
fn test_entity_to_response() {
    let user = create_test_user("testuser");
    let response: UserResponse = user.map_into().unwrap();

    assert_eq!(response.id, user.id);
    assert_eq!(response.username, "testuser");
    assert_eq!(response.email, "testuser@example.com");
    assert_eq!(response.first_name.as_deref(), Some("Test"));
    assert_eq!(response.last_name, None);
    assert_eq!(response.role, UserRole::Admin);
    assert!(!response.email_verified);
    assert_eq!(response.last_login_at, user.last_login_at);
    assert_eq!(response.created_at, user.created_at);
    // Private entity fields never leave the entity.
    assert_eq!(response.password_hash, None);
}

#[test]
fn test_entity_to_constructor_only_summary() {
    let user = create_test_user("summary");
    let summary: UserSummary = user.map_into().unwrap();
    assert_eq!(summary.id, user.id);
    assert_eq!(summary.username, "summary");
    assert_eq!(summary.display_name, None);
}

#[test]
fn test_update_request_applied_in_place() {
    let user = create_test_user("updater");
    let later = user.updated_at + Duration::hours(1);
    let request = UpdateUserRequest {
        first_name: Some("Jane".to_string()),
        last_name: None,
        avatar_url: Some("https://example.com/a.png".to_string()),
        updated_at: later,
    };

    let updated = map(Some(&request), Some(user.clone())).unwrap().unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.first_name.as_deref(), Some("Jane"));
    // Option fields are copied as-is, including None.
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.avatar_url.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(updated.updated_at, later);
    assert_eq!(updated.password_hash, "argon2-hash");
}

#[test]
fn test_entity_without_constructor_needs_target() {
    let request = UpdateUserRequest::default();
    let err = map::<UpdateUserRequest, User>(Some(&request), None).unwrap_err();
    assert_eq!(err.error_code(), "CONSTRUCTOR_NOT_FOUND");
}

#[test]
fn test_user_list_to_responses() {
    let users: Vec<User> = (0..5).map(|i| create_test_user(&format!("user{i}"))).collect();

    let responses: Vec<UserResponse> = users.map_all_into().unwrap();
    assert_eq!(responses.len(), 5);
    for (user, response) in users.iter().zip(&responses) {
        assert_eq!(response.id, user.id);
        assert_eq!(response.username, user.username);
    }

    let optional = map_all(
        Some(users.iter().map(Some).chain(std::iter::once(None))),
        None::<Vec<Option<UserSummary>>>,
    )
    .unwrap();
    assert_eq!(optional.len(), 6);
    assert!(optional[..5].iter().all(Option::is_some));
    assert!(optional[5].is_none());
}
