//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON (`_id`, `isAdmin`, ...). List
//! responses and entities default missing fields so a partially populated
//! document still decodes; the server remains the system of record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in principal, persisted verbatim under `blog_auth_vue`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentUser {
    pub email: String,
    /// Sole authorization signal for the admin routes.
    pub is_admin: bool,
    /// Avatar image URL.
    pub profile_picture: String,
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Author reference embedded in a post.
///
/// Every field is optional: the API may populate the author object, send only
/// its id, or omit it entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub profile_picture: Option<String>,
    pub username: Option<String>,
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// Structurally optional author document as it arrives on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorSource {
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub profile_picture: Option<String>,
    pub username: Option<String>,
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

impl User {
    /// Build an author reference field by field, leaving every field unset
    /// when `source` is absent.
    #[must_use]
    pub fn from_source(source: Option<&AuthorSource>) -> Self {
        let Some(source) = source else {
            return Self::default();
        };
        Self {
            email: source.email.clone(),
            is_admin: source.is_admin,
            profile_picture: source.profile_picture.clone(),
            username: source.username.clone(),
            id: source.id.clone(),
        }
    }

    /// Name shown in bylines.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("anonymous")
    }
}

impl From<&CurrentUser> for User {
    fn from(user: &CurrentUser) -> Self {
        Self {
            email: Some(user.email.clone()),
            is_admin: Some(user.is_admin),
            profile_picture: Some(user.profile_picture.clone()),
            username: Some(user.username.clone()),
            id: Some(user.id.clone()),
        }
    }
}

/// Accepts a populated author object, a bare author id, or nothing.
fn deserialize_author<'de, D>(deserializer: D) -> Result<User, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AuthorWire {
        Populated(AuthorSource),
        Id(String),
    }

    Ok(match Option::<AuthorWire>::deserialize(deserializer)? {
        Some(AuthorWire::Populated(source)) => User::from_source(Some(&source)),
        Some(AuthorWire::Id(id)) => User { id: Some(id), ..User::default() },
        None => User::from_source(None),
    })
}

/// A blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Blog {
    pub title: String,
    pub subtitle: String,
    /// Comma-separated tag list, as entered by the author.
    pub tags: String,
    /// Cover image URL.
    pub image: String,
    pub created_at: String,
    /// Publication status (`draft`, `published`, ...).
    pub status: String,
    /// Serialized editor document.
    pub content: String,
    pub category: String,
    /// Unique human-readable identifier used in `/postdetail/:slug`.
    pub slug: String,
    #[serde(rename = "userId", deserialize_with = "deserialize_author")]
    pub user: User,
    #[serde(rename = "_id")]
    pub id: String,
}

impl Blog {
    /// Individual tags, trimmed, empty entries dropped.
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
    }

    /// Link to the public detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/postdetail/{}", self.slug)
    }
}

/// A comment attached to a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub post_id: String,
    pub user_id: String,
    /// Ids of users who liked the comment.
    pub likes: Vec<String>,
    pub number_of_likes: u32,
    pub created_at: String,
}

impl Comment {
    #[must_use]
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

/// `GET /post/getposts` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostList {
    pub posts: Vec<Blog>,
    pub total_posts: u64,
    pub last_month_posts: u64,
}

/// `GET /comment/getcomments` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentList {
    pub comments: Vec<Comment>,
    pub total_comments: u64,
    pub last_month_comments: u64,
}

/// `GET /user/getusers` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserList {
    pub users: Vec<CurrentUser>,
    pub total_users: u64,
    pub last_month_users: u64,
}

/// `POST /auth/signin` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful sign-in: the principal plus the API token, when issued.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionPayload {
    #[serde(flatten)]
    pub user: CurrentUser,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of create/update post calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: String,
    pub subtitle: String,
    pub tags: String,
    pub image: String,
    pub status: String,
    pub content: String,
    pub category: String,
}

impl From<&Blog> for PostPayload {
    fn from(post: &Blog) -> Self {
        Self {
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            tags: post.tags.clone(),
            image: post.image.clone(),
            status: post.status.clone(),
            content: post.content.clone(),
            category: post.category.clone(),
        }
    }
}

/// Body of `POST /comment/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub content: String,
    pub post_id: String,
    pub user_id: String,
}
