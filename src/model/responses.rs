/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::{Organization, Repository, Tag, deserialize_null_as_default};
use serde::{Deserialize, Serialize};

/// Body returned by `POST /users/login/`
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LoginResponse {
    /// `JWT` token, empty when the server did not issue one
    pub token: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .finish()
    }
}

/// Paginated list envelope
///
/// `results` keeps the order the server sent. `next` and `previous` are the
/// absolute URLs of the neighbouring pages, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Total number of items across all pages
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub count: u64,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Items of this page, `null` decodes as empty
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Returns the number of items in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether the server reported a further page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns an iterator over the items of this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Organizations of the logged in user
pub type OrganizationList = Page<Organization>;
/// Repositories of a namespace
pub type RepositoryList = Page<Repository>;
/// Tags of a repository
pub type TagList = Page<Tag>;
