use chrono::{DateTime, Utc};
use interfaces_github_search::models::{Owner, Repository};
use serde::{Deserialize, Serialize};

/// Reduced copy of a repository kept after the user bookmarks it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub language: Option<String>,
    pub bookmarked_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_repository(repo: &Repository, bookmarked_at: DateTime<Utc>) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            owner: repo.owner.login.clone(),
            description: repo.description.clone(),
            html_url: repo.html_url.clone(),
            stargazers_count: repo.stargazers_count,
            language: repo.language.clone(),
            bookmarked_at,
        }
    }

    /// Expands back to a repository record for detail views. Counts the
    /// favorite does not keep are zero.
    pub fn as_repository(&self) -> Repository {
        Repository {
            id: self.id,
            name: self.name.clone(),
            full_name: format!("{}/{}", self.owner, self.name),
            description: self.description.clone(),
            html_url: self.html_url.clone(),
            stargazers_count: self.stargazers_count,
            forks_count: 0,
            watchers_count: 0,
            language: self.language.clone(),
            size: 0,
            created_at: self.bookmarked_at,
            updated_at: self.bookmarked_at,
            pushed_at: self.bookmarked_at,
            owner: Owner {
                login: self.owner.clone(),
                avatar_url: format!("https://github.com/{}.png", self.owner),
                html_url: format!("https://github.com/{}", self.owner),
            },
            topics: Vec::new(),
            license: None,
            open_issues_count: 0,
            default_branch: "main".to_string(),
        }
    }
}

/// Favorites in insertion order, unique by repository id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<Favorite>);

impl Favorites {
    pub fn new(items: Vec<Favorite>) -> Self {
        // Stored files written by hand may repeat an id; first one wins
        let mut unique: Vec<Favorite> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|f| f.id == item.id) {
                unique.push(item);
            }
        }
        Self(unique)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.0.iter().any(|f| f.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Favorite> {
        self.0.iter().find(|f| f.id == id)
    }

    /// Adds the repository at the end, or removes it if already present.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, repo: &Repository, now: DateTime<Utc>) -> bool {
        if self.remove(repo.id) {
            false
        } else {
            self.0.push(Favorite::from_repository(repo, now));
            true
        }
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.0.len();
        self.0.retain(|f| f.id != id);
        self.0.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Favorite] {
        &self.0
    }
}
