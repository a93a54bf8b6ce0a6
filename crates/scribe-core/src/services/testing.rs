//! In-memory port implementations for service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{NewPost, NewUser, Post, PostId, User, UserId};
use crate::error::RepoError;
use crate::ports::{AuthError, PasswordService, PostRepository, UserRepository};

/// Reversible stand-in for a real hash; good enough to tell plaintext from credential.
pub struct FakePasswords;

impl PasswordService for FakePasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
    constraint_on_insert: AtomicBool,
}

impl InMemoryUsers {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Make the next insert behave like a lost race on the unique index.
    pub fn fail_next_insert_with_constraint(&self) {
        self.constraint_on_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        if self.constraint_on_insert.swap(false, Ordering::SeqCst) {
            return Err(RepoError::Constraint("user.username".to_string()));
        }
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as UserId + 1,
            username: user.username,
            password_hash: user.password_hash,
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryPosts {
    authors: Mutex<HashMap<UserId, String>>,
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPosts {
    pub fn add_author(&self, id: UserId, username: &str) {
        self.authors.lock().unwrap().insert(id, username.to_string());
    }

    /// Insert a post directly, bypassing the service.
    pub fn seed(&self, author_id: UserId, title: &str) -> PostId {
        let mut posts = self.posts.lock().unwrap();
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        posts.push(Post {
            id,
            title: title.to_string(),
            body: String::new(),
            created: Utc::now(),
            author_id,
            author_username: self.username_of(author_id),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn title_of(&self, id: PostId) -> Option<String> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title.clone())
    }

    fn username_of(&self, id: UserId) -> String {
        self.authors.lock().unwrap().get(&id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let author_username = self.username_of(post.author_id);
        let mut posts = self.posts.lock().unwrap();
        let post = Post {
            id: posts.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            title: post.title,
            body: post.body,
            created: Utc::now(),
            author_id: post.author_id,
            author_username,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, title: &str, body: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts.iter_mut().find(|p| p.id == id).ok_or(RepoError::NotFound)?;
        post.title = title.to_string();
        post.body = body.to_string();
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
