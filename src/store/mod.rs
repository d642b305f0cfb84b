//! In-memory user store.
//!
//! The store owns every user record for the lifetime of the process. Reads
//! borrow the current list through a read guard; registration is the only
//! writer and holds the write lock across the email check, id assignment and
//! append so two concurrent sign-ups can never claim the same email.

pub mod analytics;
pub mod leaderboard;
pub mod rewards;

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

/// Suffix appended to every derived referral code.
pub const REFERRAL_SUFFIX: &str = "2025";

/// Department assigned to self-registered users.
pub const NEW_USER_DEPARTMENT: &str = "New Intern";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: u64,
    pub monthly_donations: u64,
    pub join_date: NaiveDate,
    pub department: String,
}

/// Fields supplied by a registration request.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user already exists: {0}")]
    EmailTaken(String),
}

#[derive(Debug)]
struct Users {
    records: Vec<User>,
    next_id: u64,
}

#[derive(Debug)]
pub struct Store {
    users: RwLock<Users>,
}

impl Store {
    /// Build a store from an initial set of users.
    ///
    /// Ids handed out by [`Store::register`] continue after the highest id
    /// present, so they stay unique even if the seed has gaps.
    #[must_use]
    pub fn new(records: Vec<User>) -> Self {
        let next_id = records.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        Self {
            users: RwLock::new(Users { records, next_id }),
        }
    }

    /// Store populated with the demo users.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// Borrow every user in insertion order.
    pub async fn users(&self) -> RwLockReadGuard<'_, [User]> {
        RwLockReadGuard::map(self.users.read().await, |users| users.records.as_slice())
    }

    pub async fn find_user(&self, id: u64) -> Option<User> {
        find_user(&self.users().await, id).cloned()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        find_user_by_email(&self.users().await, email).cloned()
    }

    /// Append a new user, rejecting emails that are already registered.
    ///
    /// # Errors
    /// Returns [`StoreError::EmailTaken`] if a user with the same email exists.
    pub async fn register(&self, new_user: NewUser, join_date: NaiveDate) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if find_user_by_email(&users.records, &new_user.email).is_some() {
            return Err(StoreError::EmailTaken(new_user.email));
        }

        let user = User {
            id: users.next_id,
            referral_code: referral_code(&new_user.name),
            name: new_user.name,
            email: new_user.email,
            total_donations: 0,
            monthly_donations: 0,
            join_date,
            department: NEW_USER_DEPARTMENT.to_string(),
        };

        users.next_id += 1;
        users.records.push(user.clone());

        debug!(id = user.id, total = users.records.len(), "user registered");

        Ok(user)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

/// First user whose email matches exactly (case-sensitive).
#[must_use]
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users.iter().find(|user| user.email == email)
}

#[must_use]
pub fn find_user(users: &[User], id: u64) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}

/// Upper-cased name with all whitespace removed, followed by [`REFERRAL_SUFFIX`].
#[must_use]
pub fn referral_code(name: &str) -> String {
    let mut code: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();
    code.push_str(REFERRAL_SUFFIX);
    code
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    name: &str,
    email: &str,
    referral_code: &str,
    total_donations: u64,
    monthly_donations: u64,
    join_date: (i32, u32, u32),
    department: &str,
) -> User {
    let (year, month, day) = join_date;
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        referral_code: referral_code.to_string(),
        total_donations,
        monthly_donations,
        join_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        department: department.to_string(),
    }
}

/// The demo users every fresh process starts with.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        seed(1, "Alex Smith", "alex.smith@company.com", "ALEXSMITH2025", 12450, 3200, (2024, 1, 15), "Marketing"),
        seed(2, "Sarah Johnson", "sarah.j@company.com", "SARAHJ2025", 18750, 4100, (2024, 1, 10), "Sales"),
        seed(3, "Mike Chen", "mike.chen@company.com", "MIKECHEN2025", 9800, 2500, (2024, 2, 1), "Engineering"),
        seed(4, "Emma Wilson", "emma.w@company.com", "EMMAW2025", 15600, 3800, (2024, 1, 20), "Design"),
        seed(5, "David Brown", "david.b@company.com", "DAVIDB2025", 21300, 5200, (2024, 1, 5), "Operations"),
    ]
}
