//! Leaderboard ordering and ranks.
//!
//! Users are ordered by a single donation metric, highest first. The sort is
//! stable, so users with equal figures keep the order they have in the store.

use super::User;

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    TotalDonations,
    MonthlyDonations,
}

impl SortKey {
    /// `monthlyDonations` selects the monthly figure; anything else falls back
    /// to total donations.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "monthlyDonations" {
            Self::MonthlyDonations
        } else {
            Self::TotalDonations
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalDonations => "totalDonations",
            Self::MonthlyDonations => "monthlyDonations",
        }
    }

    #[must_use]
    pub const fn value(self, user: &User) -> u64 {
        match self {
            Self::TotalDonations => user.total_donations,
            Self::MonthlyDonations => user.monthly_donations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing<'a> {
    /// 1-based position after sorting.
    pub rank: usize,
    pub user: &'a User,
}

/// All users sorted by `key`, highest first.
#[must_use]
pub fn sorted(users: &[User], key: SortKey) -> Vec<&User> {
    let mut sorted: Vec<&User> = users.iter().collect();
    sorted.sort_by(|a, b| key.value(b).cmp(&key.value(a)));
    sorted
}

/// Number of entries kept for a requested `limit`.
///
/// Non-negative limits are capped at `len`; a negative limit drops that many
/// entries from the end.
#[must_use]
pub fn kept(len: usize, limit: i64) -> usize {
    let magnitude = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
    if limit >= 0 {
        magnitude.min(len)
    } else {
        len.saturating_sub(magnitude)
    }
}

/// Ranked and truncated view of `users`.
#[must_use]
pub fn leaderboard(users: &[User], key: SortKey, limit: i64) -> Vec<Standing<'_>> {
    let sorted = sorted(users, key);
    let kept = kept(sorted.len(), limit);

    sorted
        .into_iter()
        .take(kept)
        .enumerate()
        .map(|(index, user)| Standing {
            rank: index + 1,
            user,
        })
        .collect()
}

/// 1-based position of user `id` when everyone is ordered by total donations.
#[must_use]
pub fn rank_of(users: &[User], id: u64) -> Option<usize> {
    sorted(users, SortKey::TotalDonations)
        .iter()
        .position(|user| user.id == id)
        .map(|index| index + 1)
}
