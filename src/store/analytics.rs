use super::User;

/// Aggregate figures over every user in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_users: usize,
    pub total_donations: u64,
    pub total_monthly_donations: u64,
    /// Mean of total donations, rounded half up. Zero for an empty store.
    pub average_donations: u64,
    /// First user holding the highest total. `None` for an empty store.
    pub top_performer: Option<String>,
}

#[must_use]
pub fn summarize(users: &[User]) -> Summary {
    let total_donations: u64 = users.iter().map(|user| user.total_donations).sum();
    let total_monthly_donations: u64 = users.iter().map(|user| user.monthly_donations).sum();

    let top_performer = users
        .iter()
        .fold(None::<&User>, |top, user| match top {
            Some(top) if user.total_donations <= top.total_donations => Some(top),
            _ => Some(user),
        })
        .map(|user| user.name.clone());

    Summary {
        total_users: users.len(),
        total_donations,
        total_monthly_donations,
        average_donations: rounded_mean(total_donations, users.len() as u64),
        top_performer,
    }
}

fn rounded_mean(sum: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let sum = u128::from(sum);
    let count = u128::from(count);
    u64::try_from((2 * sum + count) / (2 * count)).unwrap_or(u64::MAX)
}
