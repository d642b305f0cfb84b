use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RewardTier {
    pub id: u32,
    #[schema(value_type = String)]
    pub name: &'static str,
    pub threshold: u64,
    #[schema(value_type = String)]
    pub icon: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
}

/// Reward tiers in ascending threshold order.
pub const REWARD_TIERS: [RewardTier; 6] = [
    RewardTier {
        id: 1,
        name: "Welcome Badge",
        threshold: 0,
        icon: "🎖️",
        description: "Welcome to the team!",
    },
    RewardTier {
        id: 2,
        name: "First $1K",
        threshold: 1000,
        icon: "💵",
        description: "Raised your first $1,000",
    },
    RewardTier {
        id: 3,
        name: "Team Player",
        threshold: 5000,
        icon: "🤝",
        description: "Contributing to team goals",
    },
    RewardTier {
        id: 4,
        name: "High Achiever",
        threshold: 10000,
        icon: "🏅",
        description: "Excellent performance!",
    },
    RewardTier {
        id: 5,
        name: "Superstar",
        threshold: 20000,
        icon: "⭐",
        description: "Outstanding results",
    },
    RewardTier {
        id: 6,
        name: "Legend",
        threshold: 50000,
        icon: "👑",
        description: "Legendary performance",
    },
];

/// A tier together with whether a given user has reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RewardStatus {
    #[serde(flatten)]
    pub tier: RewardTier,
    pub unlocked: bool,
}

impl RewardTier {
    #[must_use]
    pub const fn is_unlocked_by(&self, total_donations: u64) -> bool {
        total_donations >= self.threshold
    }
}

/// Every tier, in definition order, flagged as unlocked when
/// `total_donations` reaches its threshold.
#[must_use]
pub fn rewards_for_user(total_donations: u64) -> Vec<RewardStatus> {
    REWARD_TIERS
        .iter()
        .map(|tier| RewardStatus {
            tier: *tier,
            unlocked: tier.is_unlocked_by(total_donations),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_ids(total: u64) -> Vec<u32> {
        rewards_for_user(total)
            .iter()
            .filter(|reward| reward.unlocked)
            .map(|reward| reward.tier.id)
            .collect()
    }

    #[test]
    fn tiers_are_in_ascending_threshold_order() {
        assert!(REWARD_TIERS
            .windows(2)
            .all(|pair| pair[0].threshold < pair[1].threshold));
    }

    #[test]
    fn zero_donations_unlock_only_the_welcome_badge() {
        assert_eq!(unlocked_ids(0), vec![1]);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(unlocked_ids(999), vec![1]);
        assert_eq!(unlocked_ids(1000), vec![1, 2]);
        assert_eq!(unlocked_ids(19_999), vec![1, 2, 3, 4]);
        assert_eq!(unlocked_ids(20_000), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn fifty_thousand_unlocks_everything() {
        assert_eq!(unlocked_ids(50_000), vec![1, 2, 3, 4, 5, 6]);
        assert!(rewards_for_user(u64::MAX).iter().all(|reward| reward.unlocked));
    }

    #[test]
    fn every_tier_is_reported_in_definition_order() {
        let rewards = rewards_for_user(12_450);
        let ids: Vec<u32> = rewards.iter().map(|reward| reward.tier.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn serializes_flat_with_unlocked_flag() {
        let rewards = rewards_for_user(5000);
        let value = serde_json::to_value(rewards[2]).expect("reward serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "name": "Team Player",
                "threshold": 5000,
                "icon": "🤝",
                "description": "Contributing to team goals",
                "unlocked": true,
            })
        );
    }
}
