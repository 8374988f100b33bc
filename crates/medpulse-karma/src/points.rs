//! Activity types and their fixed point values.

use serde::{Deserialize, Serialize};

/// Everything that can earn (or cost) karma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    CreatePost,
    CreateComment,
    GiveUpvote,
    JoinCommunity,
    CreateCommunity,
    ReceiveUpvote,
    ReceiveDownvote,
    ModerationPenalty,
}

impl ActivityType {
    /// Fixed point value per activity. The ledger stores this value at
    /// append time; changing the table never rewrites history.
    pub fn points(self) -> i64 {
        match self {
            Self::CreatePost => 10,
            Self::CreateComment => 3,
            Self::GiveUpvote => 1,
            Self::JoinCommunity => 5,
            Self::CreateCommunity => 15,
            Self::ReceiveUpvote => 5,
            Self::ReceiveDownvote => -2,
            Self::ModerationPenalty => -20,
        }
    }

    /// Parse the wire/storage form (`CREATE_POST`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATE_POST" => Some(Self::CreatePost),
            "CREATE_COMMENT" => Some(Self::CreateComment),
            "GIVE_UPVOTE" => Some(Self::GiveUpvote),
            "JOIN_COMMUNITY" => Some(Self::JoinCommunity),
            "CREATE_COMMUNITY" => Some(Self::CreateCommunity),
            "RECEIVE_UPVOTE" => Some(Self::ReceiveUpvote),
            "RECEIVE_DOWNVOTE" => Some(Self::ReceiveDownvote),
            "MODERATION_PENALTY" => Some(Self::ModerationPenalty),
            _ => None,
        }
    }

    /// Storage form of the variant name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatePost => "CREATE_POST",
            Self::CreateComment => "CREATE_COMMENT",
            Self::GiveUpvote => "GIVE_UPVOTE",
            Self::JoinCommunity => "JOIN_COMMUNITY",
            Self::CreateCommunity => "CREATE_COMMUNITY",
            Self::ReceiveUpvote => "RECEIVE_UPVOTE",
            Self::ReceiveDownvote => "RECEIVE_DOWNVOTE",
            Self::ModerationPenalty => "MODERATION_PENALTY",
        }
    }
}

/// One append-only ledger row. `points` is denormalized from the table at
/// append time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KarmaActivity {
    pub activity_type: ActivityType,
    pub points: i64,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl KarmaActivity {
    /// Build a ledger row with the type's fixed point value.
    pub fn new(activity_type: ActivityType, created_at: i64) -> Self {
        Self {
            activity_type,
            points: activity_type.points(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_table() {
        assert_eq!(ActivityType::CreatePost.points(), 10);
        assert_eq!(ActivityType::CreateComment.points(), 3);
        assert_eq!(ActivityType::GiveUpvote.points(), 1);
        assert_eq!(ActivityType::JoinCommunity.points(), 5);
        assert_eq!(ActivityType::CreateCommunity.points(), 15);
        assert_eq!(ActivityType::ReceiveUpvote.points(), 5);
        assert_eq!(ActivityType::ReceiveDownvote.points(), -2);
        assert_eq!(ActivityType::ModerationPenalty.points(), -20);
    }

    #[test]
    fn test_parse_roundtrip() {
        for ty in [
            ActivityType::CreatePost,
            ActivityType::CreateComment,
            ActivityType::GiveUpvote,
            ActivityType::JoinCommunity,
            ActivityType::CreateCommunity,
            ActivityType::ReceiveUpvote,
            ActivityType::ReceiveDownvote,
            ActivityType::ModerationPenalty,
        ] {
            assert_eq!(ActivityType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(ActivityType::parse("UNKNOWN"), None);
    }

    #[test]
    fn test_activity_carries_table_points() {
        let row = KarmaActivity::new(ActivityType::ModerationPenalty, 0);
        assert_eq!(row.points, -20);
    }
}
