use crate::{end_point::items::ItemSummary, prelude::*};

pub type AchievementId = u32;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementInfo {
    pub id: AchievementId,
    pub title: String,
    pub points: u32,
    pub description: String,
    pub reward: String,
    pub reward_items: Vec<ItemSummary>,
    pub icon: String,
    pub criteria: Vec<Criterion>,
    pub account_wide: bool,
    /// 0 alliance, 1 horde, 2 both
    pub faction_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Criterion {
    pub id: u32,
    pub description: String,
    pub order_index: u32,
    pub max: u64,
}

/// A top level achievement category with its sub categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementList {
    pub id: u32,
    pub name: String,
    pub achievements: Vec<AchievementInfo>,
    pub categories: Vec<AchievementCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementCategory {
    pub id: u32,
    pub name: String,
    pub achievements: Vec<AchievementInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementData {
    pub achievements: Vec<AchievementList>,
}

/// Completed achievements and criteria of a character or guild.
///
/// The vectors are parallel: `achievements_completed_timestamp[i]` belongs to
/// `achievements_completed[i]`, same for the criteria vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementProgress {
    pub achievements_completed: Vec<AchievementId>,
    pub achievements_completed_timestamp: Vec<u64>,
    pub criteria: Vec<u32>,
    pub criteria_quantity: Vec<u64>,
    pub criteria_timestamp: Vec<u64>,
    pub criteria_created: Vec<u64>,
}

impl AchievementProgress {
    /// completion time in unix millis
    pub fn completed_at(&self, id: AchievementId) -> Option<u64> {
        self.achievements_completed
            .iter()
            .position(|completed| *completed == id)
            .and_then(|index| self.achievements_completed_timestamp.get(index).copied())
    }
}

pub struct AchievementById(pub AchievementId);

impl EndPoint for AchievementById {
    type RType = AchievementInfo;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["achievement".into(), self.0.to_string().into()]
    }
}

pub struct CharacterAchievements;

impl EndPoint for CharacterAchievements {
    type RType = AchievementData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "character".into(), "achievements".into()]
    }
}

pub struct GuildAchievements;

impl EndPoint for GuildAchievements {
    type RType = AchievementData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "guild".into(), "achievements".into()]
    }
}
