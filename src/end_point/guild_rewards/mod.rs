use crate::{
    end_point::{achievements::AchievementInfo, items::ItemSummary, races::RaceId},
    prelude::*,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuildRewardInfo {
    pub min_guild_level: u32,
    pub min_guild_rep_level: u32,
    /// races allowed to buy the reward. empty means everyone
    pub races: Vec<RaceId>,
    pub achievement: Option<AchievementInfo>,
    pub item: ItemSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildRewardsData {
    pub rewards: Vec<GuildRewardInfo>,
}

pub struct GuildRewards;

impl EndPoint for GuildRewards {
    type RType = GuildRewardsData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "guild".into(), "rewards".into()]
    }
}
