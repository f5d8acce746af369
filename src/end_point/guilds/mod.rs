use enumflags2::BitFlags;

use crate::{
    end_point::{
        achievements::{AchievementInfo, AchievementProgress},
        classes::{ClassId, Spec},
        items::ItemId,
        races::RaceId,
    },
    options::{fields_query, GuildOption},
    prelude::*,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Guild {
    /// unix millis
    pub last_modified: u64,
    pub name: String,
    pub realm: String,
    pub battlegroup: String,
    pub level: u32,
    /// 0 alliance, 1 horde
    pub side: u32,
    pub achievement_points: u32,
    pub emblem: GuildEmblem,

    pub members: Option<Vec<GuildMember>>,
    pub achievements: Option<AchievementProgress>,
    pub news: Option<Vec<GuildNews>>,
}

impl Guild {
    /// members holding `rank`. rank 0 is the guild master
    pub fn members_of_rank(&self, rank: u32) -> impl Iterator<Item = &GuildMember> {
        self.members
            .iter()
            .flatten()
            .filter(move |member| member.rank == rank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuildEmblem {
    pub icon: u32,
    /// argb hex, `ffdfa55a`
    pub icon_color: String,
    pub icon_color_id: u32,
    pub border: u32,
    pub border_color: String,
    pub border_color_id: u32,
    pub background_color: String,
    pub background_color_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildMember {
    pub character: MemberCharacter,
    pub rank: u32,
}

/// The character summary used by guild rosters and challenge groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberCharacter {
    pub name: String,
    pub realm: String,
    pub battlegroup: String,
    #[serde(rename = "class")]
    pub class_id: ClassId,
    #[serde(rename = "race")]
    pub race_id: RaceId,
    pub gender: u32,
    pub level: u32,
    pub achievement_points: u32,
    pub thumbnail: String,
    pub spec: Option<Spec>,
    pub guild: String,
    pub guild_realm: String,
    pub last_modified: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuildNews {
    /// `itemLoot`, `itemPurchase`, `playerAchievement`, `guildAchievement` ..
    #[serde(rename = "type")]
    pub kind: String,
    pub character: String,
    /// unix millis
    pub timestamp: u64,
    pub item_id: ItemId,
    pub context: String,
    pub bonus_lists: Vec<u32>,
    pub achievement: Option<AchievementInfo>,
}

pub struct GuildProfile<'a> {
    pub realm: &'a str,
    pub name: &'a str,
    pub options: BitFlags<GuildOption>,
}

impl EndPoint for GuildProfile<'_> {
    type RType = Guild;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["guild".into(), self.realm.into(), self.name.into()]
    }
    fn fields(&self) -> String {
        fields_query(self.options)
    }
}
