use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuildPerkInfo {
    pub guild_level: u32,
    pub spell: Spell,
}

/// Spell description shared by perks and talents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spell {
    pub id: u32,
    pub name: String,
    pub subtext: String,
    pub icon: String,
    pub description: String,
    pub range: String,
    pub power_cost: String,
    pub cast_time: String,
    pub cooldown: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildPerksData {
    pub perks: Vec<GuildPerkInfo>,
}

pub struct GuildPerks;

impl EndPoint for GuildPerks {
    type RType = GuildPerksData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "guild".into(), "perks".into()]
    }
}
