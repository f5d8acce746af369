use crate::prelude::*;

pub type ItemId = u32;

/// Full item description from `item/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// some payloads (and the old api) call this field `item`
    #[serde(alias = "item")]
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub name_description: String,
    pub icon: String,
    pub quality: u32,
    pub item_level: u32,
    pub required_level: u32,
    pub required_skill: u32,
    pub required_skill_rank: u32,
    pub item_class: u32,
    pub item_sub_class: u32,
    pub inventory_type: u32,
    pub item_bind: u32,
    pub stackable: u32,
    pub max_count: u32,
    pub max_durability: u32,
    pub container_slots: u32,
    pub buy_price: u64,
    pub sell_price: u64,
    pub min_faction_id: u32,
    pub min_reputation: u32,
    pub base_armor: u32,
    pub armor: u32,
    pub display_info_id: u32,
    pub bonus_stats: Vec<ItemStat>,
    pub item_spells: Vec<serde_json::Value>,
    pub equippable: bool,
    pub has_sockets: bool,
    pub is_auctionable: bool,
    pub upgradable: bool,
    pub heroic_tooltip: bool,
    pub context: String,
    pub bonus_lists: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStat {
    pub stat: i32,
    pub amount: i64,
}

/// The short item form embedded in equipment, rewards and achievements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub icon: String,
    pub quality: u32,
    pub item_level: u32,
    pub armor: u32,
    pub stats: Vec<ItemStat>,
    /// gems, enchants, transmog .. only present on equipped items
    pub tooltip_params: serde_json::Value,
    pub context: String,
    pub bonus_lists: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemClassInfo {
    #[serde(rename = "class")]
    pub class_id: u32,
    pub name: String,
    pub subclasses: Vec<ItemSubclassInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSubclassInfo {
    #[serde(rename = "subclass")]
    pub subclass_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemClassData {
    pub classes: Vec<ItemClassInfo>,
}

pub struct ItemById(pub ItemId);

impl EndPoint for ItemById {
    type RType = Item;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["item".into(), self.0.to_string().into()]
    }
}

pub struct ItemClasses;

impl EndPoint for ItemClasses {
    type RType = ItemClassData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "item".into(), "classes".into()]
    }
}
