use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattlegroupInfo {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattlegroupData {
    pub battlegroups: Vec<BattlegroupInfo>,
}

pub struct Battlegroups;

impl EndPoint for Battlegroups {
    type RType = BattlegroupData;
    /// the api only answers on `data/battlegroups/`, with the trailing slash
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "battlegroups".into(), "".into()]
    }
}
