use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Realm {
    /// `pve`, `pvp`, `rp` or `rppvp`
    #[serde(rename = "type")]
    pub kind: String,
    /// `low`, `medium`, `high`, `full` or `n/a`
    pub population: String,
    pub queue: bool,
    /// true when the realm is up
    pub status: bool,
    pub name: String,
    pub slug: String,
    pub battlegroup: String,
    pub locale: String,
    pub timezone: String,
    /// slugs of every realm sharing this realm's servers, itself included
    #[serde(rename = "connected_realms")]
    pub connected_realms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmsData {
    pub realms: Vec<Realm>,
}

pub struct RealmStatus;

impl EndPoint for RealmStatus {
    type RType = RealmsData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["realm".into(), "status".into()]
    }
}
