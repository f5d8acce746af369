use std::{fmt::Display, str::FromStr};

use const_format::concatcp;

use crate::prelude::*;

const API_DOMAIN: &str = ".api.battle.net";
const US_HOST: &str = concatcp!("https://us", API_DOMAIN);
const EU_HOST: &str = concatcp!("https://eu", API_DOMAIN);
const KR_HOST: &str = concatcp!("https://kr", API_DOMAIN);
const TW_HOST: &str = concatcp!("https://tw", API_DOMAIN);
const CN_HOST: &str = "https://www.battlenet.com.cn";

/// region used when a region has no host of its own
pub const DEFAULT_REGION: Region = Region::US;

/// Regional api hosts. A region missing from this table talks to the [`DEFAULT_REGION`] host.
const REGION_HOSTS: [(Region, &str); 5] = [
    (Region::US, US_HOST),
    (Region::EU, EU_HOST),
    (Region::KR, KR_HOST),
    (Region::TW, TW_HOST),
    (Region::CN, CN_HOST),
];

/// Selects which regional host serves the requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    US,
    EU,
    KR,
    TW,
    CN,
    SEA,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::US,
        Region::EU,
        Region::KR,
        Region::TW,
        Region::CN,
        Region::SEA,
    ];

    /// base url of the api host for this region, without a trailing slash
    pub fn host(self) -> &'static str {
        REGION_HOSTS
            .iter()
            .find(|(region, _)| *region == self)
            .map(|(_, host)| *host)
            .unwrap_or(US_HOST)
    }

    /// host of the old keyless api, `http://{region}.battle.net`
    pub fn legacy_host(self) -> String {
        format!("http://{}.battle.net", self.as_str())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::US => "us",
            Region::EU => "eu",
            Region::KR => "kr",
            Region::TW => "tw",
            Region::CN => "cn",
            Region::SEA => "sea",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ApiError::UnknownRegion(s.to_string()))
    }
}

/// Language of the returned payloads.
///
/// `None` leaves the `locale` query parameter empty (`locale=`) and the host picks its default
/// language. The literal `None` is never sent.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    None,
    // US
    en_US,
    es_MX,
    pt_BR,
    // EU
    en_GB,
    de_DE,
    es_ES,
    fr_FR,
    it_IT,
    pl_PL,
    pt_PT,
    ru_RU,
    // KR
    ko_KR,
    // TW
    zh_TW,
    // CN
    zh_CN,
}

impl Locale {
    pub const ALL: [Locale; 15] = [
        Locale::None,
        Locale::en_US,
        Locale::es_MX,
        Locale::pt_BR,
        Locale::en_GB,
        Locale::de_DE,
        Locale::es_ES,
        Locale::fr_FR,
        Locale::it_IT,
        Locale::pl_PL,
        Locale::pt_PT,
        Locale::ru_RU,
        Locale::ko_KR,
        Locale::zh_TW,
        Locale::zh_CN,
    ];

    /// value of the `locale` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::None => "",
            Locale::en_US => "en_US",
            Locale::es_MX => "es_MX",
            Locale::pt_BR => "pt_BR",
            Locale::en_GB => "en_GB",
            Locale::de_DE => "de_DE",
            Locale::es_ES => "es_ES",
            Locale::fr_FR => "fr_FR",
            Locale::it_IT => "it_IT",
            Locale::pl_PL => "pl_PL",
            Locale::pt_PT => "pt_PT",
            Locale::ru_RU => "ru_RU",
            Locale::ko_KR => "ko_KR",
            Locale::zh_TW => "zh_TW",
            Locale::zh_CN => "zh_CN",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ApiError;

    /// accepts both `en_US` and `en-US`. an empty string is [`Locale::None`]
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('-', "_");
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ApiError::UnknownLocale(s.to_string()))
    }
}
