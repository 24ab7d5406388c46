//! Static place-name data: the 47 prefectures in their fixed canonical order,
//! plus the city/ward/landmark aliases that map onto them.
//!
//! Both tables are compiled in and never change at runtime. Declaration order
//! matters: the resolver's prefix tier returns the first match in this order.

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// Coarse geographic grouping of prefectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Hokkaido,
    Tohoku,
    Kanto,
    Chubu,
    Kinki,
    Chugoku,
    Shikoku,
    KyushuOkinawa,
}

impl Area {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hokkaido => "北海道",
            Self::Tohoku => "東北",
            Self::Kanto => "関東",
            Self::Chubu => "中部",
            Self::Kinki => "近畿",
            Self::Chugoku => "中国",
            Self::Shikoku => "四国",
            Self::KyushuOkinawa => "九州・沖縄",
        }
    }
}

struct RegionEntry {
    name: &'static str,
    area: Area,
    /// Prefectural capital (latitude, longitude)
    capital: (f64, f64),
}

const fn entry(name: &'static str, area: Area, lat: f64, lon: f64) -> RegionEntry {
    RegionEntry {
        name,
        area,
        capital: (lat, lon),
    }
}

/// Canonical order, north to south. The synthetic generator keys off these positions.
static REGIONS: [RegionEntry; REGION_COUNT] = [
    entry("北海道", Area::Hokkaido, 43.06, 141.35),
    entry("青森県", Area::Tohoku, 40.82, 140.74),
    entry("岩手県", Area::Tohoku, 39.70, 141.15),
    entry("宮城県", Area::Tohoku, 38.27, 140.87),
    entry("秋田県", Area::Tohoku, 39.72, 140.10),
    entry("山形県", Area::Tohoku, 38.24, 140.36),
    entry("福島県", Area::Tohoku, 37.75, 140.47),
    entry("茨城県", Area::Kanto, 36.34, 140.45),
    entry("栃木県", Area::Kanto, 36.57, 139.88),
    entry("群馬県", Area::Kanto, 36.39, 139.06),
    entry("埼玉県", Area::Kanto, 35.86, 139.65),
    entry("千葉県", Area::Kanto, 35.61, 140.12),
    entry("東京都", Area::Kanto, 35.69, 139.69),
    entry("神奈川県", Area::Kanto, 35.45, 139.64),
    entry("新潟県", Area::Chubu, 37.90, 139.02),
    entry("富山県", Area::Chubu, 36.70, 137.21),
    entry("石川県", Area::Chubu, 36.59, 136.63),
    entry("福井県", Area::Chubu, 36.07, 136.22),
    entry("山梨県", Area::Chubu, 35.66, 138.57),
    entry("長野県", Area::Chubu, 36.65, 138.18),
    entry("岐阜県", Area::Chubu, 35.39, 136.72),
    entry("静岡県", Area::Chubu, 34.98, 138.38),
    entry("愛知県", Area::Chubu, 35.18, 136.91),
    entry("三重県", Area::Kinki, 34.73, 136.51),
    entry("滋賀県", Area::Kinki, 35.00, 135.87),
    entry("京都府", Area::Kinki, 35.02, 135.76),
    entry("大阪府", Area::Kinki, 34.69, 135.52),
    entry("兵庫県", Area::Kinki, 34.69, 135.18),
    entry("奈良県", Area::Kinki, 34.69, 135.83),
    entry("和歌山県", Area::Kinki, 34.23, 135.17),
    entry("鳥取県", Area::Chugoku, 35.50, 134.24),
    entry("島根県", Area::Chugoku, 35.47, 133.05),
    entry("岡山県", Area::Chugoku, 34.66, 133.93),
    entry("広島県", Area::Chugoku, 34.40, 132.46),
    entry("山口県", Area::Chugoku, 34.19, 131.47),
    entry("徳島県", Area::Shikoku, 34.07, 134.56),
    entry("香川県", Area::Shikoku, 34.34, 134.04),
    entry("愛媛県", Area::Shikoku, 33.84, 132.77),
    entry("高知県", Area::Shikoku, 33.56, 133.53),
    entry("福岡県", Area::KyushuOkinawa, 33.61, 130.42),
    entry("佐賀県", Area::KyushuOkinawa, 33.25, 130.30),
    entry("長崎県", Area::KyushuOkinawa, 32.74, 129.87),
    entry("熊本県", Area::KyushuOkinawa, 32.79, 130.74),
    entry("大分県", Area::KyushuOkinawa, 33.24, 131.61),
    entry("宮崎県", Area::KyushuOkinawa, 31.91, 131.42),
    entry("鹿児島県", Area::KyushuOkinawa, 31.56, 130.56),
    entry("沖縄県", Area::KyushuOkinawa, 26.21, 127.68),
];

/// Number of canonical regions
pub const REGION_COUNT: usize = 47;

/// One of the 47 prefectures, identified by its canonical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(u8);

impl Region {
    /// Region at a canonical position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        (index < REGION_COUNT).then(|| Self(index as u8))
    }

    /// Exact lookup by canonical name (e.g. "東京都")
    pub fn from_name(name: &str) -> Option<Self> {
        REGIONS
            .iter()
            .position(|r| r.name == name)
            .and_then(Self::from_index)
    }

    /// All regions in canonical order
    pub fn all() -> impl Iterator<Item = Region> {
        (0..REGION_COUNT).filter_map(Self::from_index)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn area(self) -> Area {
        self.entry().area
    }

    /// Location of the prefectural capital
    pub fn coordinates(self) -> Coordinates {
        let (latitude, longitude) = self.entry().capital;
        Coordinates {
            latitude,
            longitude,
        }
    }

    fn entry(self) -> &'static RegionEntry {
        &REGIONS[self.index()]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Region {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("unknown region: {}", value))
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.name().to_string()
    }
}

/// A free-text place name pointing at exactly one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub token: &'static str,
    pub region: Region,
}

impl Alias {
    /// Build an alias for a canonical region name, `None` if the name is unknown
    pub fn new(token: &'static str, region_name: &str) -> Option<Self> {
        Region::from_name(region_name).map(|region| Self { token, region })
    }
}

const ALIAS_TABLE: &[(&str, &str)] = &[
    // 北海道
    ("札幌", "北海道"),
    ("函館", "北海道"),
    ("旭川", "北海道"),
    ("小樽", "北海道"),
    // 東北
    ("仙台", "宮城県"),
    ("青森", "青森県"),
    ("盛岡", "岩手県"),
    ("秋田", "秋田県"),
    ("山形", "山形県"),
    ("福島", "福島県"),
    // 関東
    ("水戸", "茨城県"),
    ("宇都宮", "栃木県"),
    ("前橋", "群馬県"),
    ("浦和", "埼玉県"),
    ("さいたま", "埼玉県"),
    ("千葉", "千葉県"),
    ("新宿", "東京都"),
    ("渋谷", "東京都"),
    ("横浜", "神奈川県"),
    ("川崎", "神奈川県"),
    // 中部
    ("新潟", "新潟県"),
    ("富山", "富山県"),
    ("金沢", "石川県"),
    ("福井", "福井県"),
    ("甲府", "山梨県"),
    ("長野", "長野県"),
    ("岐阜", "岐阜県"),
    ("静岡", "静岡県"),
    ("名古屋", "愛知県"),
    ("津", "三重県"),
    // 関西
    ("大津", "滋賀県"),
    ("京都", "京都府"),
    ("梅田", "大阪府"),
    ("難波", "大阪府"),
    ("神戸", "兵庫県"),
    ("奈良", "奈良県"),
    ("和歌山", "和歌山県"),
    // 中国
    ("鳥取", "鳥取県"),
    ("松江", "島根県"),
    ("岡山", "岡山県"),
    ("広島", "広島県"),
    ("山口", "山口県"),
    // 四国
    ("徳島", "徳島県"),
    ("高松", "香川県"),
    ("松山", "愛媛県"),
    ("高知", "高知県"),
    // 九州・沖縄
    ("福岡", "福岡県"),
    ("博多", "福岡県"),
    ("佐賀", "佐賀県"),
    ("長崎", "長崎県"),
    ("熊本", "熊本県"),
    ("大分", "大分県"),
    ("宮崎", "宮崎県"),
    ("鹿児島", "鹿児島県"),
    ("那覇", "沖縄県"),
];

static ALIASES: std::sync::OnceLock<Vec<Alias>> = std::sync::OnceLock::new();

/// Built-in aliases in declaration order
pub fn aliases() -> &'static [Alias] {
    ALIASES.get_or_init(|| {
        ALIAS_TABLE
            .iter()
            .filter_map(|&(token, region)| Alias::new(token, region))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_order_is_fixed() {
        assert_eq!(Region::from_index(0).unwrap().name(), "北海道");
        assert_eq!(Region::from_index(12).unwrap().name(), "東京都");
        assert_eq!(Region::from_index(46).unwrap().name(), "沖縄県");
        assert!(Region::from_index(47).is_none());
    }

    #[test]
    fn test_region_names_are_unique() {
        let mut names: Vec<_> = Region::all().map(Region::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REGION_COUNT);
    }

    #[test]
    fn test_every_alias_targets_a_known_region() {
        assert_eq!(aliases().len(), ALIAS_TABLE.len());
        assert_eq!(aliases()[0].token, "札幌");
        assert_eq!(aliases().last().map(|a| a.region.name()), Some("沖縄県"));
    }

    #[test]
    fn test_from_name_round_trips_index() {
        for region in Region::all() {
            assert_eq!(Region::from_name(region.name()), Some(region));
        }
        assert!(Region::from_name("東京").is_none());
    }

    #[test]
    fn test_area_and_coordinates() {
        let okinawa = Region::from_name("沖縄県").unwrap();
        assert_eq!(okinawa.area(), Area::KyushuOkinawa);
        assert_eq!(okinawa.area().label(), "九州・沖縄");
        assert!(okinawa.coordinates().latitude < 30.0);

        let hokkaido = Region::from_name("北海道").unwrap();
        assert!(hokkaido.coordinates().latitude > 40.0);
    }

    #[test]
    fn test_region_serializes_as_name() {
        let tokyo = Region::from_name("東京都").unwrap();
        let json = serde_json::to_string(&tokyo).unwrap();
        assert_eq!(json, "\"東京都\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokyo);
        assert!(serde_json::from_str::<Region>("\"東京\"").is_err());
    }
}
