//! Advice pages derived from a weather profile.
//!
//! Each advice table is a threshold ladder read top-down; the final branch
//! catches everything else, so out-of-range inputs still produce a page.

use serde::Serialize;

use crate::types::{Condition, ContentError, WeatherProfile};

/// The three card pages, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum PageKind {
    #[default]
    Style,
    Care,
    Emo,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [Self::Style, Self::Care, Self::Emo];

    pub fn from_index(index: i64) -> Result<Self, ContentError> {
        match index {
            0 => Ok(Self::Style),
            1 => Ok(Self::Care),
            2 => Ok(Self::Emo),
            other => Err(ContentError::InvalidPageIndex(other)),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Style => 0,
            Self::Care => 1,
            Self::Emo => 2,
        }
    }

    /// Following page, wrapping back to the first
    pub fn next(self) -> Self {
        match self {
            Self::Style => Self::Care,
            Self::Care => Self::Emo,
            Self::Emo => Self::Style,
        }
    }

    fn category(self) -> &'static str {
        match self {
            Self::Style => "Style Recommendation",
            Self::Care => "Hair & Skin Care",
            Self::Emo => "Life & Risk",
        }
    }
}

/// One label/value pair shown under a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Metric {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Render payload for a single page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentPage {
    pub kind: PageKind,
    pub title: String,
    pub description: String,
    pub category: &'static str,
    /// Opaque image locator
    pub image_key: &'static str,
    pub metrics: [Metric; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAdvice {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn style_advice(temperature: i32) -> StyleAdvice {
    if temperature >= 25 {
        StyleAdvice {
            title: "「風を纏う、アーバン・リゾート。」",
            description: "25℃を超える予報。ノースリーブにリネンのパンツを合わせて、風通しよく。足元はサンダルで抜け感を。",
        }
    } else if temperature >= 20 {
        StyleAdvice {
            title: "「透け感シャツで、春の光を。」",
            description: "過ごしやすい22℃。シアー素材のシャツを主役に。冷房対策に薄手のカーディガンを忍ばせて。",
        }
    } else if temperature >= 15 {
        StyleAdvice {
            title: "「トレンチコートで、知的な縦ラインを。」",
            description: "少し肌寒い18℃。トレンチコートをバサっと羽織って。インナーは薄手のタートルネックが最適。",
        }
    } else {
        StyleAdvice {
            title: "「ウールの温もり、優雅な質感。」",
            description: "10℃前後。厚手のウールコートにマフラーをプラス。素材感の重なりを楽しんで。",
        }
    }
}

/// Short label plus a sentence of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareAdvice {
    pub label: &'static str,
    pub advice: &'static str,
}

/// Wind outranks humidity
pub fn hair_advice(wind_speed: f64, humidity: i32) -> CareAdvice {
    if wind_speed > 5.0 {
        CareAdvice {
            label: "前髪死守",
            advice: "【Hair】強風注意！バームやスプレーでしっかりホールドして崩れを防止。",
        }
    } else if humidity > 70 {
        CareAdvice {
            label: "まとめ髪推奨",
            advice: "【Hair】湿気高め。広がりを抑えるためにアップスタイルやオイル多めが吉。",
        }
    } else {
        CareAdvice {
            label: "巻き髪キープ",
            advice: "【Hair】ニュアンスヘアを楽しめる絶好のコンディション。",
        }
    }
}

pub fn skin_advice(humidity: i32) -> CareAdvice {
    if humidity < 40 {
        CareAdvice {
            label: "保湿チャージ",
            advice: "【Skin】乾燥注意報。ミスト化粧水で日中の水分補給を忘れずに。",
        }
    } else if humidity > 80 {
        CareAdvice {
            label: "テカリ防止",
            advice: "【Skin】皮脂が浮きやすいかも。パウダーでサラサラ感をキープして。",
        }
    } else {
        CareAdvice {
            label: "安定コンディション",
            advice: "【Skin】お肌の調子も整いやすい、心地よい湿度です。",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyAdvice {
    pub label: &'static str,
    /// Photo timing hint
    pub value: String,
    pub advice: &'static str,
}

pub fn sky_advice(sunshine_ratio: f64, hour_of_day: u8) -> SkyAdvice {
    let bright = sunshine_ratio > 0.8;
    if bright && (16..=18).contains(&hour_of_day) {
        SkyAdvice {
            label: "マジックアワー予報",
            value: format!("{}:15頃", hour_of_day),
            advice: "最高の夕焼けが撮れる予感。17時過ぎのスカイラインをチェックして。",
        }
    } else if bright {
        SkyAdvice {
            label: "シャッターチャンス",
            value: "今が撮り時".to_string(),
            advice: "透き通るような青空が広がっています。ビル影や青空を背景に映える一枚を。",
        }
    } else {
        SkyAdvice {
            label: "エモ空探し",
            value: "空の隙間待ち".to_string(),
            advice: "ドラマチックな雲が見えるかも。モノクロ写真にするとエモさ倍増。",
        }
    }
}

/// Umbrella need, independent of the sky advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RainRisk {
    High,
    LowModerate,
    Negligible,
}

impl RainRisk {
    pub fn assess(condition: Condition, humidity: i32) -> Self {
        if condition == Condition::Rainy {
            Self::High
        } else if humidity > 70 {
            Self::LowModerate
        } else {
            Self::Negligible
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "高い（傘マスト！）",
            Self::LowModerate => "低め（折りたたみ有れば安心）",
            Self::Negligible => "なし（手ぶらOK）",
        }
    }
}

const RAINY_TITLE: &str = "「雨の降る、しっとりした街角。」";
const RAINY_DESCRIPTION: &str =
    "雨の日のフィルターがかかったような景色を楽しんで。お気に入りの傘が主役。";
const RAINY_PHOTO: &str = "室内推奨";

const IMAGES: &[(Condition, PageKind, &str)] = &[
    (
        Condition::Sunny,
        PageKind::Style,
        "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Sunny,
        PageKind::Care,
        "https://images.unsplash.com/photo-1522337360788-8b13dfbba0f9?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Sunny,
        PageKind::Emo,
        "https://images.unsplash.com/photo-1534067783941-51c9c23ecefd?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Rainy,
        PageKind::Style,
        "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Rainy,
        PageKind::Care,
        "https://images.unsplash.com/photo-1595152772835-219674b2a8a6?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Rainy,
        PageKind::Emo,
        "https://images.unsplash.com/photo-1527489377706-5bf97e608852?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Cloudy,
        PageKind::Style,
        "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Cloudy,
        PageKind::Care,
        "https://images.unsplash.com/photo-1512496011212-724f74c2964a?auto=format&fit=crop&q=80&w=800",
    ),
    (
        Condition::Cloudy,
        PageKind::Emo,
        "https://images.unsplash.com/photo-1513002749550-c59d786b8e6c?auto=format&fit=crop&q=80&w=800",
    ),
];

/// Image for a condition and page, falling back to the sunny variant
pub fn image_key(condition: Condition, kind: PageKind) -> &'static str {
    lookup_image(IMAGES, condition, kind)
}

fn lookup_image(
    table: &[(Condition, PageKind, &'static str)],
    condition: Condition,
    kind: PageKind,
) -> &'static str {
    let find = |c: Condition| {
        table
            .iter()
            .find(|(tc, tk, _)| *tc == c && *tk == kind)
            .map(|(_, _, key)| *key)
    };
    find(condition)
        .or_else(|| find(Condition::Sunny))
        .unwrap_or_default()
}

/// Derive the page at `page_index` (0, 1 or 2)
pub fn derive(profile: &WeatherProfile, page_index: i64) -> Result<ContentPage, ContentError> {
    PageKind::from_index(page_index).map(|kind| derive_page(profile, kind))
}

/// Derive a page by kind
pub fn derive_page(profile: &WeatherProfile, kind: PageKind) -> ContentPage {
    let image_key = image_key(profile.condition, kind);
    let category = kind.category();

    match kind {
        PageKind::Style => {
            let style = style_advice(profile.temperature);
            ContentPage {
                kind,
                title: style.title.to_string(),
                description: style.description.to_string(),
                category,
                image_key,
                metrics: [
                    Metric::new("Weather", profile.condition.label()),
                    Metric::new("Temp", format!("{}℃", profile.temperature)),
                ],
            }
        }
        PageKind::Care => {
            let hair = hair_advice(profile.wind_speed, profile.humidity);
            let skin = skin_advice(profile.humidity);
            ContentPage {
                kind,
                title: format!("「{} & {}」", hair.label, skin.label),
                description: format!("{} {}", hair.advice, skin.advice),
                category,
                image_key,
                metrics: [
                    Metric::new("Wind", format!("{}m/s", profile.wind_speed)),
                    Metric::new("Humid", format!("{}%", profile.humidity)),
                ],
            }
        }
        PageKind::Emo => {
            let risk = RainRisk::assess(profile.condition, profile.humidity);
            let (title, description, photo) = if profile.condition == Condition::Rainy {
                (
                    RAINY_TITLE.to_string(),
                    RAINY_DESCRIPTION.to_string(),
                    RAINY_PHOTO.to_string(),
                )
            } else {
                let sky = sky_advice(profile.sunshine_ratio, profile.hour_of_day);
                (format!("「{}」", sky.label), sky.advice.to_string(), sky.value)
            };
            ContentPage {
                kind,
                title,
                description,
                category,
                image_key,
                metrics: [Metric::new("Rain Risk", risk.label()), Metric::new("Photo", photo)],
            }
        }
    }
}
