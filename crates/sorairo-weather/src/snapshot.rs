//! Observed conditions for a handful of major regions.
//! Regions without an entry fall back to the synthetic generator.

use serde::Serialize;

use crate::gazetteer::Region;
use crate::synthetic;
use crate::types::{Condition, WeatherProfile};

/// One observed day for a region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSnapshot {
    pub region_name: &'static str,
    pub condition: Condition,
    pub temp_high: i32,
    pub temp_low: i32,
    /// Daily mean, used as the profile temperature
    pub temp: i32,
    pub description: &'static str,
    pub humidity: i32,
    pub wind_speed: f64,
    pub sunshine_ratio: f64,
}

const SNAPSHOTS: &[RegionSnapshot] = &[
    RegionSnapshot {
        region_name: "北海道",
        condition: Condition::Rainy,
        temp_high: 3,
        temp_low: -2,
        temp: 1,
        description: "北海道でも南西部は雨の可能性",
        humidity: 75,
        wind_speed: 3.5,
        sunshine_ratio: 0.2,
    },
    RegionSnapshot {
        region_name: "宮城県",
        condition: Condition::Rainy,
        temp_high: 8,
        temp_low: 1,
        temp: 5,
        description: "日中も空気が冷たく感じられます",
        humidity: 85,
        wind_speed: 3.0,
        sunshine_ratio: 0.0,
    },
    RegionSnapshot {
        region_name: "東京都",
        condition: Condition::Rainy,
        temp_high: 12,
        temp_low: 5,
        temp: 9,
        description: "一日を通して傘が手放せません",
        humidity: 80,
        wind_speed: 2.5,
        sunshine_ratio: 0.0,
    },
    RegionSnapshot {
        region_name: "愛知県",
        condition: Condition::Rainy,
        temp_high: 11,
        temp_low: 5,
        temp: 8,
        description: "降り方が強まる時間帯も",
        humidity: 82,
        wind_speed: 3.2,
        sunshine_ratio: 0.0,
    },
    RegionSnapshot {
        region_name: "大阪府",
        condition: Condition::Rainy,
        temp_high: 11,
        temp_low: 6,
        temp: 9,
        description: "降水確率は高めです",
        humidity: 81,
        wind_speed: 2.8,
        sunshine_ratio: 0.0,
    },
    RegionSnapshot {
        region_name: "広島県",
        condition: Condition::Rainy,
        temp_high: 12,
        temp_low: 6,
        temp: 9,
        description: "お出かけには雨具が必須",
        humidity: 80,
        wind_speed: 2.6,
        sunshine_ratio: 0.0,
    },
    RegionSnapshot {
        region_name: "福岡県",
        condition: Condition::Rainy,
        temp_high: 12,
        temp_low: 8,
        temp: 10,
        description: "午後は次第に雨が止む見込み",
        humidity: 78,
        wind_speed: 2.4,
        sunshine_ratio: 0.1,
    },
    RegionSnapshot {
        region_name: "沖縄県",
        condition: Condition::Rainy,
        temp_high: 20,
        temp_low: 15,
        temp: 18,
        description: "湿った空気が入り、蒸し暑さも",
        humidity: 85,
        wind_speed: 3.0,
        sunshine_ratio: 0.3,
    },
];

/// Observed snapshot for `region`, if one exists
pub fn snapshot_for(region: Region) -> Option<&'static RegionSnapshot> {
    SNAPSHOTS.iter().find(|s| s.region_name == region.name())
}

impl RegionSnapshot {
    fn to_profile(&self, region: Region) -> WeatherProfile {
        WeatherProfile {
            condition: self.condition,
            temperature: self.temp,
            wind_speed: self.wind_speed,
            humidity: self.humidity,
            sunshine_ratio: self.sunshine_ratio,
            region,
            // Same hour rule as the generator so pages stay stable per region
            hour_of_day: synthetic::generate(region).hour_of_day,
        }
    }
}

/// Snapshot profile when available, synthetic profile otherwise
pub fn profile_for(region: Region) -> WeatherProfile {
    match snapshot_for(region) {
        Some(snapshot) => snapshot.to_profile(region),
        None => synthetic::generate(region),
    }
}
