//! Deterministic stand-in weather, derived only from a region's canonical index.

use crate::gazetteer::Region;
use crate::types::{Condition, WeatherProfile};

/// Regions before this index are the cold north
const NORTH_LIMIT: i32 = 7;
/// Regions after this index are the warm south
const SOUTH_LIMIT: i32 = 40;

/// Generate the profile for `region`. Same region, same profile.
pub fn generate(region: Region) -> WeatherProfile {
    let index = region.index() as i32;

    // Wind is carried in tenths so the one-decimal value is exact.
    let mut wind_tenths = 20;
    let mut sunshine_ratio = 1.0;

    let (condition, mut temperature, humidity) = match index % 3 {
        0 => (Condition::Sunny, 22 + index % 10, 35 + index % 15),
        1 => {
            sunshine_ratio = 0.2;
            (Condition::Cloudy, 15 + index % 12, 55 + index % 20)
        }
        _ => {
            wind_tenths = 40 + (index % 5) * 10;
            sunshine_ratio = 0.0;
            (Condition::Rainy, 8 + index % 10, 75 + index % 15)
        }
    };

    if index < NORTH_LIMIT {
        temperature -= 8;
    } else if index > SOUTH_LIMIT {
        temperature += 6;
    }

    WeatherProfile {
        condition,
        temperature,
        wind_speed: f64::from(wind_tenths) / 10.0,
        humidity,
        sunshine_ratio,
        region,
        hour_of_day: (10 + index % 8) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> WeatherProfile {
        generate(Region::from_index(index).unwrap())
    }

    #[test]
    fn test_deterministic() {
        for region in Region::all() {
            assert_eq!(generate(region), generate(region));
        }
    }

    #[test]
    fn test_first_region_is_cold_and_sunny() {
        let p = at(0);
        assert_eq!(p.condition, Condition::Sunny);
        assert_eq!(p.temperature, 14);
        assert_eq!(p.humidity, 35);
        assert_eq!(p.wind_speed, 2.0);
        assert_eq!(p.sunshine_ratio, 1.0);
        assert_eq!(p.hour_of_day, 10);
        assert_eq!(p.region.name(), "北海道");
    }

    #[test]
    fn test_tokyo_is_sunny_bucket() {
        // index 12: 12 % 3 == 0
        let p = at(12);
        assert_eq!(p.condition, Condition::Sunny);
        assert_eq!(p.temperature, 24);
        assert_eq!(p.humidity, 47);
        assert_eq!(p.hour_of_day, 14);
    }

    #[test]
    fn test_cloudy_bucket() {
        // index 13 (神奈川県): no geographic adjustment
        let p = at(13);
        assert_eq!(p.condition, Condition::Cloudy);
        assert_eq!(p.temperature, 16);
        assert_eq!(p.humidity, 68);
        assert_eq!(p.wind_speed, 2.0);
        assert_eq!(p.sunshine_ratio, 0.2);
        assert_eq!(p.hour_of_day, 15);
    }

    #[test]
    fn test_rainy_bucket() {
        // index 8 (栃木県)
        let p = at(8);
        assert_eq!(p.condition, Condition::Rainy);
        assert_eq!(p.temperature, 16);
        assert_eq!(p.humidity, 83);
        assert_eq!(p.wind_speed, 7.0);
        assert_eq!(p.sunshine_ratio, 0.0);
        assert_eq!(p.hour_of_day, 10);
    }

    #[test]
    fn test_north_adjustment() {
        // index 2 (岩手県): rainy 8 + 2 - 8
        assert_eq!(at(2).temperature, 2);
        // index 6 is the last adjusted region
        assert_eq!(at(6).temperature, 22 + 6 - 8);
        assert_eq!(at(7).temperature, 15 + 7);
    }

    #[test]
    fn test_south_adjustment() {
        // index 40 is not adjusted, 41..=46 are
        assert_eq!(at(40).temperature, 15 + 40 % 12);
        assert_eq!(at(41).temperature, 8 + 1 + 6);
        assert_eq!(at(42).temperature, 22 + 2 + 6);
        // 沖縄県: cloudy 15 + 46 % 12 + 6
        let okinawa = at(46);
        assert_eq!(okinawa.condition, Condition::Cloudy);
        assert_eq!(okinawa.temperature, 31);
        assert_eq!(okinawa.hour_of_day, 16);
    }

    #[test]
    fn test_wind_has_one_decimal() {
        for region in Region::all() {
            let wind = generate(region).wind_speed;
            assert_eq!((wind * 10.0).round() / 10.0, wind);
        }
    }
}
