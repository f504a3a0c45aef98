//! Tropical zodiac signs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coords::normalize_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign containing an ecliptic longitude (any real value, wrapped)
    pub fn from_longitude(longitude: f64) -> Sign {
        let index = (normalize_degrees(longitude) / 30.0) as usize;
        SIGNS[index.min(11)]
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees past the start of the containing sign, [0, 30)
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

/// `23°51' Taurus` style rendering of a longitude
pub fn format_longitude(longitude: f64) -> String {
    let within = degree_in_sign(longitude);
    let mut degrees = within.floor() as u32;
    let mut minutes = ((within - within.floor()) * 60.0).round() as u32;
    let mut sign = Sign::from_longitude(longitude);
    if minutes == 60 {
        minutes = 0;
        degrees += 1;
    }
    if degrees == 30 {
        degrees = 0;
        sign = Sign::from_longitude(longitude + 1.0);
    }
    format!("{:>2}°{:02}' {}", degrees, minutes, sign)
}
