use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::model::session::Session;

/// The four summed quantities tracked per activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    TimeMin,
    DistanceKm,
    ElevationM,
    Load,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::TimeMin, Stat::DistanceKm, Stat::ElevationM, Stat::Load];

    /// Suffix used when synthesising `<activity>_<suffix>` column names.
    pub fn suffix(self) -> &'static str {
        match self {
            Stat::TimeMin => "time_min",
            Stat::DistanceKm => "distance_km",
            Stat::ElevationM => "elevation_m",
            Stat::Load => "load",
        }
    }

    pub fn column(self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.suffix())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityStats {
    pub time_min: f64,
    pub distance_km: f64,
    pub elevation_m: f64,
    pub load: f64,
}

impl ActivityStats {
    pub fn new(time_min: f64, distance_km: f64, elevation_m: f64, load: f64) -> Self {
        Self {
            time_min,
            distance_km,
            elevation_m,
            load,
        }
    }

    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::TimeMin => self.time_min,
            Stat::DistanceKm => self.distance_km,
            Stat::ElevationM => self.elevation_m,
            Stat::Load => self.load,
        }
    }

    pub fn set(&mut self, stat: Stat, value: f64) {
        match stat {
            Stat::TimeMin => self.time_min = value,
            Stat::DistanceKm => self.distance_km = value,
            Stat::ElevationM => self.elevation_m = value,
            Stat::Load => self.load = value,
        }
    }

    pub fn add_session(&mut self, session: &Session) {
        self.time_min += session.time_min;
        self.distance_km += session.distance_km;
        self.elevation_m += session.elevation_m;
        self.load += session.load;
    }
}

impl AddAssign for ActivityStats {
    fn add_assign(&mut self, other: Self) {
        self.time_min += other.time_min;
        self.distance_km += other.distance_km;
        self.elevation_m += other.elevation_m;
        self.load += other.load;
    }
}

impl Add for ActivityStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for ActivityStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a ActivityStats> for ActivityStats {
    fn sum<I: Iterator<Item = &'a ActivityStats>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
