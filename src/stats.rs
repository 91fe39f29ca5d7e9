use std::fmt;

use serde::Serialize;

use crate::replace::AccessResult;

/// Hit/miss counters for one statistics scope, zero-initialized and only ever
/// incremented. Accesses never trail hits.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Stats {
    pub accesses: u64,
    pub hits: u64,
}

impl Stats {
    pub fn record(&mut self, result: AccessResult) {
        self.accesses += 1;
        if let AccessResult::Hit = result {
            self.hits += 1;
        }
    }

    pub fn misses(&self) -> u64 {
        self.accesses - self.hits
    }

    /// Ratio of hits to accesses; 0.0 when nothing was accessed, so an empty
    /// trace reports a rate instead of dividing by zero.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitReport {
    pub name: String,
    pub accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

impl UnitReport {
    pub fn new(name: &str, stats: &Stats) -> Self {
        UnitReport {
            name: name.to_string(),
            accesses: stats.accesses,
            hits: stats.hits,
            misses: stats.misses(),
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Final run summary: global counters plus, under split organization, one
/// entry per unit.
#[derive(Debug, Serialize)]
pub struct Report {
    pub accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub units: Vec<UnitReport>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Cache Statistics")?;
        writeln!(f, "-----------------")?;
        writeln!(f)?;
        writeln!(f, "Accesses: {}", self.accesses)?;
        writeln!(f, "Hits:     {}", self.hits)?;
        writeln!(f, "Hit Rate: {:.4}", self.hit_rate)?;
        for unit in &self.units {
            writeln!(f)?;
            writeln!(f, "{} cache", unit.name)?;
            writeln!(f, "Accesses: {}", unit.accesses)?;
            writeln!(f, "Hits:     {}", unit.hits)?;
            writeln!(f, "Hit Rate: {:.4}", unit.hit_rate)?;
        }
        Ok(())
    }
}
