use crate::{
    cache::IsCache,
    error::SimError,
    replace::AccessResult,
    stats::{Report, Stats, UnitReport},
    trace::{AccessKind, MemAccess},
};

enum Units {
    /// Instruction and data accesses target the same store. Access is
    /// strictly sequential, so one owned unit serves both routes.
    Unified(Box<dyn IsCache>),
    Split {
        instructions: Box<dyn IsCache>,
        data: Box<dyn IsCache>,
    },
}

/// The modeled cache as a whole: one or two units plus the global counters.
pub struct CacheSystem {
    units: Units,
    total: Stats,
}

impl CacheSystem {
    pub fn unified(unit: Box<dyn IsCache>) -> Self {
        CacheSystem {
            units: Units::Unified(unit),
            total: Stats::default(),
        }
    }

    pub fn split(instructions: Box<dyn IsCache>, data: Box<dyn IsCache>) -> Self {
        CacheSystem {
            units: Units::Split { instructions, data },
            total: Stats::default(),
        }
    }

    pub fn access(&mut self, access: &MemAccess) -> Result<AccessResult, SimError> {
        let unit = match &mut self.units {
            Units::Unified(unit) => unit,
            Units::Split { instructions, data } => match access.kind {
                AccessKind::Instruction => instructions,
                AccessKind::Data => data,
            },
        };
        let result = unit.access(access.address)?;
        self.total.record(result);
        Ok(result)
    }

    pub fn report(&self) -> Report {
        let units = match &self.units {
            Units::Unified(_) => Vec::new(),
            Units::Split { instructions, data } => vec![
                UnitReport::new(instructions.name(), instructions.stats()),
                UnitReport::new(data.name(), data.stats()),
            ],
        };
        Report {
            accesses: self.total.accesses,
            hits: self.total.hits,
            misses: self.total.misses(),
            hit_rate: self.total.hit_rate(),
            units,
        }
    }
}
