use std::str::FromStr;

use crate::{
    cache::{Cache, IsCache},
    error::SimError,
    replace::{direct::Direct, fifo::Fifo},
    system::CacheSystem,
};

/// Block size of the modeled caches. The trace format carries no size
/// information, so this is fixed rather than configurable.
pub const DEFAULT_BLOCK_SIZE: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    DirectMapped,
    FullyAssociative,
}

impl FromStr for Mapping {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dm" => Ok(Mapping::DirectMapped),
            "fa" => Ok(Mapping::FullyAssociative),
            other => Err(SimError::Config(format!(
                "unknown cache mapping `{other}`, expected `dm` or `fa`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Organization {
    Unified,
    Split,
}

impl FromStr for Organization {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uc" => Ok(Organization::Unified),
            "sc" => Ok(Organization::Split),
            other => Err(SimError::Config(format!(
                "unknown cache organization `{other}`, expected `uc` or `sc`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub cache_size: u32,
    pub block_size: u32,
    pub mapping: Mapping,
    pub organization: Organization,
}

impl SimConfig {
    pub fn new(cache_size: u32, mapping: Mapping, organization: Organization) -> Self {
        SimConfig {
            cache_size,
            block_size: DEFAULT_BLOCK_SIZE,
            mapping,
            organization,
        }
    }

    pub fn build(&self) -> Result<CacheSystem, SimError> {
        match self.organization {
            Organization::Unified => {
                let unit = self.unit("unified", self.cache_size)?;
                Ok(CacheSystem::unified(unit))
            }
            Organization::Split => {
                // each stream gets half the requested capacity
                let half = self.cache_size / 2;
                Ok(CacheSystem::split(
                    self.unit("instruction", half)?,
                    self.unit("data", half)?,
                ))
            }
        }
    }

    fn unit(&self, name: &str, size: u32) -> Result<Box<dyn IsCache>, SimError> {
        if self.block_size == 0 {
            return Err(SimError::Config(
                "block size must be at least one byte".into(),
            ));
        }
        let blocks = (size / self.block_size) as usize;
        if blocks == 0 {
            return Err(SimError::Config(format!(
                "{name} cache of {size} B cannot hold a single {}-byte block",
                self.block_size
            )));
        }

        let unit: Box<dyn IsCache> = match self.mapping {
            Mapping::DirectMapped => Box::new(Cache::<u64, Direct>::new(
                name,
                self.block_size,
                blocks,
                1,
            )?),
            Mapping::FullyAssociative => Box::new(Cache::<u64, Fifo>::new(
                name,
                self.block_size,
                1,
                blocks,
            )?),
        };
        Ok(unit)
    }
}
