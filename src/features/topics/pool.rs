//! Per-topic fact pools
//!
//! Facts are drawn without replacement. An exhausted pool is refilled with a
//! fresh copy of the persona's facts before the next draw, so a topic never
//! repeats a fact until every one of its facts has been used.

use anyhow::{anyhow, Result};
use log::debug;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

use super::Topic;
use crate::features::personas::Persona;

#[derive(Debug, Clone)]
pub struct FactPools {
    persona: Arc<Persona>,
    pools: HashMap<Topic, Vec<String>>,
}

impl FactPools {
    /// Start every pool as an independent copy of the persona's facts
    pub fn new(persona: Arc<Persona>) -> Self {
        let pools = persona
            .topics
            .iter()
            .map(|(topic, facts)| (*topic, facts.clone()))
            .collect();
        FactPools { persona, pools }
    }

    /// Facts still available for `topic` before the next refill
    pub fn remaining(&self, topic: Topic) -> usize {
        self.pools.get(&topic).map_or(0, Vec::len)
    }

    /// Draw one fact for `topic`, refilling from the persona first if the pool is empty
    pub fn draw<R: Rng + ?Sized>(&mut self, topic: Topic, rng: &mut R) -> Result<String> {
        let originals = self
            .persona
            .facts(topic)
            .filter(|facts| !facts.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Persona {} has no facts for topic {topic}",
                    self.persona.name
                )
            })?;

        let pool = self.pools.entry(topic).or_default();
        if pool.is_empty() {
            debug!("Refilling {topic} pool with {} facts", originals.len());
            pool.extend(originals.iter().cloned());
        }

        let index = rng.random_range(0..pool.len());
        Ok(pool.remove(index))
    }
}
