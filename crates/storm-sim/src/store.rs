//! The storm store: canonical in-memory storm state backed by a hecs world.
//!
//! Storms are spawned once at initialization and mutated only through
//! `apply_update` / `apply_tick`, which centralize the invariant checks.
//! Reads hand out owned `StormEntity` snapshots, never references into
//! the world.

use std::collections::{HashMap, HashSet};

use hecs::{Entity, World};
use tracing::{debug, info};

use storm_core::components::{
    ForecastTrack, LastUpdate, Severity, StormIdentity, StormNarrative, StormVitals,
};
use storm_core::entity::{StormEntity, StormUpdate};
use storm_core::error::StormError;
use storm_core::types::Movement;

type StormQuery<'a> = (
    &'a StormIdentity,
    &'a Severity,
    &'a StormVitals,
    &'a Movement,
    &'a ForecastTrack,
    &'a StormNarrative,
    &'a LastUpdate,
);

/// Mapping from storm id to entity, in insertion order.
pub struct StormStore {
    world: World,
    order: Vec<Entity>,
    index: HashMap<u32, Entity>,
}

impl StormStore {
    /// Validate every seed and spawn them in order.
    ///
    /// Nothing is spawned if any seed is rejected.
    pub fn initialize(seeds: Vec<StormEntity>) -> Result<Self, StormError> {
        let mut seen = HashSet::with_capacity(seeds.len());
        for seed in &seeds {
            seed.validate()?;
            if !seen.insert(seed.id) {
                return Err(StormError::DuplicateId { id: seed.id });
            }
        }

        let mut world = World::new();
        let mut order = Vec::with_capacity(seeds.len());
        let mut index = HashMap::with_capacity(seeds.len());
        for seed in seeds {
            let id = seed.id;
            let entity = world.spawn(seed.into_bundle());
            order.push(entity);
            index.insert(id, entity);
        }

        info!(storms = order.len(), "storm store initialized");
        Ok(Self {
            world,
            order,
            index,
        })
    }

    /// Number of storms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    /// Every storm in insertion order.
    pub fn all(&self) -> Vec<StormEntity> {
        self.order
            .iter()
            .filter_map(|&entity| self.read(entity))
            .collect()
    }

    /// Storm ids in insertion order.
    pub fn ids(&self) -> Vec<u32> {
        self.order
            .iter()
            .filter_map(|&entity| self.world.get::<&StormIdentity>(entity).ok().map(|i| i.id))
            .collect()
    }

    pub fn get(&self, id: u32) -> Result<StormEntity, StormError> {
        let entity = self.entity(id)?;
        self.read(entity).ok_or(StormError::NotFound { id })
    }

    /// Mutable state of every storm, in insertion order, as of now.
    /// The tick computes all updates from this before applying any.
    pub fn vitals_snapshot(&self) -> Vec<(u32, StormVitals, Movement)> {
        self.order
            .iter()
            .filter_map(|&entity| {
                let mut query = self
                    .world
                    .query_one::<(&StormIdentity, &StormVitals, &Movement)>(entity)
                    .ok()?;
                let row = query
                    .get()
                    .map(|(identity, vitals, movement)| (identity.id, *vitals, movement.clone()));
                row
            })
            .collect()
    }

    /// Replace one storm's mutable fields.
    pub fn apply_update(&mut self, id: u32, update: StormUpdate) -> Result<(), StormError> {
        let entity = self.entity(id)?;
        update.check(id)?;
        self.write(entity, update);
        Ok(())
    }

    /// Apply a whole tick. Every update is checked before any is written,
    /// so a rejected tick leaves the store untouched.
    pub fn apply_tick(&mut self, updates: &[(u32, StormUpdate)]) -> Result<(), StormError> {
        let mut resolved = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            let entity = self.entity(*id)?;
            update.check(*id)?;
            resolved.push((entity, *update));
        }

        for (entity, update) in resolved {
            self.write(entity, update);
        }
        debug!(storms = updates.len(), "tick applied");
        Ok(())
    }

    fn entity(&self, id: u32) -> Result<Entity, StormError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(StormError::NotFound { id })
    }

    fn read(&self, entity: Entity) -> Option<StormEntity> {
        let mut query = self.world.query_one::<StormQuery<'_>>(entity).ok()?;
        let storm = query.get().map(
            |(identity, severity, vitals, movement, track, narrative, last_update)| {
                StormEntity::from_components(
                    identity,
                    severity,
                    vitals,
                    movement,
                    track,
                    narrative,
                    last_update,
                )
            },
        );
        storm
    }

    fn write(&mut self, entity: Entity, update: StormUpdate) {
        if let Ok((vitals, last_update)) = self
            .world
            .query_one_mut::<(&mut StormVitals, &mut LastUpdate)>(entity)
        {
            *vitals = update.vitals;
            last_update.0 = update.last_update;
        }
    }
}
