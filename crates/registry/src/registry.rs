use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use stepline_types::{
    EventJournal, Identity, ItemId, ItemRecord, RegistryEvent, SequenceHeight, StepData,
    StepRecord,
};

use crate::error::RegistryError;
use crate::limits;
use crate::traits::{ProvenanceReader, ProvenanceWriter};

/// The provenance registry: one owned state machine for items, steps,
/// roles, and the pause flag.
///
/// Every mutation is all-or-nothing: all preconditions are checked before
/// the first write, so a failed call leaves no observable change. The
/// `&mut self` receivers on the write surface make mutations mutually
/// exclusive by construction; an embedding server that needs shared access
/// wraps the registry in its own lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRegistry {
    admin: Identity,
    oracle: Identity,
    paused: bool,
    height: SequenceHeight,
    items: BTreeMap<ItemId, ItemRecord>,
    journal: EventJournal,
}

impl ProvenanceRegistry {
    /// Create a registry with the deployer holding both the admin and
    /// oracle roles, mirroring deployment of the original contract.
    pub fn new(deployer: Identity) -> Self {
        Self {
            admin: deployer,
            oracle: deployer,
            paused: false,
            height: SequenceHeight::GENESIS,
            items: BTreeMap::new(),
            journal: EventJournal::new(),
        }
    }

    /// Current logical clock value.
    pub fn height(&self) -> SequenceHeight {
        self.height
    }

    /// Events accumulated since construction (or the last drain).
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Hand all buffered events to an off-chain indexer.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        self.journal.drain()
    }

    /// All registered item ids, ascending.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.keys().copied().collect()
    }

    /// Check one item's stored log against the registry invariants:
    /// capacity respected and recorded heights non-decreasing in index
    /// order. Logs produced through the public API always pass.
    pub fn validate_item(&self, item_id: ItemId) -> Result<(), RegistryError> {
        let item = self.items.get(&item_id).ok_or(RegistryError::ItemNotFound)?;
        if item.step_count() > limits::MAX_STEPS_PER_ITEM {
            return Err(RegistryError::MaxStepsReached);
        }
        for pair in item.steps.windows(2) {
            if pair[1].recorded_at < pair[0].recorded_at {
                return Err(RegistryError::InvalidIndex);
            }
        }
        Ok(())
    }

    fn ensure_not_paused(&self) -> Result<(), RegistryError> {
        if self.paused {
            return Err(RegistryError::Paused);
        }
        Ok(())
    }

    fn ensure_admin(&self, caller: &Identity) -> Result<(), RegistryError> {
        if *caller != self.admin {
            warn!(caller = %caller.short_hex(), "admin operation rejected");
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    fn ensure_live(identity: &Identity) -> Result<(), RegistryError> {
        if identity.is_null() {
            return Err(RegistryError::ZeroAddress);
        }
        Ok(())
    }
}

impl ProvenanceWriter for ProvenanceRegistry {
    fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        self.ensure_admin(caller)?;
        Self::ensure_live(&new_admin)?;

        self.admin = new_admin;
        self.height = self.height.next();
        info!(admin = %new_admin.short_hex(), height = %self.height, "admin transferred");
        Ok(())
    }

    fn set_oracle(
        &mut self,
        caller: &Identity,
        new_oracle: Identity,
    ) -> Result<(), RegistryError> {
        self.ensure_admin(caller)?;
        Self::ensure_live(&new_oracle)?;

        self.oracle = new_oracle;
        self.height = self.height.next();
        info!(oracle = %new_oracle.short_hex(), height = %self.height, "oracle reassigned");
        Ok(())
    }

    fn set_paused(&mut self, caller: &Identity, pause: bool) -> Result<bool, RegistryError> {
        self.ensure_admin(caller)?;

        self.paused = pause;
        self.height = self.height.next();
        info!(paused = pause, height = %self.height, "pause flag set");
        Ok(pause)
    }

    fn init_supply_chain(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        owner: Identity,
    ) -> Result<(), RegistryError> {
        self.ensure_not_paused()?;
        if *caller != self.admin && *caller != owner {
            warn!(caller = %caller.short_hex(), item = %item_id, "item registration rejected");
            return Err(RegistryError::NotAuthorized);
        }
        Self::ensure_live(&owner)?;
        if self.items.contains_key(&item_id) {
            return Err(RegistryError::AlreadyExists);
        }

        let at = self.height.next();
        self.items.insert(item_id, ItemRecord::new(owner, at));
        self.height = at;
        self.journal.record(RegistryEvent::ItemRegistered {
            item_id,
            owner,
            at,
        });
        info!(item = %item_id, owner = %owner.short_hex(), height = %at, "item registered");
        Ok(())
    }

    fn add_step(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        description: &str,
        data: Option<StepData>,
    ) -> Result<u32, RegistryError> {
        self.ensure_not_paused()?;
        if description.is_empty() || description.len() > limits::MAX_DESCRIPTION_BYTES {
            return Err(RegistryError::InvalidDescription);
        }

        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(RegistryError::ItemNotFound)?;
        if item.owner != *caller {
            warn!(caller = %caller.short_hex(), item = %item_id, "step append rejected");
            return Err(RegistryError::NotAuthorized);
        }
        if item.step_count() >= limits::MAX_STEPS_PER_ITEM {
            return Err(RegistryError::MaxStepsReached);
        }

        let at = self.height.next();
        let index = item.step_count();
        item.steps
            .push(StepRecord::new(at, *caller, description, data));
        self.height = at;
        self.journal.record(RegistryEvent::StepRecorded {
            item_id,
            index,
            actor: *caller,
            description: description.to_string(),
            at,
        });
        info!(item = %item_id, index, height = %at, "step recorded");
        Ok(index)
    }

    fn verify_step(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        index: u32,
    ) -> Result<(), RegistryError> {
        self.ensure_not_paused()?;
        if *caller != self.oracle {
            warn!(caller = %caller.short_hex(), item = %item_id, "verification rejected");
            return Err(RegistryError::NotOracle);
        }

        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(RegistryError::ItemNotFound)?;
        let step = item
            .steps
            .get_mut(index as usize)
            .ok_or(RegistryError::InvalidIndex)?;
        if step.verified {
            return Err(RegistryError::AlreadyVerified);
        }

        step.verified = true;
        let at = self.height.next();
        self.height = at;
        self.journal.record(RegistryEvent::StepVerified {
            item_id,
            index,
            oracle: *caller,
            at,
        });
        info!(item = %item_id, index, height = %at, "step verified");
        Ok(())
    }

    fn transfer_ownership(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        new_owner: Identity,
    ) -> Result<(), RegistryError> {
        self.ensure_not_paused()?;

        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(RegistryError::ItemNotFound)?;
        if item.owner != *caller {
            warn!(caller = %caller.short_hex(), item = %item_id, "ownership transfer rejected");
            return Err(RegistryError::NotAuthorized);
        }
        Self::ensure_live(&new_owner)?;

        let previous_owner = item.owner;
        item.owner = new_owner;
        let at = self.height.next();
        self.height = at;
        self.journal.record(RegistryEvent::OwnershipTransferred {
            item_id,
            previous_owner,
            new_owner,
            at,
        });
        info!(
            item = %item_id,
            from = %previous_owner.short_hex(),
            to = %new_owner.short_hex(),
            height = %at,
            "ownership transferred"
        );
        Ok(())
    }
}

impl ProvenanceReader for ProvenanceRegistry {
    fn item_info(&self, item_id: ItemId) -> Option<&ItemRecord> {
        self.items.get(&item_id)
    }

    fn step_count(&self, item_id: ItemId) -> Result<u32, RegistryError> {
        self.items
            .get(&item_id)
            .map(ItemRecord::step_count)
            .ok_or(RegistryError::ItemNotFound)
    }

    fn step(&self, item_id: ItemId, index: u32) -> Result<&StepRecord, RegistryError> {
        let item = self.items.get(&item_id).ok_or(RegistryError::ItemNotFound)?;
        item.steps
            .get(index as usize)
            .ok_or(RegistryError::InvalidIndex)
    }

    fn steps(&self, item_id: ItemId) -> Result<&[StepRecord], RegistryError> {
        let item = self.items.get(&item_id).ok_or(RegistryError::ItemNotFound)?;
        Ok(&item.steps)
    }

    fn is_fully_verified(&self, item_id: ItemId) -> Result<bool, RegistryError> {
        let item = self.items.get(&item_id).ok_or(RegistryError::ItemNotFound)?;
        if item.steps.is_empty() {
            return Ok(false);
        }
        // `all` short-circuits on the first unverified step.
        Ok(item.steps.iter().all(|step| step.verified))
    }

    fn admin(&self) -> &Identity {
        &self.admin
    }

    fn oracle(&self) -> &Identity {
        &self.oracle
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
