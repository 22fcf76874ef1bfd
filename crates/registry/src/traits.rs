use stepline_types::{Identity, ItemId, ItemRecord, StepData, StepRecord};

use crate::error::RegistryError;

/// Write boundary for the provenance registry.
///
/// Mutations take `&mut self`: the exclusive borrow is the serialization
/// discipline, so two appends to the same item can never interleave. Every
/// operation threads the caller identity explicitly; there is no ambient
/// "current caller".
pub trait ProvenanceWriter {
    fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError>;

    fn set_oracle(&mut self, caller: &Identity, new_oracle: Identity)
        -> Result<(), RegistryError>;

    /// Set the pause flag; returns the new flag value.
    fn set_paused(&mut self, caller: &Identity, pause: bool) -> Result<bool, RegistryError>;

    fn init_supply_chain(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        owner: Identity,
    ) -> Result<(), RegistryError>;

    /// Append a step to the item's log; returns the assigned index.
    fn add_step(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        description: &str,
        data: Option<StepData>,
    ) -> Result<u32, RegistryError>;

    fn verify_step(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        index: u32,
    ) -> Result<(), RegistryError>;

    fn transfer_ownership(
        &mut self,
        caller: &Identity,
        item_id: ItemId,
        new_owner: Identity,
    ) -> Result<(), RegistryError>;
}

/// Read boundary for the provenance registry. No authorization, no
/// mutation; available in both the active and paused states.
pub trait ProvenanceReader {
    fn item_info(&self, item_id: ItemId) -> Option<&ItemRecord>;

    fn step_count(&self, item_id: ItemId) -> Result<u32, RegistryError>;

    fn step(&self, item_id: ItemId, index: u32) -> Result<&StepRecord, RegistryError>;

    /// The whole log for an item, dense and in index order.
    fn steps(&self, item_id: ItemId) -> Result<&[StepRecord], RegistryError>;

    /// True iff the item has at least one step and every step is verified.
    fn is_fully_verified(&self, item_id: ItemId) -> Result<bool, RegistryError>;

    fn admin(&self) -> &Identity;

    fn oracle(&self) -> &Identity;

    fn is_paused(&self) -> bool;
}
