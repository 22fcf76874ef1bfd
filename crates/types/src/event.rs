//! Registry events and the journal that accumulates them.
//!
//! Every successful item/step mutation produces exactly one event, in
//! operation order. External collaborators (search indexers, token
//! registries) consume the journal and treat the item id as the join key.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::item::ItemId;
use crate::temporal::SequenceHeight;

/// A structured record of one successful registry mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    ItemRegistered {
        item_id: ItemId,
        owner: Identity,
        at: SequenceHeight,
    },
    StepRecorded {
        item_id: ItemId,
        index: u32,
        actor: Identity,
        description: String,
        at: SequenceHeight,
    },
    StepVerified {
        item_id: ItemId,
        index: u32,
        oracle: Identity,
        at: SequenceHeight,
    },
    OwnershipTransferred {
        item_id: ItemId,
        previous_owner: Identity,
        new_owner: Identity,
        at: SequenceHeight,
    },
}

impl RegistryEvent {
    /// The item this event concerns.
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::ItemRegistered { item_id, .. }
            | Self::StepRecorded { item_id, .. }
            | Self::StepVerified { item_id, .. }
            | Self::OwnershipTransferred { item_id, .. } => *item_id,
        }
    }

    /// Sequence height at which the mutation was applied.
    pub fn height(&self) -> SequenceHeight {
        match self {
            Self::ItemRegistered { at, .. }
            | Self::StepRecorded { at, .. }
            | Self::StepVerified { at, .. }
            | Self::OwnershipTransferred { at, .. } => *at,
        }
    }
}

/// Append-only journal of registry events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventJournal {
    events: Vec<RegistryEvent>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Called by the registry after a mutation commits.
    pub fn record(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }

    /// All events in operation order.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Events concerning a single item, in operation order.
    pub fn events_for_item(&self, item_id: ItemId) -> Vec<&RegistryEvent> {
        self.events
            .iter()
            .filter(|event| event.item_id() == item_id)
            .collect()
    }

    /// Remove and return all buffered events, e.g. after an indexer flush.
    pub fn drain(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
