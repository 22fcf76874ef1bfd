//! Capacity bounds enforced by the registry.

use stepline_types::StepData;

/// Maximum number of steps in one item's provenance log.
pub const MAX_STEPS_PER_ITEM: u32 = 50;

/// Maximum step description length in bytes.
pub const MAX_DESCRIPTION_BYTES: usize = 256;

/// Maximum step attachment size in bytes, fixed by the data layer.
pub const MAX_STEP_DATA_BYTES: usize = StepData::MAX_BYTES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_match_the_contract_constants() {
        assert_eq!(MAX_STEPS_PER_ITEM, 50);
        assert_eq!(MAX_DESCRIPTION_BYTES, 256);
        assert_eq!(MAX_STEP_DATA_BYTES, 1024);
    }
}
