use uuid::Uuid;

use crate::error::{PfError, PfResult};

/// Entity identifiers are plain strings, unique within a model.
pub type EntityId = String;

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeId = EntityId;
pub type ElementId = EntityId;
pub type MaterialId = EntityId;
pub type SectionId = EntityId;

/// Generate a fresh random (version 4) identifier.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Reject identifiers that cannot be used as registry keys.
pub fn check_entity_id(id: &str) -> PfResult<()> {
    if id.is_empty() {
        return Err(PfError::InvalidId {
            id: id.to_string(),
            reason: "empty",
        });
    }
    if id.trim() != id {
        return Err(PfError::InvalidId {
            id: id.to_string(),
            reason: "leading or trailing whitespace",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuid_v4() {
        let id = new_entity_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(new_entity_id(), id);
    }

    #[test]
    fn check_rejects_blank_ids() {
        assert!(check_entity_id("n1").is_ok());
        assert!(check_entity_id("").is_err());
        assert!(check_entity_id(" n1").is_err());
    }
}
