use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AliasId, ModelError};

/// Highest class index a trigger alias can refer to.
const MAX_CLASS_INDEX: u32 = 99;

/// Width of each of the two trigger masks.
const MASK_WIDTH: u32 = 50;

/// Alias table of one run: alias → CTP class indices.
///
/// Besides the index lists, two trigger masks are kept per alias: `trigger_mask`
/// for classes 0..50 and `trigger_mask_next50` for classes 50..100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerAliases {
    alias_to_class_ids: BTreeMap<u32, Vec<u32>>,
    alias_to_trigger_mask: BTreeMap<u32, u64>,
    alias_to_trigger_mask_next50: BTreeMap<u32, u64>,
}

impl TriggerAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `alias` is present, even if no class is ever added to it.
    pub fn declare(&mut self, alias: AliasId) {
        let id = alias.id();
        self.alias_to_class_ids.entry(id).or_default();
        self.alias_to_trigger_mask.entry(id).or_default();
        self.alias_to_trigger_mask_next50.entry(id).or_default();
    }

    /// Record `class_id` under `alias` and set the matching trigger-mask bit.
    pub fn add_class_id(&mut self, alias: AliasId, class_id: u32) -> Result<(), ModelError> {
        if class_id > MAX_CLASS_INDEX {
            return Err(ModelError::ClassIndexOutOfRange {
                alias: alias.id(),
                index: class_id,
            });
        }
        self.declare(alias);

        let id = alias.id();
        if class_id < MASK_WIDTH {
            *self.alias_to_trigger_mask.entry(id).or_default() |= 1u64 << class_id;
        } else {
            *self.alias_to_trigger_mask_next50.entry(id).or_default() |= 1u64 << (class_id - MASK_WIDTH);
        }
        self.alias_to_class_ids.entry(id).or_default().push(class_id);
        Ok(())
    }

    pub fn contains(&self, alias: AliasId) -> bool {
        self.alias_to_class_ids.contains_key(&alias.id())
    }

    /// Class indices bound to `alias`; `None` if the alias is not in the table.
    pub fn class_ids(&self, alias: AliasId) -> Option<&[u32]> {
        self.alias_to_class_ids.get(&alias.id()).map(Vec::as_slice)
    }

    pub fn trigger_mask(&self, alias: AliasId) -> u64 {
        self.alias_to_trigger_mask.get(&alias.id()).copied().unwrap_or(0)
    }

    pub fn trigger_mask_next50(&self, alias: AliasId) -> u64 {
        self.alias_to_trigger_mask_next50
            .get(&alias.id())
            .copied()
            .unwrap_or(0)
    }

    /// Number of aliases in the table.
    pub fn len(&self) -> usize {
        self.alias_to_class_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_to_class_ids.is_empty()
    }

    /// Number of aliases bound to at least one class.
    pub fn bound_count(&self) -> usize {
        self.alias_to_class_ids.values().filter(|v| !v.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.alias_to_class_ids.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl fmt::Display for TriggerAliases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, classes) in self.iter() {
            let label = AliasId::from_id(id).map(AliasId::label).unwrap_or("unknown");
            writeln!(f, "{id:>2} {label}: {classes:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_alias_is_present_but_empty() {
        let mut t = TriggerAliases::new();
        t.declare(AliasId::TVXinHMP);
        assert!(t.contains(AliasId::TVXinHMP));
        assert_eq!(t.class_ids(AliasId::TVXinHMP), Some(&[][..]));
        assert_eq!(t.bound_count(), 0);
        assert_eq!(t.class_ids(AliasId::EMC7), None);
    }

    #[test]
    fn add_class_sets_low_and_high_masks() {
        let mut t = TriggerAliases::new();
        t.add_class_id(AliasId::EMC7, 3).unwrap();
        t.add_class_id(AliasId::EMC7, 52).unwrap();

        assert_eq!(t.class_ids(AliasId::EMC7), Some(&[3, 52][..]));
        assert_eq!(t.trigger_mask(AliasId::EMC7), 1 << 3);
        assert_eq!(t.trigger_mask_next50(AliasId::EMC7), 1 << 2);
        assert_eq!(t.bound_count(), 1);
    }

    #[test]
    fn class_index_above_99_is_rejected() {
        let mut t = TriggerAliases::new();
        let err = t.add_class_id(AliasId::PHOS, 100).unwrap_err();
        assert_eq!(
            err,
            ModelError::ClassIndexOutOfRange {
                alias: AliasId::PHOS.id(),
                index: 100
            }
        );
        assert!(!t.contains(AliasId::PHOS));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut t = TriggerAliases::new();
        t.add_class_id(AliasId::TVXinPHOS, 7).unwrap();
        t.add_class_id(AliasId::TVXinPHOS, 7).unwrap();
        assert_eq!(t.class_ids(AliasId::TVXinPHOS), Some(&[7, 7][..]));
    }

    #[test]
    fn serializes_with_numeric_alias_keys() {
        let mut t = TriggerAliases::new();
        t.add_class_id(AliasId::TVXinTRD, 1).unwrap();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["aliasToClassIds"]["22"], serde_json::json!([1]));
        assert_eq!(json["aliasToTriggerMask"]["22"], serde_json::json!(2));
    }
}
