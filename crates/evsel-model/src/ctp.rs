use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RunNumber;

/// Trigger class of a CTP configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtpClass {
    /// Class name, e.g. `"CMTVX-B-NOPF-TRD"`.
    pub name: String,
    /// Single-bit mask identifying the class in the trigger word.
    pub class_mask: u64,
    /// Name of the detector cluster the class reads out.
    pub cluster: String,
}

impl CtpClass {
    /// Class with the single-bit mask of `index`.
    ///
    /// An index of 64 or more does not fit the mask; the class is then built
    /// with an empty mask and has no [`index`](Self::index).
    pub fn new(name: impl Into<String>, index: u32, cluster: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_mask: 1u64.checked_shl(index).unwrap_or(0),
            cluster: cluster.into(),
        }
    }

    /// Class index: position of the lowest set bit of the class mask.
    ///
    /// `None` for a class without any bit set.
    #[inline]
    pub fn index(&self) -> Option<u32> {
        (self.class_mask != 0).then(|| self.class_mask.trailing_zeros())
    }
}

/// Snapshot of the trigger configuration used for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtpConfiguration {
    pub run_number: RunNumber,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub classes: Vec<CtpClass>,
}

impl CtpConfiguration {
    pub fn classes(&self) -> &[CtpClass] {
        &self.classes
    }

    /// Multi-line human-readable dump of the configuration.
    pub fn config_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CtpConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "run {} config {:?}: {} classes", self.run_number, self.name, self.classes.len())?;
        for class in &self.classes {
            match class.index() {
                Some(idx) => writeln!(f, "  [{idx:>2}] {} cluster={}", class.name, class.cluster)?,
                None => writeln!(f, "  [--] {} cluster={}", class.name, class.cluster)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_lowest_set_bit() {
        assert_eq!(CtpClass::new("A", 0, "EMC").index(), Some(0));
        assert_eq!(CtpClass::new("A", 63, "EMC").index(), Some(63));

        let cls = CtpClass {
            name: "B".into(),
            class_mask: 0b1000,
            cluster: "TRD".into(),
        };
        assert_eq!(cls.index(), Some(3));

        let empty = CtpClass {
            name: "C".into(),
            class_mask: 0,
            cluster: "TRD".into(),
        };
        assert_eq!(empty.index(), None);
    }

    #[test]
    fn index_beyond_mask_width_yields_unindexed_class() {
        let cls = CtpClass::new("WIDE", 64, "EMC");
        assert_eq!(cls.class_mask, 0);
        assert_eq!(cls.index(), None);
        assert_eq!(CtpClass::new("WIDER", u32::MAX, "EMC").index(), None);
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "runNumber": 600000,
            "name": "pp-2023",
            "classes": [
                {"name": "CMTVX-B-NOPF-TRD", "classMask": 4, "cluster": "TRD"}
            ]
        }"#;
        let cfg: CtpConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.run_number, 600000);
        assert_eq!(cfg.classes()[0].index(), Some(2));
    }

    #[test]
    fn config_string_lists_every_class() {
        let cfg = CtpConfiguration {
            run_number: 1,
            name: "test".into(),
            classes: vec![CtpClass::new("X", 5, "EMC"), CtpClass::new("Y", 6, "TRD")],
        };
        let dump = cfg.config_string();
        assert!(dump.contains("2 classes"));
        assert!(dump.contains("[ 5] X cluster=EMC"));
        assert!(dump.contains("[ 6] Y cluster=TRD"));
    }
}
