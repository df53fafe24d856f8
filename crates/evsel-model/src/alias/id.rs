use std::fmt;

use serde::{Deserialize, Serialize};

/// Event-selection trigger alias.
///
/// Discriminants are the numeric identifiers stored in the uploaded alias tables
/// and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum AliasId {
    INT7 = 0,
    EMC7,
    INT7inMUON,
    MuonSingleLowPt7,
    MuonSingleHighPt7,
    MuonUnlikeLowPt7,
    MuonLikeLowPt7,
    CUP8,
    CUP9,
    MUP10,
    MUP11,
    INT1,
    Unbiased,
    DMC7,
    EG1,
    EG2,
    EJ1,
    EJ2,
    DG1,
    DG2,
    DJ1,
    DJ2,
    TVXinTRD,
    TVXinEMC,
    TVXinPHOS,
    TVXinHMP,
    PHOS,
}

impl AliasId {
    /// Number of known aliases.
    pub const COUNT: usize = 27;

    /// All aliases in identifier order.
    pub const ALL: [AliasId; Self::COUNT] = [
        AliasId::INT7,
        AliasId::EMC7,
        AliasId::INT7inMUON,
        AliasId::MuonSingleLowPt7,
        AliasId::MuonSingleHighPt7,
        AliasId::MuonUnlikeLowPt7,
        AliasId::MuonLikeLowPt7,
        AliasId::CUP8,
        AliasId::CUP9,
        AliasId::MUP10,
        AliasId::MUP11,
        AliasId::INT1,
        AliasId::Unbiased,
        AliasId::DMC7,
        AliasId::EG1,
        AliasId::EG2,
        AliasId::EJ1,
        AliasId::EJ2,
        AliasId::DG1,
        AliasId::DG2,
        AliasId::DJ1,
        AliasId::DJ2,
        AliasId::TVXinTRD,
        AliasId::TVXinEMC,
        AliasId::TVXinPHOS,
        AliasId::TVXinHMP,
        AliasId::PHOS,
    ];

    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Human-readable label, e.g. `"kTVXinTRD"`.
    pub fn label(self) -> &'static str {
        match self {
            AliasId::INT7 => "kINT7",
            AliasId::EMC7 => "kEMC7",
            AliasId::INT7inMUON => "kINT7inMUON",
            AliasId::MuonSingleLowPt7 => "kMuonSingleLowPt7",
            AliasId::MuonSingleHighPt7 => "kMuonSingleHighPt7",
            AliasId::MuonUnlikeLowPt7 => "kMuonUnlikeLowPt7",
            AliasId::MuonLikeLowPt7 => "kMuonLikeLowPt7",
            AliasId::CUP8 => "kCUP8",
            AliasId::CUP9 => "kCUP9",
            AliasId::MUP10 => "kMUP10",
            AliasId::MUP11 => "kMUP11",
            AliasId::INT1 => "kINT1",
            AliasId::Unbiased => "kUnbiased",
            AliasId::DMC7 => "kDMC7",
            AliasId::EG1 => "kEG1",
            AliasId::EG2 => "kEG2",
            AliasId::EJ1 => "kEJ1",
            AliasId::EJ2 => "kEJ2",
            AliasId::DG1 => "kDG1",
            AliasId::DG2 => "kDG2",
            AliasId::DJ1 => "kDJ1",
            AliasId::DJ2 => "kDJ2",
            AliasId::TVXinTRD => "kTVXinTRD",
            AliasId::TVXinEMC => "kTVXinEMC",
            AliasId::TVXinPHOS => "kTVXinPHOS",
            AliasId::TVXinHMP => "kTVXinHMP",
            AliasId::PHOS => "kPHOS",
        }
    }

    /// Cluster a matched class must belong to, if this alias is guarded.
    ///
    /// Some configurations reuse the same class name across clusters; for these
    /// aliases only the class in the detector's own cluster is accepted.
    pub fn required_cluster(self) -> Option<&'static str> {
        match self {
            AliasId::TVXinTRD => Some("TRD"),
            AliasId::TVXinEMC => Some("EMC"),
            AliasId::TVXinPHOS => Some("PHSCPV"),
            AliasId::TVXinHMP => Some("HMP"),
            _ => None,
        }
    }
}

impl fmt::Display for AliasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_match_table_positions() {
        for (pos, alias) in AliasId::ALL.iter().enumerate() {
            assert_eq!(alias.id() as usize, pos);
            assert_eq!(AliasId::from_id(pos as u32), Some(*alias));
        }
        assert_eq!(AliasId::EMC7.id(), 1);
        assert_eq!(AliasId::DMC7.id(), 13);
        assert_eq!(AliasId::TVXinTRD.id(), 22);
        assert_eq!(AliasId::PHOS.id(), 26);
        assert_eq!(AliasId::from_id(AliasId::COUNT as u32), None);
    }

    #[test]
    fn only_four_aliases_are_cluster_guarded() {
        let guarded: Vec<_> = AliasId::ALL
            .iter()
            .filter_map(|a| a.required_cluster().map(|c| (*a, c)))
            .collect();

        assert_eq!(
            guarded,
            vec![
                (AliasId::TVXinTRD, "TRD"),
                (AliasId::TVXinEMC, "EMC"),
                (AliasId::TVXinPHOS, "PHSCPV"),
                (AliasId::TVXinHMP, "HMP"),
            ]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(AliasId::TVXinPHOS.to_string(), "kTVXinPHOS");
    }
}
