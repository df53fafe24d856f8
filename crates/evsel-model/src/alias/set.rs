use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::AliasId;

/// Which static alias definition to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AliasSetKind {
    /// pp / default data-taking.
    #[default]
    Default,
    /// Pb–Pb data-taking.
    HeavyIon,
}

/// Immutable mapping from alias to a comma-separated list of CTP class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasSet(BTreeMap<AliasId, String>);

impl AliasSet {
    pub fn from_kind(kind: AliasSetKind) -> Self {
        match kind {
            AliasSetKind::Default => Self::default_set(),
            AliasSetKind::HeavyIon => Self::heavy_ion(),
        }
    }

    pub fn default_set() -> Self {
        Self::from_pairs([
            (AliasId::EMC7, "CTVXEMC-B-NOPF-EMC"),
            (AliasId::DMC7, "CTVXDMC-B-NOPF-EMC"),
            (AliasId::TVXinTRD, "CMTVX-B-NOPF-TRD,minbias_TVX"),
            (
                AliasId::TVXinEMC,
                "C0TVX-B-NOPF-EMC,minbias_TVX_L0,CMTVXTSC-B-NOPF-EMC,CMTVXTCE-B-NOPF-EMC",
            ),
            (
                AliasId::TVXinPHOS,
                "C0TVX-B-NOPF-PHSCPV,minbias_TVX_L0,CMTVXTSC-B-NOPF-PHSCPV,CMTVXTSC-B-NOPF-PHSCPV",
            ),
            (
                AliasId::TVXinHMP,
                "C0TVX-B-NOPF-HMP,minbias_TVX_L0,CMTVXTSC-B-NOPF-HMP",
            ),
            (
                AliasId::PHOS,
                "CTVXPH0-B-NOPF-PHSCPV,mb_PH0_TVX,CPH0SC-B-NOPF-PHSCPV,CPH0CE-B-NOPF-PHSCPV",
            ),
        ])
    }

    pub fn heavy_ion() -> Self {
        Self::from_pairs([
            (AliasId::TVXinTRD, "CMTVXTSC-B-NOPF-TRD,CMTVXTCE-B-NOPF-TRD"),
            (
                AliasId::TVXinEMC,
                "CMTVXTSC-B-NOPF-EMC,CMTVXTCE-B-NOPF-EMC,C0TVXTSC-B-NOPF-EMC,C0TVXTCE-B-NOPF-EMC",
            ),
            (
                AliasId::TVXinPHOS,
                "CMTVXTSC-B-NOPF-PHSCPV,CMTVXTCE-B-NOPF-PHSCPV,C0TVXTSC-B-NOPF-PHSCPV,C0TVXTCE-B-NOPF-PHSCPV",
            ),
            (AliasId::TVXinHMP, "CMTVXTSC-B-NOPF-HMP,CMTVXTCE-B-NOPF-HMP"),
            (AliasId::PHOS, "CPH0SC-B-NOPF-PHSCPV,CPH0CE-B-NOPF-PHSCPV"),
        ])
    }

    /// Build a set from explicit `(alias, patterns)` pairs; later pairs override earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (AliasId, S)>,
        S: Into<String>,
    {
        Self(pairs.into_iter().map(|(id, p)| (id, p.into())).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Aliases defined by this set, in identifier order.
    pub fn aliases(&self) -> impl Iterator<Item = AliasId> + '_ {
        self.0.keys().copied()
    }

    /// Raw pattern string of an alias.
    pub fn raw(&self, alias: AliasId) -> Option<&str> {
        self.0.get(&alias).map(String::as_str)
    }

    /// Class-name tokens of an alias, in definition order. Empty tokens are skipped.
    pub fn patterns(&self, alias: AliasId) -> impl Iterator<Item = &str> + '_ {
        self.raw(alias)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl Default for AliasSet {
    fn default() -> Self {
        Self::default_set()
    }
}
