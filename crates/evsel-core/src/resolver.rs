use tracing::{debug, warn};

use evsel_model::{AliasId, AliasSet, CtpClass, CtpConfiguration, ModelError, TriggerAliases};

/// Maps the class-name patterns of an [`AliasSet`] onto the classes of a CTP configuration.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    aliases: AliasSet,
}

impl AliasResolver {
    pub fn new(aliases: AliasSet) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasSet {
        &self.aliases
    }

    /// Build the alias table of one configuration.
    ///
    /// Every alias of the set appears in the result. For each pattern the first
    /// class with the same name (case-insensitive) that passes the alias's cluster
    /// requirement is recorded; patterns without such a class are dropped.
    pub fn resolve(&self, config: &CtpConfiguration) -> Result<TriggerAliases, ModelError> {
        let mut table = TriggerAliases::new();

        for alias in self.aliases.aliases() {
            table.declare(alias);
            debug!(alias = %alias, patterns = self.aliases.raw(alias).unwrap_or_default(), "resolving alias");

            for pattern in self.aliases.patterns(alias) {
                match find_class(alias, pattern, config.classes()) {
                    Some((index, class)) => {
                        debug!(
                            alias = %alias,
                            index,
                            name = %class.name,
                            cluster = %class.cluster,
                            "class matched"
                        );
                        table.add_class_id(alias, index)?;
                    }
                    None => debug!(alias = %alias, pattern, "no class matched"),
                }
            }
        }
        Ok(table)
    }
}

fn find_class<'c>(alias: AliasId, pattern: &str, classes: &'c [CtpClass]) -> Option<(u32, &'c CtpClass)> {
    for class in classes {
        if !class.name.eq_ignore_ascii_case(pattern) {
            continue;
        }
        if let Some(cluster) = alias.required_cluster()
            && !class.cluster.eq_ignore_ascii_case(cluster)
        {
            debug!(alias = %alias, name = %class.name, cluster = %class.cluster, "class rejected: cluster mismatch");
            continue;
        }
        match class.index() {
            Some(index) => return Some((index, class)),
            None => warn!(alias = %alias, name = %class.name, "class has an empty mask"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(classes: Vec<CtpClass>) -> CtpConfiguration {
        CtpConfiguration {
            run_number: 600000,
            name: "test".into(),
            classes,
        }
    }

    #[test]
    fn cluster_guard_rejects_wrong_cluster_even_on_exact_name() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::TVXinTRD, "CMTVX-B-NOPF-TRD")]));
        let cfg = config(vec![CtpClass::new("CMTVX-B-NOPF-TRD", 3, "EMC")]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::TVXinTRD), Some(&[][..]));
    }

    #[test]
    fn cluster_guard_keeps_scanning_after_rejection() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::TVXinEMC, "C0TVX-B-NOPF-EMC")]));
        let cfg = config(vec![
            CtpClass::new("C0TVX-B-NOPF-EMC", 1, "PHSCPV"),
            CtpClass::new("c0tvx-b-nopf-emc", 9, "emc"),
            CtpClass::new("C0TVX-B-NOPF-EMC", 12, "EMC"),
        ]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::TVXinEMC), Some(&[9][..]));
    }

    #[test]
    fn unguarded_alias_takes_first_name_match_in_any_cluster() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::EMC7, "CTVXEMC-B-NOPF-EMC")]));
        let cfg = config(vec![
            CtpClass::new("CTVXEMC-B-NOPF-EMC", 4, "TRD"),
            CtpClass::new("CTVXEMC-B-NOPF-EMC", 5, "EMC"),
        ]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::EMC7), Some(&[4][..]));
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::TVXinTRD, "minbias_TVX")]));
        let cfg = config(vec![CtpClass::new("MINBIAS_TVX", 2, "trd")]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::TVXinTRD), Some(&[2][..]));
    }

    #[test]
    fn every_alias_present_even_when_unmatched() {
        let resolver = AliasResolver::new(AliasSet::default_set());
        let table = resolver.resolve(&config(Vec::new())).unwrap();

        assert_eq!(table.len(), 7);
        assert_eq!(table.bound_count(), 0);
        for alias in resolver.aliases().aliases() {
            assert_eq!(table.class_ids(alias), Some(&[][..]));
        }
    }

    #[test]
    fn case_folding_is_ascii_only() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::INT7, "straße")]));
        // Unicode uppercasing would turn "ß" into "SS".
        let cfg = config(vec![
            CtpClass::new("STRASSE", 1, "X"),
            CtpClass::new("STRAßE", 2, "X"),
        ]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::INT7), Some(&[2][..]));
    }

    #[test]
    fn empty_pattern_binds_nothing() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::CUP8, "")]));
        let cfg = config(vec![CtpClass::new("", 0, "")]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::CUP8), Some(&[][..]));
    }

    #[test]
    fn patterns_accumulate_in_definition_order() {
        let resolver = AliasResolver::new(AliasSet::default_set());
        let cfg = config(vec![
            CtpClass::new("CMTVXTCE-B-NOPF-EMC", 20, "EMC"),
            CtpClass::new("C0TVX-B-NOPF-EMC", 10, "EMC"),
            CtpClass::new("CMTVXTSC-B-NOPF-PHSCPV", 30, "PHSCPV"),
        ]);

        let table = resolver.resolve(&cfg).unwrap();
        assert_eq!(table.class_ids(AliasId::TVXinEMC), Some(&[10, 20][..]));
        // The PHOS pattern lists the same class twice.
        assert_eq!(table.class_ids(AliasId::TVXinPHOS), Some(&[30, 30][..]));
        assert_eq!(table.bound_count(), 2);
    }

    #[test]
    fn class_with_empty_mask_is_skipped() {
        let resolver = AliasResolver::new(AliasSet::from_pairs([(AliasId::INT7, "BIG")]));
        let cfg = config(vec![CtpClass {
            name: "BIG".into(),
            class_mask: 0,
            cluster: "X".into(),
        }]);
        assert_eq!(resolver.resolve(&cfg).unwrap().bound_count(), 0);
    }
}
