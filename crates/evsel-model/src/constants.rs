/// Storage path of the per-run CTP configuration.
pub const CTP_CONFIG_PATH: &str = "CTP/Config/Config";

/// Storage path of the uploaded trigger alias tables.
pub const TRIGGER_ALIASES_PATH: &str = "EventSelection/TriggerAliases";

/// Storage path of the run-condition table holding SOR/EOR.
pub const RUN_INFORMATION_PATH: &str = "RCT/Info/RunInformation";

/// Metadata key carrying the run number.
pub const META_RUN_NUMBER: &str = "runNumber";

/// Shifted back from the start of run when computing the validity window.
pub const SOR_TOLERANCE_MS: u64 = 1_000;

/// Added to the end of run when computing the validity window.
pub const EOR_TOLERANCE_MS: u64 = 10_000;

/// Run whose start of run is replaced when computing its validity window.
pub const SOR_OVERRIDE_RUN: crate::RunNumber = 529_414;

/// Start of run used for [`SOR_OVERRIDE_RUN`].
pub const SOR_OVERRIDE_MS: u64 = 1_668_809_980_000;

/// Validity start of the run-independent alias object.
pub const DEFAULT_OBJECT_START_MS: u64 = 1_672_531_200_000;

/// Validity end of the run-independent alias object.
pub const DEFAULT_OBJECT_END_MS: u64 = 1_893_456_000_000;

/// Metadata value used for the run-independent alias object.
pub const DEFAULT_OBJECT_RUN_LABEL: &str = "default";
