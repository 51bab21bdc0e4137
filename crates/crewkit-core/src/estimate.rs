//! Token, cost, and time estimation for team workflows.
//!
//! Projections come from a fixed calibration table of per-phase token
//! estimates, scaled by team size and an optional custom multiplier, then
//! converted to dollars and hours with fixed pricing constants. Counts in
//! the table are thousands of tokens; reports carry absolute tokens.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Workflow phase, in canonical execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Requirements gathering and task breakdown.
    Planning,
    /// Implementation work.
    Development,
    /// Test authoring and verification.
    Testing,
    /// Docs, changelogs, context files.
    Documentation,
}

impl Phase {
    /// All phases in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Planning,
        Self::Development,
        Self::Testing,
        Self::Documentation,
    ];

    /// Lowercase phase name as used in reports and skip lists.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Project size tier governing base token estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ProjectSize {
    /// Single resource, simple scope.
    Small,
    /// Multiple resources, some complexity.
    Medium,
    /// Complex system, many integrations.
    Large,
}

impl ProjectSize {
    /// Lowercase tier name as used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for ProjectSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base `[min, avg, max]` estimate for a phase at a size tier, in thousands
/// of tokens. Keying by enum makes an unknown phase/tier unrepresentable.
const fn base_thousands(phase: Phase, size: ProjectSize) -> [f64; 3] {
    use Phase::{Development, Documentation, Planning, Testing};
    use ProjectSize::{Large, Medium, Small};
    match (phase, size) {
        (Planning, Small) => [30.0, 50.0, 80.0],
        (Planning, Medium) => [80.0, 150.0, 200.0],
        (Planning, Large) => [150.0, 250.0, 400.0],
        (Development, Small) => [80.0, 150.0, 250.0],
        (Development, Medium) => [250.0, 400.0, 600.0],
        (Development, Large) => [500.0, 1000.0, 1500.0],
        (Testing, Small) => [40.0, 80.0, 120.0],
        (Testing, Medium) => [100.0, 200.0, 300.0],
        (Testing, Large) => [200.0, 400.0, 600.0],
        (Documentation, Small) => [20.0, 40.0, 60.0],
        (Documentation, Medium) => [50.0, 100.0, 150.0],
        (Documentation, Large) => [100.0, 200.0, 300.0],
    }
}

/// Calibration baseline: the table assumes this many agents per phase.
pub const BASELINE_TEAM_SIZE: u32 = 3;

/// Price per one million input tokens, USD.
pub const INPUT_PRICE_PER_MTOK: f64 = 5.00;

/// Price per one million output tokens, USD.
pub const OUTPUT_PRICE_PER_MTOK: f64 = 25.00;

/// Fraction of tokens assumed to be input. Sums to 1.0 with [`OUTPUT_RATIO`].
pub const INPUT_RATIO: f64 = 0.2;

/// Fraction of tokens assumed to be output (typical for code generation).
pub const OUTPUT_RATIO: f64 = 0.8;

/// Hours of elapsed time per thousand estimated tokens.
pub const HOURS_PER_KTOK: f64 = 0.75;

/// Run parameters for one estimate.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    /// Project size tier.
    pub size: ProjectSize,
    /// Phases to include. Estimation always walks them in canonical order.
    pub phases: Vec<Phase>,
    /// Agents per phase.
    pub team_size: u32,
    /// Extra scaling factor on top of the team multiplier.
    pub multiplier: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            size: ProjectSize::Medium,
            phases: Phase::ALL.to_vec(),
            team_size: BASELINE_TEAM_SIZE,
            multiplier: 1.0,
        }
    }
}

/// Lower/expected/upper bounds for one projected quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct Bounds<T> {
    /// Lower bound.
    pub min: T,
    /// Expected value.
    pub avg: T,
    /// Upper bound.
    pub max: T,
}

/// Absolute token projections for a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhaseTokens {
    /// Lower-bound tokens for the phase.
    pub min_tokens: u64,
    /// Expected tokens for the phase.
    pub avg_tokens: u64,
    /// Upper-bound tokens for the phase.
    pub max_tokens: u64,
}

/// Full estimate, serializable for `--json` consumers. Field names are
/// stable across releases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EstimateReport {
    /// Size tier the estimate was computed for.
    pub project_size: ProjectSize,
    /// Agents per phase.
    pub team_size: u32,
    /// Included phases, canonical order.
    pub phases: Vec<Phase>,
    /// Aggregate token projections.
    pub tokens: Bounds<u64>,
    /// Aggregate cost projections, USD, rounded to cents.
    pub cost_usd: Bounds<f64>,
    /// Aggregate elapsed-time projections, hours, rounded to tenths.
    pub time_hours: Bounds<f64>,
    /// Per-phase token projections, canonical order.
    pub phase_details: IndexMap<Phase, PhaseTokens>,
}

/// Compute an estimate from run parameters.
///
/// Walks the configured phases in canonical order, scales each tier triple
/// by `(team_size / 3) * multiplier`, and converts the totals to cost and
/// time. An empty phase list yields an all-zero report, not an error.
#[tracing::instrument(skip(config), fields(size = %config.size, team_size = config.team_size))]
pub fn estimate(config: &EstimateConfig) -> EstimateReport {
    let team_multiplier = f64::from(config.team_size) / f64::from(BASELINE_TEAM_SIZE);
    let scale = team_multiplier * config.multiplier;

    // Running totals stay in thousands until the final conversion.
    let mut totals = [0.0_f64; 3];
    let mut phase_details = IndexMap::new();
    let phases: Vec<Phase> = Phase::ALL
        .into_iter()
        .filter(|p| config.phases.contains(p))
        .collect();

    for phase in &phases {
        let scaled = base_thousands(*phase, config.size).map(|k| k * scale);
        for (total, k) in totals.iter_mut().zip(scaled) {
            *total += k;
        }
        phase_details.insert(
            *phase,
            PhaseTokens {
                min_tokens: to_tokens(scaled[0]),
                avg_tokens: to_tokens(scaled[1]),
                max_tokens: to_tokens(scaled[2]),
            },
        );
    }

    let [min_k, avg_k, max_k] = totals;
    EstimateReport {
        project_size: config.size,
        team_size: config.team_size,
        phases,
        tokens: Bounds {
            min: to_tokens(min_k),
            avg: to_tokens(avg_k),
            max: to_tokens(max_k),
        },
        cost_usd: Bounds {
            min: round2(cost_usd(min_k)),
            avg: round2(cost_usd(avg_k)),
            max: round2(cost_usd(max_k)),
        },
        time_hours: Bounds {
            min: round1(min_k * HOURS_PER_KTOK),
            avg: round1(avg_k * HOURS_PER_KTOK),
            max: round1(max_k * HOURS_PER_KTOK),
        },
        phase_details,
    }
}

/// Thousands to absolute tokens, truncating toward zero.
fn to_tokens(thousands: f64) -> u64 {
    (thousands * 1000.0) as u64
}

/// Dollar cost of `thousands` thousand tokens at the fixed price/ratio split.
fn cost_usd(thousands: f64) -> f64 {
    let tokens = thousands * 1000.0;
    let input_cost = (tokens * INPUT_RATIO / 1_000_000.0) * INPUT_PRICE_PER_MTOK;
    let output_cost = (tokens * OUTPUT_RATIO / 1_000_000.0) * OUTPUT_PRICE_PER_MTOK;
    input_cost + output_cost
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
