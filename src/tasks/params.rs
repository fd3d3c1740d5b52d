use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration of one experiment run: the population, the three study
/// toggles and where the artifacts go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExperimentParams {
    #[schemars(
        title = "Population Mean",
        description = "Mean of the Gaussian the population is drawn from"
    )]
    pub population_mean: f64,

    #[schemars(
        title = "Population Std. Dev.",
        description = "Standard deviation of the Gaussian the population is drawn from (must be > 0)",
        extend("exclusiveMinimum" = 0.0)
    )]
    pub population_std_dev: f64,

    #[schemars(
        title = "Population Size",
        description = "Number of values drawn for the population",
        range(min = 2)
    )]
    pub population_size: usize,

    #[schemars(
        title = "Population Seed",
        description = "Seed of the population draw"
    )]
    pub population_seed: u64,

    #[schemars(
        title = "Repetitions",
        description = "Subsamples drawn per study and per size in the sweep (the sweep needs at least 2)",
        range(min = 1)
    )]
    pub repetitions: usize,

    #[schemars(
        title = "Distribution Subsample Size",
        description = "Subsample size of the distribution and convergence studies",
        range(min = 4)
    )]
    pub distribution_subsample_size: usize,

    #[schemars(
        title = "Sweep Min Size",
        description = "Smallest subsample size of the sweep",
        range(min = 4)
    )]
    pub sweep_min_size: usize,

    #[schemars(
        title = "Sweep Max Size",
        description = "Largest subsample size of the sweep (inclusive)",
        range(min = 4)
    )]
    pub sweep_max_size: usize,

    #[schemars(
        title = "Calculate Distributions",
        description = "Run the deviation distribution study?"
    )]
    pub calculate_distributions: bool,

    #[schemars(
        title = "Calculate Convergence",
        description = "Trace the running mean of the deviations? Needs the distribution study."
    )]
    pub calculate_convergence: bool,

    #[schemars(
        title = "Calculate Sample Size Sweep",
        description = "Summarize the deviations for every subsample size of the sweep?"
    )]
    pub calculate_sample_size_sweep: bool,

    #[schemars(
        title = "Subsample Seed",
        description = "Seed of the subsample draws (None = fresh entropy every run)"
    )]
    pub subsample_seed: Option<u64>,

    #[schemars(
        title = "Output Directory",
        description = "Directory the artifacts are written to"
    )]
    pub output_dir: String,

    #[schemars(
        title = "Write Tables",
        description = "Also export CSV tables next to the JSON artifacts?"
    )]
    pub write_tables: bool,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            population_mean: 100.0,
            population_std_dev: 20.0,
            population_size: 1000,
            population_seed: 2,
            repetitions: 10_000,
            distribution_subsample_size: 10,
            sweep_min_size: 4,
            sweep_max_size: 20,
            calculate_distributions: true,
            calculate_convergence: true,
            calculate_sample_size_sweep: true,
            subsample_seed: None,
            output_dir: ".".into(),
            write_tables: false,
        }
    }
}

/// Where to read artifacts from when printing the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SummaryParams {
    #[schemars(
        title = "Artifacts Directory",
        description = "Directory holding deviations.json and development.json"
    )]
    pub artifacts_dir: String,

    #[schemars(
        title = "Reference Size",
        description = "Subsample size whose sweep uncertainty gets its own column",
        range(min = 4)
    )]
    pub reference_size: usize,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            artifacts_dir: ".".into(),
            reference_size: 12,
        }
    }
}
