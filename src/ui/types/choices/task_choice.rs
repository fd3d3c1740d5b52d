use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::artifacts::SummaryTable;
use crate::core::SimulationError;
use crate::tasks::{ExperimentDriver, ExperimentOutcome, ExperimentParams, SummaryParams, summarize};
use crate::ui::types::choices::UIChoice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Run Experiments",
        detailed_message = "Distribution, convergence and sample-size sweep studies."
    ))]
    RunExperiments(ExperimentParams),

    #[strum_discriminants(strum(
        message = "Summarize",
        detailed_message = "Print the summary table of previously written artifacts."
    ))]
    Summarize(SummaryParams),
}

/// What a finished [`TaskChoice`] produced.
#[derive(Debug)]
pub enum TaskResult {
    Experiment(ExperimentOutcome),
    Summary(SummaryTable),
}

impl TaskChoice {
    pub fn kind(&self) -> TaskKind {
        self.into()
    }

    pub fn run(self) -> Result<TaskResult, SimulationError> {
        match self {
            TaskChoice::RunExperiments(params) => {
                let mut driver = ExperimentDriver::try_from(params)?;
                driver.run().map(TaskResult::Experiment)
            }
            TaskChoice::Summarize(params) => summarize(&params).map(TaskResult::Summary),
        }
    }
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            TaskKind::RunExperiments => serde_json::to_value(ExperimentParams::default()),
            TaskKind::Summarize => serde_json::to_value(SummaryParams::default()),
        };
        params.unwrap_or(Value::Null)
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        Ok(match kind {
            TaskKind::RunExperiments => TaskChoice::RunExperiments(serde_json::from_value(params)?),
            TaskKind::Summarize => TaskChoice::Summarize(serde_json::from_value(params)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, specs_for_kind};
    use serde_json::json;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};
    use tempfile::tempdir;

    #[test]
    fn kinds_are_kebab_case_with_messages() {
        let keys: Vec<&'static str> = TaskKind::iter().map(Into::into).collect();
        assert_eq!(keys, ["run-experiments", "summarize"]);
        assert_eq!(TaskKind::from_str("summarize").unwrap(), TaskKind::Summarize);
        assert_eq!(TaskKind::RunExperiments.get_message(), Some("Run Experiments"));
        assert!(TaskKind::Summarize.get_detailed_message().is_some());
    }

    #[test]
    fn tagged_enum_serialization() {
        let choice = TaskChoice::Summarize(SummaryParams::default());
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v, json!({ "type": "summarize", "params": { "artifacts_dir": ".", "reference_size": 12 } }));

        let back: TaskChoice =
            serde_json::from_value(json!({ "type": "run-experiments", "params": { "repetitions": 20 } }))
                .unwrap();
        let TaskChoice::RunExperiments(p) = back else {
            panic!("expected run-experiments");
        };
        assert_eq!(p.repetitions, 20);
        assert_eq!(p.sweep_max_size, 20);
    }

    #[test]
    fn default_params_rebuild_defaults() {
        for kind in TaskKind::iter() {
            let v = TaskChoice::default_params(kind);
            let choice = TaskChoice::from_parts(kind, v).unwrap();
            assert_eq!(choice.kind(), kind);
        }
        let v = TaskChoice::default_params(TaskKind::RunExperiments);
        assert_eq!(
            TaskChoice::from_parts(TaskKind::RunExperiments, v).unwrap(),
            TaskChoice::RunExperiments(ExperimentParams::default())
        );
    }

    #[test]
    fn schema_exposes_experiment_fields() {
        let specs = specs_for_kind(&TaskChoice::schema(), "run-experiments").unwrap();
        let reps = specs.iter().find(|s| s.name == "repetitions").unwrap();
        assert_eq!(reps.title, "Repetitions");
        assert_eq!(reps.kind, FieldKind::Integer);
        assert_eq!(reps.min, Some(1.0));

        let sd = specs.iter().find(|s| s.name == "population_std_dev").unwrap();
        assert_eq!(sd.kind, FieldKind::Number);
        assert_eq!(sd.exclusive_min, Some(0.0));

        let seed = specs.iter().find(|s| s.name == "subsample_seed").unwrap();
        assert!(seed.nullable);

        let dir = specs.iter().find(|s| s.name == "output_dir").unwrap();
        assert_eq!(dir.kind, FieldKind::Text);

        let summary = specs_for_kind(&TaskChoice::schema(), "summarize").unwrap();
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn run_dispatches_to_the_task() {
        let dir = tempdir().unwrap();
        let out = dir.path().to_string_lossy().into_owned();
        let run = TaskChoice::RunExperiments(ExperimentParams {
            repetitions: 50,
            sweep_min_size: 10,
            sweep_max_size: 12,
            subsample_seed: Some(5),
            output_dir: out.clone(),
            ..ExperimentParams::default()
        });
        let TaskResult::Experiment(outcome) = run.run().unwrap() else {
            panic!("expected experiment outcome");
        };
        assert_eq!(outcome.written.len(), 3);

        let summary = TaskChoice::Summarize(SummaryParams {
            artifacts_dir: out,
            reference_size: 12,
        });
        let TaskResult::Summary(table) = summary.run().unwrap() else {
            panic!("expected summary table");
        };
        assert_eq!(table.rows.len(), 8);
        assert_eq!(table.ranges.len(), 8);
    }
}
