//! Turn dispatch results into the JSON the CLI prints.

use serde::Serialize;

use enquire_core::{Dispatched, LabelCollection, QueryableView, Value};

/// JSON shape of a rewrapped view.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ViewSummary {
    pub kind: String,
    pub labels: Vec<String>,
    pub identifiers: Vec<String>,
}

impl ViewSummary {
    pub fn of<C: LabelCollection>(view: &QueryableView<C>) -> Self {
        Self {
            kind: view.kind().to_string(),
            labels: view
                .underlying()
                .labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            identifiers: view.mapping().identifiers().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "result", content = "value")]
pub enum Rendered {
    View(ViewSummary),
    Value(Value),
    Query(bool),
}

impl Rendered {
    pub fn from_dispatched<C: LabelCollection>(dispatched: &Dispatched<C>) -> Self {
        match dispatched {
            Dispatched::View(view) => Self::View(ViewSummary::of(view)),
            Dispatched::Value(value) => Self::Value(value.clone()),
            Dispatched::Query(answer) => Self::Query(*answer),
        }
    }

    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
