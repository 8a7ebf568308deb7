use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A standalone attention item not tied to a single scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Flag {
    pub icon: String,
    pub title: String,
    pub text: String,
}
