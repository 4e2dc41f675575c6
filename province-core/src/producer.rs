// Producer - a single production source inside a province

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::types::{Cost, Quantity};

/// A production source with a per-unit cost and an output quantity.
///
/// Also the shape of each entry in a province record's `producers` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Producer {
    pub name: String,
    pub cost: Cost,
    pub production: Quantity,
}

impl Producer {
    pub fn new(name: impl Into<String>, cost: Cost, production: Quantity) -> Self {
        Self {
            name: name.into(),
            cost,
            production,
        }
    }
}
