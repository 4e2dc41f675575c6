// Input records a province is built from

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::producer::Producer;
use crate::types::Numeric;

/// Plain data a [`Province`](crate::Province) is constructed from.
///
/// `demand` and `price` accept either a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ProvinceRecord {
    pub name: String,
    pub demand: Numeric,
    pub price: Numeric,
    pub producers: Vec<Producer>,
}

impl ProvinceRecord {
    pub fn new(name: impl Into<String>, demand: impl Into<Numeric>, price: impl Into<Numeric>) -> Self {
        Self {
            name: name.into(),
            demand: demand.into(),
            price: price.into(),
            producers: Vec::new(),
        }
    }

    pub fn with_producer(mut self, producer: Producer) -> Self {
        self.producers.push(producer);
        self
    }
}

/// The canonical `Asia` scenario.
pub fn sample_province_data() -> ProvinceRecord {
    ProvinceRecord::new("Asia", 30, 20)
        .with_producer(Producer::new("Byzantium", 10.0, 9.0))
        .with_producer(Producer::new("Attalia", 11.0, 10.0))
        .with_producer(Producer::new("Sinope", 10.0, 6.0))
}
