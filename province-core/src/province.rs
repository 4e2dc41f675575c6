// Province - a region's producers and the economics derived from them

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::config::{NonNumericPolicy, ProvinceConfig};
use crate::error::{CoercionError, RecordError};
use crate::producer::Producer;
use crate::record::ProvinceRecord;
use crate::types::{Numeric, Price, Quantity};

/// Derived economics of a province at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct ProvinceMetrics {
    pub shortfall: Quantity,
    pub satisfied_demand: Quantity,
    pub demand_value: f64,
    pub demand_cost: f64,
    pub profit: f64,
}

/// A region with demand, a price, and the producers supplying it.
///
/// `total_production` is a running sum kept up to date by [`add_producer`].
/// It is not recomputed from the producer list: callers that overwrite it with
/// [`set_total_production`] are responsible for keeping it consistent.
///
/// [`add_producer`]: Province::add_producer
/// [`set_total_production`]: Province::set_total_production
#[derive(Debug, Clone, PartialEq)]
pub struct Province {
    name: String,
    producers: Vec<Producer>,
    total_production: Quantity,
    demand: Quantity,
    price: Price,
    config: ProvinceConfig,
}

impl Province {
    pub fn from_record(record: ProvinceRecord) -> Result<Self, RecordError> {
        Self::with_config(record, ProvinceConfig::default())
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: ProvinceRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Build a province, adding the record's producers in order.
    ///
    /// Record `demand` and `price` are read as plain numbers. Only the
    /// mutators truncate to integers.
    pub fn with_config(record: ProvinceRecord, config: ProvinceConfig) -> Result<Self, RecordError> {
        let demand = record
            .demand
            .to_number()
            .map_err(|source| RecordError::Field { field: "demand", source })?;
        let price = record
            .price
            .to_number()
            .map_err(|source| RecordError::Field { field: "price", source })?;

        if config.validate_producers {
            for producer in &record.producers {
                check_non_negative(producer)?;
            }
        }

        let mut province = Self {
            name: record.name,
            producers: Vec::with_capacity(record.producers.len()),
            total_production: 0.0,
            demand,
            price,
            config,
        };
        for producer in record.producers {
            province.add_producer(producer);
        }
        Ok(province)
    }

    /// Append a producer and add its production to the running total.
    pub fn add_producer(&mut self, producer: Producer) {
        self.total_production += producer.production;

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "add_producer",
            producer = producer.name.as_str(),
            cost = producer.cost,
            production = producer.production,
            total_production = self.total_production,
        );

        self.producers.push(producer);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> ProvinceConfig {
        self.config
    }

    /// A fresh copy of the producer list, in the current internal order.
    pub fn producers(&self) -> Vec<Producer> {
        self.producers.clone()
    }

    pub fn total_production(&self) -> Quantity {
        self.total_production
    }

    /// Overwrite the running total. The producer list is not re-summed.
    pub fn set_total_production(&mut self, total: Quantity) {
        self.total_production = total;
    }

    pub fn demand(&self) -> Quantity {
        self.demand
    }

    /// Store `value` truncated to an integer.
    pub fn set_demand(&mut self, value: impl Into<Numeric>) -> Result<(), CoercionError> {
        self.demand = self.coerce("demand", value.into())?;
        Ok(())
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Store `value` truncated to an integer.
    pub fn set_price(&mut self, value: impl Into<Numeric>) -> Result<(), CoercionError> {
        self.price = self.coerce("price", value.into())?;
        Ok(())
    }

    #[cfg_attr(not(feature = "instrument"), allow(unused_variables))]
    fn coerce(&self, field: &'static str, value: Numeric) -> Result<f64, CoercionError> {
        match value.to_integer() {
            Ok(n) => Ok(n),
            Err(err) => {
                #[cfg(feature = "instrument")]
                tracing::warn!(
                    target: "coercion",
                    province = self.name.as_str(),
                    field,
                    policy = ?self.config.non_numeric,
                    "non-numeric input: {err}",
                );
                match self.config.non_numeric {
                    NonNumericPolicy::Reject => Err(err),
                    NonNumericPolicy::Zero => Ok(0.0),
                }
            }
        }
    }

    /// Demand minus total production. Negative when there is a surplus.
    pub fn shortfall(&self) -> Quantity {
        self.demand - self.total_production
    }

    pub fn satisfied_demand(&self) -> Quantity {
        self.demand.min(self.total_production)
    }

    pub fn demand_value(&self) -> f64 {
        self.satisfied_demand() * self.price
    }

    /// Cost of meeting demand, walking producers cheapest first.
    ///
    /// Sorts the producer list in place by ascending cost (stable, so equal
    /// costs keep insertion order, NaN costs go last); later calls to [`producers`] see the new
    /// order. Each producer contributes `min(demand, production)` units
    /// measured against the full demand: earlier producers do not reduce what
    /// later ones are asked for.
    ///
    /// [`producers`]: Province::producers
    pub fn demand_cost(&mut self) -> f64 {
        let demand = self.demand;
        let mut result = 0.0;
        self.producers.sort_by(|a, b| a.cost.total_cmp(&b.cost));
        for producer in &self.producers {
            let contribution = demand.min(producer.production);
            result += contribution * producer.cost;

            #[cfg(feature = "instrument")]
            tracing::info!(
                target: "demand_cost",
                producer = producer.name.as_str(),
                cost = producer.cost,
                production = producer.production,
                contribution = contribution,
                subtotal = result,
            );
        }
        result
    }

    pub fn profit(&mut self) -> f64 {
        self.demand_value() - self.demand_cost()
    }

    /// Snapshot of every derived metric. Reorders producers like [`demand_cost`].
    ///
    /// [`demand_cost`]: Province::demand_cost
    pub fn metrics(&mut self) -> ProvinceMetrics {
        let demand_value = self.demand_value();
        let demand_cost = self.demand_cost();
        ProvinceMetrics {
            shortfall: self.shortfall(),
            satisfied_demand: self.satisfied_demand(),
            demand_value,
            demand_cost,
            profit: demand_value - demand_cost,
        }
    }
}

fn check_non_negative(producer: &Producer) -> Result<(), RecordError> {
    for (field, value) in [("cost", producer.cost), ("production", producer.production)] {
        if value < 0.0 {
            return Err(RecordError::Negative {
                producer: producer.name.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}
