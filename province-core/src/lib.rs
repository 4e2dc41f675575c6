use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod producer;
pub mod province;
pub mod record;
pub mod types;

pub use config::*;
pub use error::*;
pub use producer::*;
pub use province::*;
pub use record::*;
pub use types::*;

#[cfg(feature = "instrument")]
pub use instrument;

// ============================================================================
// WASM API - Province
// ============================================================================

#[wasm_bindgen]
pub struct ProvinceModel {
    province: Province,
}

#[wasm_bindgen]
impl ProvinceModel {
    #[wasm_bindgen(constructor)]
    pub fn new(record: ProvinceRecord) -> Result<ProvinceModel, JsError> {
        // Better panic messages in browser console
        console_error_panic_hook::set_once();

        Ok(Self {
            province: Province::from_record(record)?,
        })
    }

    /// Province built from the `Asia` sample record
    #[wasm_bindgen]
    pub fn sample() -> Result<ProvinceModel, JsError> {
        Self::new(sample_province_data())
    }

    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<ProvinceModel, JsError> {
        console_error_panic_hook::set_once();
        Ok(Self {
            province: Province::from_json(json)?,
        })
    }

    #[wasm_bindgen]
    pub fn add_producer(&mut self, producer: Producer) {
        self.province.add_producer(producer);
    }

    #[wasm_bindgen]
    pub fn name(&self) -> String {
        self.province.name().to_string()
    }

    /// A new JS array; mutating it does not touch the province
    #[wasm_bindgen]
    pub fn producers(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.province.producers())?)
    }

    #[wasm_bindgen]
    pub fn total_production(&self) -> f64 {
        self.province.total_production()
    }

    #[wasm_bindgen]
    pub fn set_total_production(&mut self, total: f64) {
        self.province.set_total_production(total);
    }

    #[wasm_bindgen]
    pub fn demand(&self) -> f64 {
        self.province.demand()
    }

    /// Accepts a number or a numeric string, e.g. straight from an input field
    #[wasm_bindgen]
    pub fn set_demand(&mut self, value: JsValue) -> Result<(), JsError> {
        self.province.set_demand(numeric_from_js(&value)?)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn price(&self) -> f64 {
        self.province.price()
    }

    #[wasm_bindgen]
    pub fn set_price(&mut self, value: JsValue) -> Result<(), JsError> {
        self.province.set_price(numeric_from_js(&value)?)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn shortfall(&self) -> f64 {
        self.province.shortfall()
    }

    #[wasm_bindgen]
    pub fn satisfied_demand(&self) -> f64 {
        self.province.satisfied_demand()
    }

    #[wasm_bindgen]
    pub fn demand_value(&self) -> f64 {
        self.province.demand_value()
    }

    #[wasm_bindgen]
    pub fn demand_cost(&mut self) -> f64 {
        self.province.demand_cost()
    }

    #[wasm_bindgen]
    pub fn profit(&mut self) -> f64 {
        self.province.profit()
    }

    #[wasm_bindgen]
    pub fn metrics(&mut self) -> ProvinceMetrics {
        self.province.metrics()
    }
}

fn numeric_from_js(value: &JsValue) -> Result<Numeric, JsError> {
    if let Some(n) = value.as_f64() {
        return Ok(Numeric::Number(n));
    }
    value
        .as_string()
        .map(Numeric::Text)
        .ok_or_else(|| JsError::new("expected a number or a numeric string"))
}
