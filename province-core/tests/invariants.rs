//! Invariants that hold for any province built through `add_producer`.

use province_core::{Producer, Province, ProvinceRecord};

/// Deterministic spread of producers: costs and outputs cycle through small ranges
fn make_producers(count: usize) -> Vec<Producer> {
    (0..count)
        .map(|i| {
            let cost = (i * 7 % 5) as f64 + 1.0;
            let production = (i * 3 % 11) as f64 + 0.5;
            Producer::new(format!("Producer_{}", i), cost, production)
        })
        .collect()
}

fn make_province(demand: i32, producers: &[Producer]) -> Province {
    let record = producers
        .iter()
        .cloned()
        .fold(ProvinceRecord::new("Scenario", demand, 20), ProvinceRecord::with_producer);
    Province::from_record(record).unwrap()
}

fn summed_production(province: &Province) -> f64 {
    province.producers().iter().map(|p| p.production).sum()
}

#[test]
fn invariant_total_production_tracks_added_producers() {
    for count in [0, 1, 2, 5, 13] {
        let mut province = make_province(30, &make_producers(count));
        assert_eq!(province.total_production(), summed_production(&province));

        for extra in make_producers(4) {
            province.add_producer(extra);
            assert_eq!(
                province.total_production(),
                summed_production(&province),
                "running total drifted with {count} initial producers"
            );
        }
    }
}

#[test]
fn invariant_satisfied_demand_bounded() {
    for demand in [0, 1, 10, 30, 100] {
        for count in [0, 3, 8] {
            let province = make_province(demand, &make_producers(count));
            let satisfied = province.satisfied_demand();
            assert!(
                satisfied <= province.demand(),
                "satisfied={satisfied} exceeds demand={demand}"
            );
            assert!(
                satisfied <= province.total_production(),
                "satisfied={satisfied} exceeds production={}",
                province.total_production()
            );
        }
    }
}

#[test]
fn invariant_demand_cost_is_stable_sort_by_cost() {
    let mut province = make_province(30, &make_producers(12));
    let original = province.producers();

    province.demand_cost();
    let sorted = province.producers();

    assert_eq!(sorted.len(), original.len());
    for pair in sorted.windows(2) {
        assert!(pair[0].cost <= pair[1].cost, "not ascending: {pair:?}");
        if pair[0].cost == pair[1].cost {
            let first = original.iter().position(|p| p.name == pair[0].name);
            let second = original.iter().position(|p| p.name == pair[1].name);
            assert!(first < second, "equal costs lost insertion order: {pair:?}");
        }
    }
}

#[test]
fn invariant_repeated_demand_cost_is_idempotent() {
    let mut province = make_province(30, &make_producers(9));
    let first = province.demand_cost();
    let order = province.producers();
    let second = province.demand_cost();

    assert_eq!(first, second);
    assert_eq!(province.producers(), order);
}

#[test]
fn invariant_profit_is_value_minus_cost() {
    for demand in [0, 7, 30] {
        let mut province = make_province(demand, &make_producers(6));
        let value = province.demand_value();
        let cost = province.demand_cost();
        assert_eq!(province.profit(), value - cost);
    }
}

#[test]
fn invariant_demand_cost_survives_nan_costs() {
    let mut producers = make_producers(40);
    for producer in producers.iter_mut().step_by(4) {
        producer.cost = f64::NAN;
    }
    let mut province = make_province(30, &producers);

    let cost = province.demand_cost();
    assert!(cost.is_nan(), "NaN costs propagate into the total: {cost}");

    let sorted = province.producers();
    assert_eq!(sorted.len(), 40);
    let finite: Vec<f64> = sorted.iter().map(|p| p.cost).filter(|c| !c.is_nan()).collect();
    assert_eq!(finite.len(), 30);
    assert!(finite.windows(2).all(|w| w[0] <= w[1]), "finite costs not ascending: {finite:?}");
    assert!(
        sorted[30..].iter().all(|p| p.cost.is_nan()),
        "NaN costs should sort after every finite cost"
    );
}
