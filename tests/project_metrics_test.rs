mod common;

use common::{approx, legacy_indicator, project_document, reference_indicator, revenue_indicator};
use pretty_assertions::assert_eq;
use roimap::core::IndicatorCategory;
use roimap::input::project_costs;
use roimap::{compute_indicator_metrics, compute_project_metrics, ProjectCosts};
use serde_json::{json, Value};

fn project_inputs() -> (Vec<Value>, ProjectCosts) {
    let document = project_document();
    let indicators = document["indicators"].as_array().unwrap().clone();
    (indicators, project_costs(&document["project"]))
}

#[test]
fn aggregates_members_with_project_costs() {
    let (indicators, costs) = project_inputs();
    assert_eq!(costs, ProjectCosts::new(6000.0, 50.0));

    let metrics = compute_project_metrics("proj-1", &indicators, &costs);

    assert_eq!(metrics.total_indicators, 3);
    assert!(approx(metrics.gross_savings_annual_total, 12798.0));
    assert!(approx(metrics.net_savings_annual_total, 11598.0));
    assert!(approx(metrics.hours_saved_annual_total, 255.96));
    assert_eq!(metrics.implementation_cost_total, 6000.0);
    assert_eq!(metrics.recurring_cost_annual_total, 1800.0);
    assert_eq!(metrics.investment_year1, 7800.0);
    assert!(approx(metrics.roi_overall, (12798.0 - 7800.0) / 7800.0 * 100.0));
    assert!(approx(metrics.payback_avg_months, 6000.0 / (11598.0 / 12.0)));
    // the revenue indicator has no labor rows and is left out of the average
    assert!(approx(metrics.productivity_gain_avg, 75.0));
    assert_eq!(metrics.capacity_gain_avg, 0.0);
}

#[test]
fn net_savings_are_additive() {
    let (indicators, costs) = project_inputs();
    let metrics = compute_project_metrics("proj-1", &indicators, &costs);

    let expected: f64 = [reference_indicator(), legacy_indicator(), revenue_indicator()]
        .iter()
        .map(|record| compute_indicator_metrics(record).unwrap().net_savings)
        .sum();

    assert!(approx(metrics.net_savings_annual_total, expected));
}

#[test]
fn keeps_indicator_order_and_identity() {
    let (indicators, costs) = project_inputs();
    let metrics = compute_project_metrics("proj-1", &indicators, &costs);

    let ids: Vec<_> = metrics
        .indicators
        .iter()
        .map(|summary| summary.indicator_id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["ind-ref", "ind-legacy", "ind-rev"]);
    assert_eq!(
        metrics.indicators[2].category,
        Some(IndicatorCategory::RevenueIncrease)
    );
}

#[test]
fn filters_by_project_id_compared_as_text() {
    let mut numeric = reference_indicator();
    numeric["projectId"] = json!(7);
    let other = reference_indicator();

    let metrics = compute_project_metrics("7", &[numeric, other], &ProjectCosts::default());

    assert_eq!(metrics.total_indicators, 1);
}

#[test]
fn empty_project_is_neutral() {
    let metrics = compute_project_metrics("nothing", &[], &ProjectCosts::new(0.0, 0.0));

    assert_eq!(metrics.total_indicators, 0);
    assert_eq!(metrics.net_savings_annual_total, 0.0);
    assert_eq!(metrics.gross_savings_annual_total, 0.0);
    assert_eq!(metrics.hours_saved_annual_total, 0.0);
    assert_eq!(metrics.recurring_cost_annual_total, 0.0);
    assert_eq!(metrics.roi_overall, 0.0);
    assert_eq!(metrics.payback_avg_months, f64::INFINITY);
    assert!(metrics.indicators.is_empty());

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["paybackAvgMonths"], "Infinity");
}

#[test]
fn null_members_are_skipped() {
    let metrics = compute_project_metrics(
        "proj-1",
        &[Value::Null, reference_indicator()],
        &ProjectCosts::default(),
    );
    assert_eq!(metrics.total_indicators, 1);
    assert_eq!(metrics.roi_overall, f64::INFINITY);
}
