use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CostInputs {
  pub fixed_costs: f64,
  pub sale_price: f64,
  pub variable_cost_per_unit: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TableWindow {
  pub units_before: f64,
  pub units_after: f64,
  pub step: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreakEvenResult {
  pub margin_per_unit: f64,
  pub break_even_units: f64,
  pub break_even_revenue: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableRow {
  pub units: f64,
  pub revenue: f64,
  pub variable_costs: f64,
  pub contribution_margin: f64,
  pub fixed_costs: f64,
  pub profit_or_loss: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartSeries {
  pub units: Vec<f64>,
  pub revenue: Vec<f64>,
  pub variable_costs: Vec<f64>,
  pub total_costs: Vec<f64>,
  pub fixed_costs: Vec<f64>,
  pub profit: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreakEvenAnalysis {
  pub result: BreakEvenResult,
  pub table: Vec<TableRow>,
  pub chart: ChartSeries,
}
