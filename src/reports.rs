use crate::domain::breakeven;
use crate::models::{ChartSeries, TableRow, TableWindow};

pub fn row_at(units: f64, sale_price: f64, variable_cost: f64, fixed_costs: f64) -> TableRow {
  let contribution_margin = units * breakeven::contribution_margin(sale_price, variable_cost);
  TableRow {
    units,
    revenue: units * sale_price,
    variable_costs: units * variable_cost,
    contribution_margin,
    fixed_costs,
    profit_or_loss: contribution_margin - fixed_costs,
  }
}

pub fn build_profit_table(
  break_even_units: f64,
  sale_price: f64,
  variable_cost: f64,
  fixed_costs: f64,
  window: &TableWindow,
) -> Vec<TableRow> {
  // Lower bound clamps at zero, negative unit counts are never emitted.
  let start = (break_even_units - window.units_before).max(0.0);
  let end = break_even_units + window.units_after;
  let steps = ((end - start) / window.step).floor() as usize;
  (0..=steps)
    .map(|i| row_at(start + i as f64 * window.step, sale_price, variable_cost, fixed_costs))
    .collect()
}

pub fn build_chart_series(
  sale_price: f64,
  variable_cost: f64,
  fixed_costs: f64,
  max_units: f64,
  samples: usize,
) -> ChartSeries {
  let mut series = ChartSeries {
    units: Vec::new(),
    revenue: Vec::new(),
    variable_costs: Vec::new(),
    total_costs: Vec::new(),
    fixed_costs: Vec::new(),
    profit: Vec::new(),
  };
  if max_units <= 0.0 || samples < 2 {
    return series;
  }
  let step = max_units / (samples - 1) as f64;
  for i in 0..samples {
    let units = i as f64 * step;
    let variable = units * variable_cost;
    series.units.push(units);
    series.revenue.push(units * sale_price);
    series.variable_costs.push(variable);
    series.total_costs.push(fixed_costs + variable);
    series.fixed_costs.push(fixed_costs);
    series
      .profit
      .push(breakeven::profit_at(units, sale_price, variable_cost, fixed_costs));
  }
  series
}
