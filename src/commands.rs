use crate::domain::{breakeven, validation};
use crate::error::AppError;
use crate::models::{
  BreakEvenAnalysis, BreakEvenResult, ChartSeries, CostInputs, TableRow, TableWindow,
};
use crate::reports;

const CHART_RANGE_FACTOR: f64 = 2.0;
const CHART_SAMPLES: usize = 400;

pub fn calculate_break_even(input: &CostInputs) -> Result<BreakEvenResult, AppError> {
  validation::ensure_cost_inputs(input)?;
  breakeven::break_even(input.fixed_costs, input.sale_price, input.variable_cost_per_unit)
}

pub fn get_projection(input: &CostInputs, units: f64) -> Result<TableRow, AppError> {
  validation::ensure_cost_inputs(input)?;
  validation::ensure_units_non_negative(units)?;
  Ok(reports::row_at(
    units,
    input.sale_price,
    input.variable_cost_per_unit,
    input.fixed_costs,
  ))
}

pub fn get_profit_table(
  input: &CostInputs,
  window: &TableWindow,
) -> Result<Vec<TableRow>, AppError> {
  validation::ensure_table_window(window)?;
  let result = calculate_break_even(input)?;
  Ok(reports::build_profit_table(
    result.break_even_units,
    input.sale_price,
    input.variable_cost_per_unit,
    input.fixed_costs,
    window,
  ))
}

pub fn get_chart_series(input: &CostInputs) -> Result<ChartSeries, AppError> {
  let result = calculate_break_even(input)?;
  Ok(reports::build_chart_series(
    input.sale_price,
    input.variable_cost_per_unit,
    input.fixed_costs,
    result.break_even_units * CHART_RANGE_FACTOR,
    CHART_SAMPLES,
  ))
}

pub fn get_analysis(
  input: &CostInputs,
  window: &TableWindow,
) -> Result<BreakEvenAnalysis, AppError> {
  validation::ensure_table_window(window)?;
  let result = calculate_break_even(input)?;
  let table = reports::build_profit_table(
    result.break_even_units,
    input.sale_price,
    input.variable_cost_per_unit,
    input.fixed_costs,
    window,
  );
  let chart = reports::build_chart_series(
    input.sale_price,
    input.variable_cost_per_unit,
    input.fixed_costs,
    result.break_even_units * CHART_RANGE_FACTOR,
    CHART_SAMPLES,
  );
  Ok(BreakEvenAnalysis { result, table, chart })
}
