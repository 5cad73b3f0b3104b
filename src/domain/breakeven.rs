use crate::error::AppError;
use crate::models::BreakEvenResult;

pub fn contribution_margin(sale_price: f64, variable_cost: f64) -> f64 {
  sale_price - variable_cost
}

pub fn profit_at(units: f64, sale_price: f64, variable_cost: f64, fixed_costs: f64) -> f64 {
  units * (sale_price - variable_cost) - fixed_costs
}

pub fn break_even(
  fixed_costs: f64,
  sale_price: f64,
  variable_cost: f64,
) -> Result<BreakEvenResult, AppError> {
  let margin = contribution_margin(sale_price, variable_cost);
  if margin <= 0.0 {
    return Err(AppError::new(
      "INVALID_MARGIN",
      "El precio de venta debe ser mayor que el costo variable",
    ));
  }
  let break_even_units = fixed_costs / margin;
  Ok(BreakEvenResult {
    margin_per_unit: margin,
    break_even_units,
    break_even_revenue: break_even_units * sale_price,
  })
}
