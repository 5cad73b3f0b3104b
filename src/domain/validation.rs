use crate::error::AppError;
use crate::models::{CostInputs, TableWindow};

pub fn ensure_sale_price(price: f64) -> Result<(), AppError> {
  if !price.is_finite() || price <= 0.0 {
    Err(AppError::new(
      "INVALID_PRICE",
      "El precio por unidad debe ser mayor que cero",
    ))
  } else {
    Ok(())
  }
}

pub fn ensure_cost_non_negative(amount: f64) -> Result<(), AppError> {
  if !amount.is_finite() || amount < 0.0 {
    Err(AppError::new(
      "INVALID_COST",
      "Los costos no pueden ser negativos",
    ))
  } else {
    Ok(())
  }
}

pub fn ensure_units_non_negative(units: f64) -> Result<(), AppError> {
  if !units.is_finite() || units < 0.0 {
    Err(AppError::new(
      "INVALID_UNITS",
      "La cantidad de unidades no puede ser negativa",
    ))
  } else {
    Ok(())
  }
}

pub fn ensure_cost_inputs(input: &CostInputs) -> Result<(), AppError> {
  ensure_sale_price(input.sale_price)?;
  ensure_cost_non_negative(input.fixed_costs)?;
  ensure_cost_non_negative(input.variable_cost_per_unit)?;
  Ok(())
}

pub fn ensure_table_window(window: &TableWindow) -> Result<(), AppError> {
  ensure_units_non_negative(window.units_before)?;
  ensure_units_non_negative(window.units_after)?;
  if !window.step.is_finite() || window.step <= 0.0 {
    return Err(AppError::new(
      "INVALID_STEP",
      "El paso de la tabla debe ser mayor que cero",
    ));
  }
  Ok(())
}
