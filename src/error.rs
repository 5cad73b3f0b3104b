use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize, Error)]
#[error("{code}: {message}")]
pub struct AppError {
  pub code: String,
  pub message: String,
}

impl AppError {
  pub fn new(code: &str, message: impl Into<String>) -> Self {
    Self {
      code: code.to_string(),
      message: message.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_includes_code_and_message() {
    let err = AppError::new("INVALID_MARGIN", "El precio de venta debe ser mayor que el costo variable");
    assert_eq!(
      err.to_string(),
      "INVALID_MARGIN: El precio de venta debe ser mayor que el costo variable"
    );
  }

  #[test]
  fn test_serializes_code_for_frontend() {
    let err = AppError::new("INVALID_PRICE", "El precio por unidad debe ser mayor que cero");
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["code"], "INVALID_PRICE");
  }
}
