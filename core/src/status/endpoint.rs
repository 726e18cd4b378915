// loja_core/src/status/endpoint.rs

use crate::error::CoreError;
use crate::status::order_status::OrderStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statuses accepted by the external status-update endpoint.
///
/// This list is maintained separately from [`OrderStatus`] and does not
/// match it: `despachado` has no registry counterpart, and `recebido`,
/// `embalado`, `enviado`, `em_reposicao` and `em_falta` are rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointStatus {
  Pendente,
  EmPreparacao,
  Despachado,
  Finalizado,
  Cancelado,
  Reembolsado,
}

impl EndpointStatus {
  pub const ALL: [EndpointStatus; 6] = [
    EndpointStatus::Pendente,
    EndpointStatus::EmPreparacao,
    EndpointStatus::Despachado,
    EndpointStatus::Finalizado,
    EndpointStatus::Cancelado,
    EndpointStatus::Reembolsado,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      EndpointStatus::Pendente => "pendente",
      EndpointStatus::EmPreparacao => "em_preparacao",
      EndpointStatus::Despachado => "despachado",
      EndpointStatus::Finalizado => "finalizado",
      EndpointStatus::Cancelado => "cancelado",
      EndpointStatus::Reembolsado => "reembolsado",
    }
  }

  /// The registry status with the same wire name, if there is one.
  ///
  /// Only for display and notification lookups. `Despachado` maps to
  /// `None`; it is not treated as `enviado`.
  pub const fn as_registry_status(self) -> Option<OrderStatus> {
    match self {
      EndpointStatus::Pendente => Some(OrderStatus::Pendente),
      EndpointStatus::EmPreparacao => Some(OrderStatus::EmPreparacao),
      EndpointStatus::Despachado => None,
      EndpointStatus::Finalizado => Some(OrderStatus::Finalizado),
      EndpointStatus::Cancelado => Some(OrderStatus::Cancelado),
      EndpointStatus::Reembolsado => Some(OrderStatus::Reembolsado),
    }
  }
}

impl fmt::Display for EndpointStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EndpointStatus {
  type Err = CoreError;

  /// Exact, case-sensitive match against the six accepted names.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    EndpointStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
  }
}
