// loja_core/src/status/order_status.rs

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
  Pendente,
  Recebido,
  EmPreparacao,
  Embalado,
  Enviado,
  EmReposicao,
  EmFalta,
  Finalizado,
  Cancelado,
  Reembolsado,
}

/// Icon shown next to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
  Clock,
  Inbox,
  Package,
  PackageCheck,
  Truck,
  RefreshCw,
  AlertTriangle,
  CheckCircle,
  XCircle,
  RotateCcw,
}

/// Visual style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
  Default,
  Secondary,
  Outline,
  Success,
  Warning,
  Destructive,
}

/// Display metadata for one status plus the statuses reachable from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusConfig {
  pub status: OrderStatus,
  pub label: &'static str,
  pub icon: StatusIcon,
  pub variant: BadgeVariant,
  pub transitions: &'static [OrderStatus],
}

impl OrderStatus {
  /// Every status, in lifecycle order.
  pub const ALL: [OrderStatus; 10] = [
    OrderStatus::Pendente,
    OrderStatus::Recebido,
    OrderStatus::EmPreparacao,
    OrderStatus::Embalado,
    OrderStatus::Enviado,
    OrderStatus::EmReposicao,
    OrderStatus::EmFalta,
    OrderStatus::Finalizado,
    OrderStatus::Cancelado,
    OrderStatus::Reembolsado,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      OrderStatus::Pendente => "pendente",
      OrderStatus::Recebido => "recebido",
      OrderStatus::EmPreparacao => "em_preparacao",
      OrderStatus::Embalado => "embalado",
      OrderStatus::Enviado => "enviado",
      OrderStatus::EmReposicao => "em_reposicao",
      OrderStatus::EmFalta => "em_falta",
      OrderStatus::Finalizado => "finalizado",
      OrderStatus::Cancelado => "cancelado",
      OrderStatus::Reembolsado => "reembolsado",
    }
  }

  pub const fn label(self) -> &'static str {
    match self {
      OrderStatus::Pendente => "Pendente",
      OrderStatus::Recebido => "Recebido",
      OrderStatus::EmPreparacao => "Em Preparação",
      OrderStatus::Embalado => "Embalado",
      OrderStatus::Enviado => "Enviado",
      OrderStatus::EmReposicao => "Em Reposição",
      OrderStatus::EmFalta => "Em Falta",
      OrderStatus::Finalizado => "Finalizado",
      OrderStatus::Cancelado => "Cancelado",
      OrderStatus::Reembolsado => "Reembolsado",
    }
  }

  pub const fn icon(self) -> StatusIcon {
    match self {
      OrderStatus::Pendente => StatusIcon::Clock,
      OrderStatus::Recebido => StatusIcon::Inbox,
      OrderStatus::EmPreparacao => StatusIcon::Package,
      OrderStatus::Embalado => StatusIcon::PackageCheck,
      OrderStatus::Enviado => StatusIcon::Truck,
      OrderStatus::EmReposicao => StatusIcon::RefreshCw,
      OrderStatus::EmFalta => StatusIcon::AlertTriangle,
      OrderStatus::Finalizado => StatusIcon::CheckCircle,
      OrderStatus::Cancelado => StatusIcon::XCircle,
      OrderStatus::Reembolsado => StatusIcon::RotateCcw,
    }
  }

  pub const fn variant(self) -> BadgeVariant {
    match self {
      OrderStatus::Pendente => BadgeVariant::Outline,
      OrderStatus::Recebido | OrderStatus::EmPreparacao | OrderStatus::Embalado => BadgeVariant::Secondary,
      OrderStatus::Enviado => BadgeVariant::Default,
      OrderStatus::EmReposicao | OrderStatus::EmFalta => BadgeVariant::Warning,
      OrderStatus::Finalizado => BadgeVariant::Success,
      OrderStatus::Cancelado | OrderStatus::Reembolsado => BadgeVariant::Destructive,
    }
  }

  /// Statuses this one may move to.
  pub const fn transitions(self) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match self {
      Pendente => &[Recebido, Cancelado],
      Recebido => &[EmPreparacao, EmFalta, Cancelado],
      EmPreparacao => &[Embalado, EmReposicao, EmFalta, Cancelado],
      Embalado => &[Enviado, EmReposicao, Cancelado],
      Enviado => &[Finalizado, Cancelado],
      EmReposicao => &[EmPreparacao, Embalado, Enviado, Cancelado],
      EmFalta => &[Cancelado, Reembolsado],
      Finalizado => &[Reembolsado],
      Cancelado => &[Reembolsado],
      Reembolsado => &[],
    }
  }

  pub const fn is_terminal(self) -> bool {
    self.transitions().is_empty()
  }

  pub fn can_transition_to(self, next: OrderStatus) -> bool {
    self.transitions().contains(&next)
  }

  pub const fn config(self) -> StatusConfig {
    StatusConfig {
      status: self,
      label: self.label(),
      icon: self.icon(),
      variant: self.variant(),
      transitions: self.transitions(),
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = CoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
  }
}

/// Display configuration for a raw status string; unknown values get the
/// `pendente` configuration.
pub fn status_config(status: &str) -> StatusConfig {
  status.parse::<OrderStatus>().unwrap_or(OrderStatus::Pendente).config()
}

/// Statuses reachable from a raw status string; empty when unknown.
pub fn available_transitions(status: &str) -> Vec<OrderStatus> {
  status
    .parse::<OrderStatus>()
    .map(|s| s.transitions().to_vec())
    .unwrap_or_default()
}

/// Whether `from -> to` is an edge of the status graph. Unknown strings on
/// either side are never a valid transition.
pub fn can_transition(from: &str, to: &str) -> bool {
  match (from.parse::<OrderStatus>(), to.parse::<OrderStatus>()) {
    (Ok(from), Ok(to)) => from.can_transition_to(to),
    _ => false,
  }
}

pub fn all_status_configs() -> Vec<StatusConfig> {
  OrderStatus::ALL.into_iter().map(OrderStatus::config).collect()
}
