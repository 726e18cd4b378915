// loja_core/src/status/actions.rs

//! Supplier quick actions and role gating.

use crate::error::CoreError;
use crate::status::order_status::{BadgeVariant, OrderStatus, StatusIcon};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who is acting on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Supplier,
  Admin,
}

impl Role {
  pub const fn as_str(self) -> &'static str {
    match self {
      Role::Supplier => "supplier",
      Role::Admin => "admin",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = CoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "supplier" | "fornecedor" => Ok(Role::Supplier),
      "admin" => Ok(Role::Admin),
      other => Err(CoreError::UnknownRole(other.to_string())),
    }
  }
}

/// A button on the supplier order screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
  pub key: &'static str,
  pub label: &'static str,
  pub target: OrderStatus,
  pub icon: StatusIcon,
  pub variant: BadgeVariant,
  /// The action is only complete with a tracking code.
  pub requires_tracking: bool,
}

const CONFIRM_RECEIPT: QuickAction = QuickAction {
  key: "confirm_receipt",
  label: "Confirmar recebimento",
  target: OrderStatus::Recebido,
  icon: StatusIcon::Inbox,
  variant: BadgeVariant::Default,
  requires_tracking: false,
};

const START_PREPARATION: QuickAction = QuickAction {
  key: "start_preparation",
  label: "Iniciar preparação",
  target: OrderStatus::EmPreparacao,
  icon: StatusIcon::Package,
  variant: BadgeVariant::Default,
  requires_tracking: false,
};

const RESUME_PREPARATION: QuickAction = QuickAction {
  key: "resume_preparation",
  label: "Retomar preparação",
  ..START_PREPARATION
};

const MARK_PACKED: QuickAction = QuickAction {
  key: "mark_packed",
  label: "Marcar como embalado",
  target: OrderStatus::Embalado,
  icon: StatusIcon::PackageCheck,
  variant: BadgeVariant::Default,
  requires_tracking: false,
};

const MARK_SHIPPED: QuickAction = QuickAction {
  key: "mark_shipped",
  label: "Marcar como enviado",
  target: OrderStatus::Enviado,
  icon: StatusIcon::Truck,
  variant: BadgeVariant::Default,
  requires_tracking: true,
};

const MARK_DELIVERED: QuickAction = QuickAction {
  key: "mark_delivered",
  label: "Confirmar entrega",
  target: OrderStatus::Finalizado,
  icon: StatusIcon::CheckCircle,
  variant: BadgeVariant::Success,
  requires_tracking: false,
};

const MARK_RESTOCKING: QuickAction = QuickAction {
  key: "mark_restocking",
  label: "Aguardar reposição",
  target: OrderStatus::EmReposicao,
  icon: StatusIcon::RefreshCw,
  variant: BadgeVariant::Outline,
  requires_tracking: false,
};

const MARK_OUT_OF_STOCK: QuickAction = QuickAction {
  key: "mark_out_of_stock",
  label: "Marcar em falta",
  target: OrderStatus::EmFalta,
  icon: StatusIcon::AlertTriangle,
  variant: BadgeVariant::Warning,
  requires_tracking: false,
};

/// Supplier buttons for an order currently in `status`.
///
/// Cancelling and refunding are back-office decisions and never appear here.
pub const fn quick_actions(status: OrderStatus) -> &'static [QuickAction] {
  match status {
    OrderStatus::Pendente => &[CONFIRM_RECEIPT],
    OrderStatus::Recebido => &[START_PREPARATION, MARK_OUT_OF_STOCK],
    OrderStatus::EmPreparacao => &[MARK_PACKED, MARK_RESTOCKING, MARK_OUT_OF_STOCK],
    OrderStatus::Embalado => &[MARK_SHIPPED, MARK_RESTOCKING],
    OrderStatus::Enviado => &[MARK_DELIVERED],
    OrderStatus::EmReposicao => &[RESUME_PREPARATION, MARK_PACKED, MARK_SHIPPED],
    OrderStatus::EmFalta | OrderStatus::Finalizado | OrderStatus::Cancelado | OrderStatus::Reembolsado => &[],
  }
}

/// Target statuses `role` may move an order in `status` to.
pub fn allowed_actions(status: OrderStatus, role: Role) -> Vec<OrderStatus> {
  match role {
    Role::Supplier => quick_actions(status).iter().map(|action| action.target).collect(),
    Role::Admin => status.transitions().to_vec(),
  }
}
