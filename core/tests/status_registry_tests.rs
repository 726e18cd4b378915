// tests/status_registry_tests.rs
use loja_core::{
  all_status_configs, available_transitions, can_transition, status_config, BadgeVariant, CoreError, EndpointStatus,
  OrderStatus, StatusIcon,
};

#[test]
fn every_registry_status_has_its_own_config() {
  for status in OrderStatus::ALL {
    let config = status_config(status.as_str());
    assert_eq!(config.status, status);
    assert!(!config.label.is_empty());
  }
}

#[test]
fn unknown_status_falls_back_to_pendente() {
  let fallback = status_config("despachado");
  assert_eq!(fallback, OrderStatus::Pendente.config());
  assert_eq!(fallback.label, "Pendente");
  assert_eq!(fallback.icon, StatusIcon::Clock);
  assert_eq!(status_config(""), OrderStatus::Pendente.config());
  assert_eq!(status_config("ENVIADO"), OrderStatus::Pendente.config());
}

#[test]
fn transitions_follow_the_adjacency_table() {
  use OrderStatus::*;
  let expected: [(OrderStatus, &[OrderStatus]); 10] = [
    (Pendente, &[Recebido, Cancelado]),
    (Recebido, &[EmPreparacao, EmFalta, Cancelado]),
    (EmPreparacao, &[Embalado, EmReposicao, EmFalta, Cancelado]),
    (Embalado, &[Enviado, EmReposicao, Cancelado]),
    (Enviado, &[Finalizado, Cancelado]),
    (EmReposicao, &[EmPreparacao, Embalado, Enviado, Cancelado]),
    (EmFalta, &[Cancelado, Reembolsado]),
    (Finalizado, &[Reembolsado]),
    (Cancelado, &[Reembolsado]),
    (Reembolsado, &[]),
  ];
  for (status, targets) in expected {
    assert_eq!(available_transitions(status.as_str()), targets.to_vec(), "from {}", status);
    assert_eq!(status.config().transitions, targets);
  }
}

#[test]
fn finalizado_only_refunds_and_reembolsado_is_terminal() {
  assert_eq!(available_transitions("finalizado"), vec![OrderStatus::Reembolsado]);
  assert!(available_transitions("reembolsado").is_empty());
  assert!(OrderStatus::Reembolsado.is_terminal());
}

#[test]
fn unknown_status_has_no_transitions() {
  assert!(available_transitions("despachado").is_empty());
  assert!(available_transitions("").is_empty());
}

#[test]
fn can_transition_checks_edges_only() {
  assert!(can_transition("pendente", "recebido"));
  assert!(can_transition("em_reposicao", "enviado"));
  assert!(!can_transition("pendente", "enviado"));
  assert!(!can_transition("reembolsado", "pendente"));
  assert!(!can_transition("embalado", "despachado"));
}

#[test]
fn every_status_can_be_cancelled_or_refunded_until_the_end() {
  for status in OrderStatus::ALL {
    if status.is_terminal() {
      continue;
    }
    let targets = status.transitions();
    assert!(
      targets.contains(&OrderStatus::Cancelado) || targets.contains(&OrderStatus::Reembolsado),
      "{} has no exit to cancel/refund",
      status
    );
  }
}

#[test]
fn badge_variants_flag_problem_states() {
  assert_eq!(OrderStatus::EmFalta.variant(), BadgeVariant::Warning);
  assert_eq!(OrderStatus::Cancelado.variant(), BadgeVariant::Destructive);
  assert_eq!(OrderStatus::Finalizado.variant(), BadgeVariant::Success);
}

#[test]
fn registry_listing_is_in_lifecycle_order() {
  let statuses: Vec<_> = all_status_configs().into_iter().map(|c| c.status).collect();
  assert_eq!(statuses, OrderStatus::ALL.to_vec());
}

#[test]
fn config_serializes_for_the_api() {
  let value = serde_json::to_value(OrderStatus::Enviado.config()).unwrap();
  assert_eq!(value["status"], "enviado");
  assert_eq!(value["label"], "Enviado");
  assert_eq!(value["icon"], "truck");
  assert_eq!(value["variant"], "default");
  assert_eq!(value["transitions"], serde_json::json!(["finalizado", "cancelado"]));
}

#[test]
fn endpoint_allow_list_accepts_exactly_six_values() {
  let accepted: Vec<_> = ["pendente", "em_preparacao", "despachado", "finalizado", "cancelado", "reembolsado"]
    .into_iter()
    .map(|s| s.parse::<EndpointStatus>().unwrap())
    .collect();
  assert_eq!(accepted, EndpointStatus::ALL.to_vec());
}

#[test]
fn endpoint_rejects_registry_only_statuses() {
  for name in ["recebido", "embalado", "enviado", "em_reposicao", "em_falta"] {
    match name.parse::<EndpointStatus>() {
      Err(CoreError::InvalidStatus(s)) => assert_eq!(s, name),
      other => panic!("{} should be rejected, got {:?}", name, other),
    }
  }
  assert!("Despachado".parse::<EndpointStatus>().is_err());
  assert!(" pendente".parse::<EndpointStatus>().is_err());
}

#[test]
fn despachado_has_no_registry_counterpart() {
  assert_eq!(EndpointStatus::Despachado.as_registry_status(), None);
  assert!("despachado".parse::<OrderStatus>().is_err());
  for status in EndpointStatus::ALL {
    if let Some(registry) = status.as_registry_status() {
      assert_eq!(registry.as_str(), status.as_str());
    }
  }
}
