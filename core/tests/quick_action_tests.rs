// tests/quick_action_tests.rs
use loja_core::{allowed_actions, quick_actions, OrderStatus, Role};

#[test]
fn quick_actions_only_offer_legal_transitions() {
  for status in OrderStatus::ALL {
    for action in quick_actions(status) {
      assert!(
        status.can_transition_to(action.target),
        "{} offers {} -> {}",
        action.key,
        status,
        action.target
      );
    }
  }
}

#[test]
fn suppliers_never_cancel_or_refund() {
  for status in OrderStatus::ALL {
    let targets = allowed_actions(status, Role::Supplier);
    assert!(!targets.contains(&OrderStatus::Cancelado));
    assert!(!targets.contains(&OrderStatus::Reembolsado));
  }
}

#[test]
fn admin_gets_the_full_adjacency() {
  for status in OrderStatus::ALL {
    assert_eq!(allowed_actions(status, Role::Admin), status.transitions().to_vec());
  }
}

#[test]
fn shipping_requires_a_tracking_code() {
  let ship = quick_actions(OrderStatus::Embalado)
    .iter()
    .find(|a| a.target == OrderStatus::Enviado)
    .expect("embalado offers shipping");
  assert!(ship.requires_tracking);
  assert_eq!(ship.key, "mark_shipped");
}

#[test]
fn closed_orders_have_no_buttons() {
  for status in [OrderStatus::Finalizado, OrderStatus::Cancelado, OrderStatus::Reembolsado, OrderStatus::EmFalta] {
    assert!(quick_actions(status).is_empty(), "{}", status);
  }
}

#[test]
fn pendente_supplier_flow() {
  assert_eq!(allowed_actions(OrderStatus::Pendente, Role::Supplier), vec![OrderStatus::Recebido]);
  assert_eq!(
    allowed_actions(OrderStatus::Recebido, Role::Supplier),
    vec![OrderStatus::EmPreparacao, OrderStatus::EmFalta]
  );
}

#[test]
fn roles_parse_from_config_names() {
  assert_eq!("supplier".parse::<Role>().unwrap(), Role::Supplier);
  assert_eq!("Fornecedor".parse::<Role>().unwrap(), Role::Supplier);
  assert_eq!(" ADMIN ".parse::<Role>().unwrap(), Role::Admin);
  assert!("reseller".parse::<Role>().is_err());
}
