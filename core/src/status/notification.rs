// loja_core/src/status/notification.rs

//! Customer-facing notification messages per status.
//!
//! Templates use `{numero}` (order number), `{codigo}` (tracking code) and
//! `{data}` (a preformatted date). Substitution is literal: values are not
//! escaped and a placeholder without a value is left in the text as-is.

use crate::status::order_status::OrderStatus;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

pub const fn notification_template(status: OrderStatus) -> &'static str {
  match status {
    OrderStatus::Pendente => "Recebemos seu pedido #{numero} em {data}. Aguardando confirmação do fornecedor.",
    OrderStatus::Recebido => "Seu pedido #{numero} foi recebido e logo entrará em preparação.",
    OrderStatus::EmPreparacao => "Seu pedido #{numero} está sendo preparado.",
    OrderStatus::Embalado => "Seu pedido #{numero} foi embalado e aguarda o envio.",
    OrderStatus::Enviado => "Seu pedido #{numero} foi enviado! Código de rastreio: {codigo}",
    OrderStatus::EmReposicao => "Alguns itens do seu pedido #{numero} estão em reposição. Previsão: {data}.",
    OrderStatus::EmFalta => "Infelizmente itens do seu pedido #{numero} estão em falta. Entraremos em contato.",
    OrderStatus::Finalizado => "Seu pedido #{numero} foi entregue em {data}. Obrigado pela compra!",
    OrderStatus::Cancelado => "Seu pedido #{numero} foi cancelado.",
    OrderStatus::Reembolsado => "O reembolso do seu pedido #{numero} foi processado em {data}.",
  }
}

/// Renders the template of `status` against `placeholders`.
///
/// Single pass over the template, so a substituted value is never scanned
/// for further placeholders.
pub fn render_notification<K, V>(status: OrderStatus, placeholders: &HashMap<K, V>) -> String
where
  K: Borrow<str> + Hash + Eq,
  V: AsRef<str>,
{
  let template = notification_template(status);
  let mut out = String::with_capacity(template.len() + 16);
  let mut rest = template;

  while let Some(open) = rest.find('{') {
    out.push_str(&rest[..open]);
    let after_open = &rest[open + 1..];
    match after_open.find('}') {
      Some(close) => {
        let key = &after_open[..close];
        match placeholders.get(key) {
          Some(value) => out.push_str(value.as_ref()),
          None => {
            out.push('{');
            out.push_str(key);
            out.push('}');
          }
        }
        rest = &after_open[close + 1..];
      }
      None => {
        out.push_str(&rest[open..]);
        rest = "";
      }
    }
  }
  out.push_str(rest);
  out
}

/// Same as [`render_notification`] for a raw status string. `None` when the
/// string is not a registry status.
pub fn notification_message<K, V>(status: &str, placeholders: &HashMap<K, V>) -> Option<String>
where
  K: Borrow<str> + Hash + Eq,
  V: AsRef<str>,
{
  status
    .parse::<OrderStatus>()
    .ok()
    .map(|status| render_notification(status, placeholders))
}

/// Typed placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPlaceholders {
  pub numero: Option<String>,
  pub codigo: Option<String>,
  pub data: Option<String>,
}

impl NotificationPlaceholders {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn numero(mut self, numero: impl Into<String>) -> Self {
    self.numero = Some(numero.into());
    self
  }

  pub fn codigo(mut self, codigo: impl Into<String>) -> Self {
    self.codigo = Some(codigo.into());
    self
  }

  pub fn data(mut self, data: impl Into<String>) -> Self {
    self.data = Some(data.into());
    self
  }

  /// Only the placeholders that carry a value.
  pub fn to_map(&self) -> HashMap<&'static str, String> {
    [("numero", &self.numero), ("codigo", &self.codigo), ("data", &self.data)]
      .into_iter()
      .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
      .collect()
  }

  pub fn render(&self, status: OrderStatus) -> String {
    render_notification(status, &self.to_map())
  }
}
