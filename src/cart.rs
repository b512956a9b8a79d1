// src/cart.rs

//! Explicit application-state container for carts. All mutation goes
//! through [`CartAction`] transition messages applied to a per-user
//! [`Cart`] held in the [`CartRegistry`]; nothing mutates cart state
//! ambiently.

use crate::models::{CartItem, PaymentMethod, ShippingAddress};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  pub items: Vec<CartItem>,
  pub shipping_address: Option<ShippingAddress>,
  pub payment_method: Option<PaymentMethod>,
}

/// The transitions a cart can undergo. `AddItem` carries the full line,
/// quantity included; adding a product already in the cart replaces its
/// line. `ClearItems` empties the item sequence only; the shipping
/// address and payment method selections survive checkout.
#[derive(Debug, Clone)]
pub enum CartAction {
  AddItem(CartItem),
  RemoveItem(Uuid),
  SaveShippingAddress(ShippingAddress),
  SavePaymentMethod(PaymentMethod),
  ClearItems,
}

impl Cart {
  pub fn apply(&mut self, action: CartAction) {
    match action {
      CartAction::AddItem(item) => {
        match self.items.iter_mut().find(|line| line.product == item.product) {
          Some(line) => *line = item,
          None => self.items.push(item),
        }
      }
      CartAction::RemoveItem(product) => {
        self.items.retain(|line| line.product != product);
      }
      CartAction::SaveShippingAddress(address) => {
        self.shipping_address = Some(address);
      }
      CartAction::SavePaymentMethod(method) => {
        self.payment_method = Some(method);
      }
      CartAction::ClearItems => {
        self.items.clear();
      }
    }
  }
}

/// Per-user cart storage for the duration of the process. Lock guards are
/// internal to each call and MUST NOT be held across await points.
#[derive(Debug, Default)]
pub struct CartRegistry {
  carts: RwLock<HashMap<Uuid, Cart>>,
}

impl CartRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// A clone of the user's cart; an untouched user gets the empty cart.
  pub fn snapshot(&self, user_id: Uuid) -> Cart {
    self.carts.read().get(&user_id).cloned().unwrap_or_default()
  }

  /// Applies one transition and returns the resulting cart state.
  pub fn apply(&self, user_id: Uuid, action: CartAction) -> Cart {
    let mut carts = self.carts.write();
    let cart = carts.entry(user_id).or_default();
    cart.apply(action);
    cart.clone()
  }
}
