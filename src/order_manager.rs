//! Coordinador de pedidos. Mantiene la orden actual, el historial de ordenes
//! realizadas y el contador con el que se numera la proxima orden.
use std::cmp::min;

use log::{debug, info, warn};

use crate::{
    constants::FIRST_ORDER_NUMBER,
    order::Order,
    pizza::{Pizza, PizzaKind},
};

/// Siempre existe exactamente una orden actual, numerada con `next_order_number`.
/// El historial solo tiene ordenes con numero menor al contador.
#[derive(Debug)]
pub struct OrderManager {
    next_order_number: i32,
    current_order: Order,
    placed_orders: Vec<Order>,
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderManager {
    pub fn new() -> OrderManager {
        OrderManager {
            next_order_number: FIRST_ORDER_NUMBER,
            current_order: Order::new(FIRST_ORDER_NUMBER),
            placed_orders: Vec::new(),
        }
    }

    pub fn add_to_current_order(&mut self, pizza: Pizza) {
        debug!(
            "[ORDER MANAGER] Added {} ({}) to order {}",
            pizza.kind(),
            pizza,
            self.current_order.number()
        );
        self.current_order.add_pizza(pizza);
    }

    pub fn add_to_current_order_with_quantity(&mut self, pizza: &Pizza, quantity: usize) {
        debug!(
            "[ORDER MANAGER] Added {} x {} to order {}",
            quantity,
            pizza.kind(),
            self.current_order.number()
        );
        self.current_order.add_pizzas(pizza, quantity);
    }

    pub fn remove_from_current_order(&mut self, index: usize) -> Option<Pizza> {
        let removed = self.current_order.remove_pizza(index);
        if removed.is_none() {
            debug!("[ORDER MANAGER] No pizza at position {} to remove", index);
        }
        removed
    }

    /// Vacia la orden actual conservando su numero
    pub fn clear_current_order(&mut self) {
        self.current_order.clear();
        debug!("[ORDER MANAGER] Cleared order {}", self.current_order.number());
    }

    /// Pasa la orden actual al historial y abre una nueva con el siguiente numero.
    /// No rechaza ordenes vacias, eso lo controla quien llama.
    pub fn place_current_order(&mut self) -> i32 {
        if self.current_order.is_empty() {
            warn!("[ORDER MANAGER] Placing order {} without pizzas", self.current_order.number());
        }
        self.next_order_number += 1;
        let placed = std::mem::replace(&mut self.current_order, Order::new(self.next_order_number));
        let placed_number = placed.number();
        self.placed_orders.push(placed);
        info!("[ORDER MANAGER] Placed order {}", placed_number);
        placed_number
    }

    /// Cancela la orden con ese numero y renumera el resto.
    ///
    /// La renumeracion solo ocurre si la cantidad de pizzas de la orden actual es distinta
    /// de `contador - 1`: en ese caso se decrementa el contador, la orden actual toma ese
    /// numero y cada orden del historial recibe `min(numero, corriente)` con un numero
    /// corriente que arranca en 1 y aumenta de a uno. Compara pizzas con ordenes; se
    /// mantiene asi hasta que se decida la regla correcta.
    ///
    /// El contador puede quedar en cero o negativo si la orden actual tiene pizzas.
    ///
    /// Devuelve si habia una orden con ese numero. La renumeracion se aplica igual.
    pub fn cancel_order(&mut self, order_number: i32) -> bool {
        let before = self.placed_orders.len();
        self.placed_orders.retain(|order| order.number() != order_number);
        let removed = self.placed_orders.len() != before;
        if removed {
            info!("[ORDER MANAGER] Cancelled order {}", order_number);
        } else {
            debug!("[ORDER MANAGER] No order {} to cancel", order_number);
        }

        if self.current_order.len() as i32 != self.next_order_number - 1 {
            self.next_order_number -= 1;
            self.current_order.set_number(self.next_order_number);
            let mut running_number = 1;
            for order in self.placed_orders.iter_mut() {
                running_number = min(order.number(), running_number);
                order.set_number(running_number);
                running_number += 1;
            }
            debug!(
                "[ORDER MANAGER] Renumbered {} orders, current order is {}",
                self.placed_orders.len(),
                self.next_order_number
            );
        }
        removed
    }

    pub fn order_from_number(&self, order_number: i32) -> Option<&Order> {
        self.placed_orders.iter().find(|order| order.number() == order_number)
    }

    pub fn all_orders(&self) -> &[Order] {
        &self.placed_orders
    }

    pub fn current_order(&self) -> &Order {
        &self.current_order
    }

    pub fn next_order_number(&self) -> i32 {
        self.next_order_number
    }

    pub fn filter_pizza_by_kind(&self, kind: PizzaKind) -> Vec<&Pizza> {
        self.current_order.pizzas_of_kind(kind)
    }
}
