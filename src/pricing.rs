//! Calculo de montos de una orden. Funciones puras, sin estado.
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{constants::sales_tax_rate, order::Order, pizza::Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub sales_tax: Money,
    pub total: Money,
}

pub fn subtotal(order: &Order) -> Money {
    order.pizzas().iter().map(|pizza| pizza.price()).sum()
}

pub fn sales_tax(subtotal: Money) -> Money {
    subtotal * sales_tax_rate()
}

pub fn total(subtotal: Money, sales_tax: Money) -> Money {
    subtotal + sales_tax
}

pub fn total_amount(order: &Order) -> Money {
    totals(order).total
}

pub fn totals(order: &Order) -> OrderTotals {
    let subtotal = subtotal(order);
    let sales_tax = sales_tax(subtotal);
    OrderTotals {
        subtotal,
        sales_tax,
        total: total(subtotal, sales_tax),
    }
}

/// Formatea un monto con dos decimales, redondeando la mitad hacia arriba
pub fn format_money(amount: Money) -> String {
    let mut rounded: Decimal =
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
