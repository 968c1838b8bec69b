use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::app_state::AppState;
use crate::crust::Crust;
use crate::errors::PizzeriaError;
use crate::pizza::{Pizza, PizzaKind};
use crate::pizza_factory::PizzaStyle;
use crate::size::Size;

#[derive(Deserialize, Debug)]
struct JsonPizza {
    style: PizzaStyle,
    kind: PizzaKind,
    size: Size,
    #[serde(default)]
    crust: Option<Crust>,
    #[serde(default)]
    toppings: Vec<String>,
    #[serde(default = "default_quantity")]
    quantity: usize,
}

#[derive(Deserialize, Debug)]
struct JsonOrder {
    pizzas: Vec<JsonPizza>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn default_quantity() -> usize {
    1
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, PizzeriaError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn build_pizza(json_pizza: &JsonPizza) -> Result<Pizza, PizzeriaError> {
    let mut pizza = json_pizza.style.factory(json_pizza.size).create(json_pizza.kind);
    if let Some(crust) = json_pizza.crust {
        pizza.set_crust(crust);
    }
    for topping in &json_pizza.toppings {
        pizza.add_topping_by_name(topping)?;
    }
    Ok(pizza)
}

/// Arma todas las pizzas antes de tocar el manager, asi un archivo con errores
/// no deja ordenes a medio cargar.
fn build_orders(json_orders: Vec<JsonOrder>) -> Result<Vec<Vec<(Pizza, usize)>>, PizzeriaError> {
    json_orders
        .iter()
        .map(|order| {
            order
                .pizzas
                .iter()
                .map(|json_pizza| {
                    build_pizza(json_pizza).map(|pizza| (pizza, json_pizza.quantity))
                })
                .collect()
        })
        .collect()
}

fn add_orders_to_manager(
    orders: Vec<Vec<(Pizza, usize)>>,
    state: &AppState,
) -> Result<Vec<i32>, PizzeriaError> {
    let mut placed = Vec::new();
    for pizzas in orders {
        let number = state.with_manager(|manager| {
            for (pizza, quantity) in &pizzas {
                manager.add_to_current_order_with_quantity(pizza, *quantity);
            }
            manager.place_current_order()
        })?;
        debug!("[READER] Added order {} with {} entries", number, pizzas.len());
        placed.push(number);
    }
    info!("[READER] No more orders left");
    Ok(placed)
}

/// Lee el archivo de pedidos y realiza una orden por cada entrada.
/// Devuelve los numeros de las ordenes realizadas.
pub fn read_and_add_orders<P: AsRef<Path>>(
    state: &AppState,
    path: P,
) -> Result<Vec<i32>, PizzeriaError> {
    let json_orders = read_orders_from_file(path)?;
    let orders = build_orders(json_orders)?;
    add_orders_to_manager(orders, state)
}
