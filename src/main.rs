pub mod app_state;
pub mod constants;
pub mod crust;
pub mod errors;
pub mod order;
pub mod order_manager;
pub mod orders_export;
pub mod orders_reader;
pub mod pizza;
pub mod pizza_factory;
pub mod pricing;
pub mod size;
pub mod topping;

use std::env;

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use app_state::AppState;
use constants::{DEFAULT_EXPORT_FILE, DEFAULT_ORDERS_FILE};
use errors::PizzeriaError;
use pricing::{format_money, total_amount};

fn log_order_totals(state: &AppState) -> Result<(), PizzeriaError> {
    state.with_manager(|manager| {
        for order in manager.all_orders() {
            info!(
                "[PIZZERIA] Order {}: {} pizzas, total ${}",
                order.number(),
                order.len(),
                format_money(total_amount(order))
            );
        }
    })
}

fn export_history(state: &AppState, export_path: &str) -> Result<String, PizzeriaError> {
    state.with_manager(|manager| {
        orders_export::save_orders_to_file(manager.all_orders(), export_path)
    })?
}

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let mut args = env::args().skip(1);
    let orders_path = args.next().unwrap_or_else(|| DEFAULT_ORDERS_FILE.to_string());
    let export_path = args.next().unwrap_or_else(|| DEFAULT_EXPORT_FILE.to_string());

    let state = AppState::new();
    if let Err(err) = orders_reader::read_and_add_orders(&state, &orders_path) {
        error!("[PIZZERIA] Error reading orders from {}: {}", orders_path, err);
        return;
    }
    if let Err(err) = log_order_totals(&state) {
        error!("[PIZZERIA] {}", err);
    }

    match export_history(&state, &export_path) {
        Ok(message) => info!("[PIZZERIA] {}", message),
        Err(err) => error!("[PIZZERIA] {}", err),
    }
}
