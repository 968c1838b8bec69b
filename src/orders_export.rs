//! Exportacion del historial de ordenes a texto legible. No esta pensado para volver a leerse.
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::{
    errors::PizzeriaError,
    order::Order,
    pricing::{format_money, totals},
    topping::format_toppings,
};

pub fn export_orders(orders: &[Order]) -> String {
    let mut text = String::new();
    if orders.is_empty() {
        text.push_str("There are no orders.\n");
    }
    for order in orders {
        let _ = write_order(&mut text, order);
    }
    text
}

fn write_order(text: &mut String, order: &Order) -> std::fmt::Result {
    writeln!(text, "Order Number: {}", order.number())?;
    writeln!(text, "Pizzas:")?;
    for pizza in order.pizzas() {
        writeln!(text, "- {} ({}, {})", pizza.kind(), pizza.size(), pizza.crust())?;
        writeln!(text, "  Toppings: {}", format_toppings(pizza.toppings()))?;
        writeln!(text, "  Price: ${}", format_money(pizza.price()))?;
    }
    let totals = totals(order);
    writeln!(text, "Subtotal: ${}", format_money(totals.subtotal))?;
    writeln!(text, "Sales Tax: ${}", format_money(totals.sales_tax))?;
    writeln!(text, "Total Amount: ${}", format_money(totals.total))?;
    writeln!(text)
}

fn write_file(orders: &[Order], path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(export_orders(orders).as_bytes())?;
    writer.flush()
}

/// Guarda el historial en `path`. Devuelve el mensaje para mostrar al usuario;
/// si no se puede escribir, `ExportError` indica el archivo y el motivo.
pub fn save_orders_to_file<P: AsRef<Path>>(
    orders: &[Order],
    path: P,
) -> Result<String, PizzeriaError> {
    let path = path.as_ref();
    write_file(orders, path).map_err(|source| PizzeriaError::ExportError {
        path: path.display().to_string(),
        source,
    })?;
    info!("[EXPORT] Saved {} orders to {}", orders.len(), path.display());
    Ok("Orders saved to the file.".to_string())
}
