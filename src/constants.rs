//! Parametros de configuracion de la pizzeria.
//! Precios expresados en centavos, ver `cents`.

use rust_decimal::Decimal;

/// Numero que recibe la primera orden de la ejecucion
pub const FIRST_ORDER_NUMBER: i32 = 1;

/// Cantidad maxima de ingredientes en una pizza armada por el cliente
pub const MAX_TOPPINGS: usize = 7;

/// Precio de cada ingrediente extra de BuildYourOwn, sin importar cual sea
pub const TOPPING_PRICE_CENTS: i64 = 169;

/// Precio base de BuildYourOwn por tamaño (chica, mediana, grande)
pub const BASE_PRICE_CENTS: [i64; 3] = [899, 1099, 1299];

/// Precios fijos por tamaño de las pizzas con receta
pub const DELUXE_PRICE_CENTS: [i64; 3] = [1699, 1899, 2099];
pub const BBQ_CHICKEN_PRICE_CENTS: [i64; 3] = [1499, 1699, 1999];
pub const MEATZZA_PRICE_CENTS: [i64; 3] = [1799, 1999, 2199];

/// Tasa de impuesto a las ventas en cienmilesimos: 6625 es 6.625%
pub const SALES_TAX_RATE_HUNDRED_THOUSANDTHS: i64 = 6625;

/// Archivo de pedidos que se lee si no se indica otro
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";

/// Archivo al que se exporta el historial si no se indica otro
pub const DEFAULT_EXPORT_FILE: &str = "orders_export.txt";

/// Convierte centavos a un monto decimal
pub fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// Tasa de impuesto como decimal exacto
pub fn sales_tax_rate() -> Decimal {
    Decimal::new(SALES_TAX_RATE_HUNDRED_THOUSANDTHS, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_exact_amounts() {
        assert_eq!("8.99".parse::<Decimal>().unwrap(), cents(899));
        assert_eq!("0.06625".parse::<Decimal>().unwrap(), sales_tax_rate());
    }
}
