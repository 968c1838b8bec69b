//! Pizza y sus variantes. Todas comparten la forma (ingredientes, masa, tamaño);
//! la variante decide el precio y si los ingredientes se pueden modificar.
use std::fmt;

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    constants::{
        cents, BASE_PRICE_CENTS, BBQ_CHICKEN_PRICE_CENTS, DELUXE_PRICE_CENTS, MAX_TOPPINGS,
        MEATZZA_PRICE_CENTS, TOPPING_PRICE_CENTS,
    },
    crust::Crust,
    errors::PizzeriaError,
    size::Size,
    topping::{format_toppings, Topping},
};

pub type Money = Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaKind {
    BuildYourOwn,
    Deluxe,
    BbqChicken,
    Meatzza,
}

impl PizzaKind {
    pub const ALL: [PizzaKind; 4] = [
        PizzaKind::BuildYourOwn,
        PizzaKind::Deluxe,
        PizzaKind::BbqChicken,
        PizzaKind::Meatzza,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PizzaKind::BuildYourOwn => "BuildYourOwn",
            PizzaKind::Deluxe => "Deluxe",
            PizzaKind::BbqChicken => "BBQChicken",
            PizzaKind::Meatzza => "Meatzza",
        }
    }

    /// Receta de la variante. BuildYourOwn arranca sin ingredientes.
    pub fn recipe(&self) -> &'static [Topping] {
        match self {
            PizzaKind::BuildYourOwn => &[],
            PizzaKind::Deluxe => &[
                Topping::Sausage,
                Topping::Pepperoni,
                Topping::GreenPepper,
                Topping::Onion,
                Topping::Mushroom,
            ],
            PizzaKind::BbqChicken => &[
                Topping::BbqChicken,
                Topping::GreenPepper,
                Topping::Provolone,
                Topping::Cheddar,
            ],
            PizzaKind::Meatzza => &[
                Topping::Sausage,
                Topping::Pepperoni,
                Topping::Beef,
                Topping::Ham,
            ],
        }
    }

    pub fn is_customizable(&self) -> bool {
        *self == PizzaKind::BuildYourOwn
    }
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Una pizza. Se clona en profundidad cuando se agrega varias veces a una orden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    kind: PizzaKind,
    toppings: Vec<Topping>,
    crust: Crust,
    size: Size,
}

impl Pizza {
    pub fn new(kind: PizzaKind, crust: Crust, size: Size) -> Pizza {
        Pizza {
            kind,
            toppings: kind.recipe().to_vec(),
            crust,
            size,
        }
    }

    pub fn build_your_own(crust: Crust, size: Size) -> Pizza {
        Pizza::new(PizzaKind::BuildYourOwn, crust, size)
    }

    pub fn deluxe(crust: Crust, size: Size) -> Pizza {
        Pizza::new(PizzaKind::Deluxe, crust, size)
    }

    pub fn bbq_chicken(crust: Crust, size: Size) -> Pizza {
        Pizza::new(PizzaKind::BbqChicken, crust, size)
    }

    pub fn meatzza(crust: Crust, size: Size) -> Pizza {
        Pizza::new(PizzaKind::Meatzza, crust, size)
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn crust(&self) -> Crust {
        self.crust
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_crust(&mut self, crust: Crust) {
        self.crust = crust;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Agrega un ingrediente. Si ya esta o si ya hay `MAX_TOPPINGS` no hace nada.
    /// Las variantes con receta fija devuelven `FixedRecipe`.
    pub fn add_topping(&mut self, topping: Topping) -> Result<(), PizzeriaError> {
        self.check_customizable()?;
        if self.toppings.contains(&topping) {
            debug!("[PIZZA] Topping already added: {}", topping);
        } else if self.toppings.len() >= MAX_TOPPINGS {
            debug!("[PIZZA] Cannot add more than {} toppings", MAX_TOPPINGS);
        } else {
            self.toppings.push(topping);
            debug!("[PIZZA] Added topping {}, new price {}", topping, self.price());
        }
        Ok(())
    }

    /// Quita un ingrediente si esta. Las variantes con receta fija devuelven `FixedRecipe`.
    pub fn remove_topping(&mut self, topping: Topping) -> Result<(), PizzeriaError> {
        self.check_customizable()?;
        if let Some(position) = self.toppings.iter().position(|t| *t == topping) {
            self.toppings.remove(position);
            debug!("[PIZZA] Removed topping {}, new price {}", topping, self.price());
        } else {
            debug!("[PIZZA] Topping not found: {}", topping);
        }
        Ok(())
    }

    pub fn add_topping_by_name(&mut self, name: &str) -> Result<(), PizzeriaError> {
        let topping = Topping::from_display_name(name)?;
        self.add_topping(topping)
    }

    pub fn remove_topping_by_name(&mut self, name: &str) -> Result<(), PizzeriaError> {
        let topping = Topping::from_display_name(name)?;
        self.remove_topping(topping)
    }

    fn check_customizable(&self) -> Result<(), PizzeriaError> {
        if self.kind.is_customizable() {
            Ok(())
        } else {
            Err(PizzeriaError::FixedRecipe(self.kind))
        }
    }

    /// Precio base de BuildYourOwn segun el tamaño
    pub fn base_price(&self) -> Money {
        cents(BASE_PRICE_CENTS[self.size.price_index()])
    }

    pub fn price(&self) -> Money {
        let index = self.size.price_index();
        match self.kind {
            PizzaKind::BuildYourOwn => {
                self.base_price() + cents(TOPPING_PRICE_CENTS) * Decimal::from(self.toppings.len())
            }
            PizzaKind::Deluxe => cents(DELUXE_PRICE_CENTS[index]),
            PizzaKind::BbqChicken => cents(BBQ_CHICKEN_PRICE_CENTS[index]),
            PizzaKind::Meatzza => cents(MEATZZA_PRICE_CENTS[index]),
        }
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {}, Crust: {}, Toppings: {}",
            self.size,
            self.crust,
            format_toppings(&self.toppings)
        )
    }
}
