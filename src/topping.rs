//! Ingredientes que se pueden poner sobre una pizza
use std::{fmt, str::FromStr};

use crate::errors::PizzeriaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    Sausage,
    Pepperoni,
    GreenPepper,
    Onion,
    Mushroom,
    BbqChicken,
    Provolone,
    Cheddar,
    Beef,
    Ham,
}

impl Topping {
    pub const ALL: [Topping; 10] = [
        Topping::Sausage,
        Topping::Pepperoni,
        Topping::GreenPepper,
        Topping::Onion,
        Topping::Mushroom,
        Topping::BbqChicken,
        Topping::Provolone,
        Topping::Cheddar,
        Topping::Beef,
        Topping::Ham,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Topping::Sausage => "Sausage",
            Topping::Pepperoni => "Pepperoni",
            Topping::GreenPepper => "Green Pepper",
            Topping::Onion => "Onion",
            Topping::Mushroom => "Mushroom",
            Topping::BbqChicken => "BBQ Chicken",
            Topping::Provolone => "Provolone",
            Topping::Cheddar => "Cheddar",
            Topping::Beef => "Beef",
            Topping::Ham => "Ham",
        }
    }

    /// Busca el ingrediente por su nombre visible, sin distinguir mayusculas.
    /// No acepta el nombre del identificador (`GreenPepper` no es `Green Pepper`).
    pub fn from_display_name(text: &str) -> Result<Topping, PizzeriaError> {
        Topping::ALL
            .iter()
            .find(|topping| topping.display_name().eq_ignore_ascii_case(text))
            .copied()
            .ok_or_else(|| PizzeriaError::InvalidTopping(text.to_string()))
    }
}

impl FromStr for Topping {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topping::from_display_name(s)
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Formatea una lista de ingredientes como `[Sausage, Pepperoni]`
pub fn format_toppings(toppings: &[Topping]) -> String {
    let names: Vec<&str> = toppings.iter().map(|topping| topping.display_name()).collect();
    format!("[{}]", names.join(", "))
}
