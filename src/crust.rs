use std::fmt;

use serde::Deserialize;

/// Masas disponibles. Ninguna pizza valida que su masa corresponda al estilo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crust {
    DeepDish,
    Brooklyn,
    Pan,
    Thin,
    Stuffed,
    HandTossed,
}

impl Crust {
    pub fn display_name(&self) -> &'static str {
        match self {
            Crust::DeepDish => "Deep Dish",
            Crust::Brooklyn => "Brooklyn",
            Crust::Pan => "Pan",
            Crust::Thin => "Thin",
            Crust::Stuffed => "Stuffed",
            Crust::HandTossed => "Hand-tossed",
        }
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_the_crust_name() {
        assert_eq!("Deep Dish", Crust::DeepDish.to_string());
        assert_eq!("Hand-tossed", Crust::HandTossed.to_string());
        assert_eq!("Brooklyn", Crust::Brooklyn.to_string());
    }
}
