//! Fabricas de pizzas por estilo. Cada estilo fija la masa de cada variante;
//! el tamaño se configura al crear la fabrica.
use serde::Deserialize;

use crate::{
    crust::Crust,
    pizza::{Pizza, PizzaKind},
    size::Size,
};

pub trait PizzaFactory {
    fn create_deluxe(&self) -> Pizza;
    fn create_meatzza(&self) -> Pizza;
    fn create_bbq_chicken(&self) -> Pizza;
    fn create_build_your_own(&self) -> Pizza;

    fn create(&self, kind: PizzaKind) -> Pizza {
        match kind {
            PizzaKind::Deluxe => self.create_deluxe(),
            PizzaKind::Meatzza => self.create_meatzza(),
            PizzaKind::BbqChicken => self.create_bbq_chicken(),
            PizzaKind::BuildYourOwn => self.create_build_your_own(),
        }
    }
}

pub struct ChicagoPizza {
    default_size: Size,
}

impl ChicagoPizza {
    pub fn new(default_size: Size) -> ChicagoPizza {
        ChicagoPizza { default_size }
    }
}

impl PizzaFactory for ChicagoPizza {
    fn create_deluxe(&self) -> Pizza {
        Pizza::deluxe(Crust::DeepDish, self.default_size)
    }

    fn create_meatzza(&self) -> Pizza {
        Pizza::meatzza(Crust::HandTossed, self.default_size)
    }

    fn create_bbq_chicken(&self) -> Pizza {
        Pizza::bbq_chicken(Crust::Pan, self.default_size)
    }

    fn create_build_your_own(&self) -> Pizza {
        Pizza::build_your_own(Crust::Pan, self.default_size)
    }
}

pub struct NyPizza {
    default_size: Size,
}

impl NyPizza {
    pub fn new(default_size: Size) -> NyPizza {
        NyPizza { default_size }
    }
}

impl PizzaFactory for NyPizza {
    fn create_deluxe(&self) -> Pizza {
        Pizza::deluxe(Crust::Brooklyn, self.default_size)
    }

    fn create_meatzza(&self) -> Pizza {
        Pizza::meatzza(Crust::HandTossed, self.default_size)
    }

    fn create_bbq_chicken(&self) -> Pizza {
        Pizza::bbq_chicken(Crust::Thin, self.default_size)
    }

    fn create_build_your_own(&self) -> Pizza {
        Pizza::build_your_own(Crust::HandTossed, self.default_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaStyle {
    Chicago,
    NewYork,
}

impl PizzaStyle {
    pub fn factory(&self, size: Size) -> Box<dyn PizzaFactory> {
        match self {
            PizzaStyle::Chicago => Box::new(ChicagoPizza::new(size)),
            PizzaStyle::NewYork => Box::new(NyPizza::new(size)),
        }
    }
}
