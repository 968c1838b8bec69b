use std::fmt;

use crate::pizza::{Pizza, PizzaKind};

/// Orden identificada por numero. Contiene sus pizzas en el orden en que se agregaron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    number: i32,
    pizzas: Vec<Pizza>,
}

impl Order {
    pub fn new(number: i32) -> Order {
        Order { number, pizzas: Vec::new() }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub(crate) fn set_number(&mut self, number: i32) {
        self.number = number;
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn pizzas_mut(&mut self) -> &mut Vec<Pizza> {
        &mut self.pizzas
    }

    pub fn add_pizza(&mut self, pizza: Pizza) {
        self.pizzas.push(pizza);
    }

    /// Agrega `quantity` copias independientes de la pizza
    pub fn add_pizzas(&mut self, pizza: &Pizza, quantity: usize) {
        self.pizzas.extend(std::iter::repeat(pizza).take(quantity).cloned());
    }

    /// Quita la pizza en la posicion indicada. Si no existe no hace nada.
    pub fn remove_pizza(&mut self, index: usize) -> Option<Pizza> {
        if index < self.pizzas.len() {
            Some(self.pizzas.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.pizzas.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn pizzas_of_kind(&self, kind: PizzaKind) -> Vec<&Pizza> {
        self.pizzas.iter().filter(|pizza| pizza.kind() == kind).collect()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order number: {}", self.number)?;
        for pizza in &self.pizzas {
            writeln!(f, "{}", pizza)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{crust::Crust, size::Size, topping::Topping};

    #[test]
    fn should_create_an_empty_order() {
        let order = Order::new(1);
        assert_eq!(1, order.number());
        assert_eq!(true, order.is_empty());
    }

    #[test]
    fn should_keep_pizzas_in_insertion_order() {
        let mut order = Order::new(1);
        order.add_pizza(Pizza::deluxe(Crust::DeepDish, Size::Small));
        order.add_pizza(Pizza::meatzza(Crust::HandTossed, Size::Large));

        let kinds: Vec<PizzaKind> = order.pizzas().iter().map(|p| p.kind()).collect();
        assert_eq!(vec![PizzaKind::Deluxe, PizzaKind::Meatzza], kinds);
    }

    #[test]
    fn should_remove_a_pizza_by_position() {
        let mut order = Order::new(1);
        order.add_pizza(Pizza::deluxe(Crust::DeepDish, Size::Small));
        order.add_pizza(Pizza::meatzza(Crust::HandTossed, Size::Large));

        let removed = order.remove_pizza(0);

        assert_eq!(Some(PizzaKind::Deluxe), removed.map(|p| p.kind()));
        assert_eq!(1, order.len());
    }

    #[test]
    fn should_ignore_removing_a_missing_pizza() {
        let mut order = Order::new(1);
        order.add_pizza(Pizza::deluxe(Crust::DeepDish, Size::Small));

        assert_eq!(true, order.remove_pizza(3).is_none());
        assert_eq!(1, order.len());
    }

    #[test]
    fn should_add_independent_copies_for_a_quantity() {
        let mut pizza = Pizza::build_your_own(Crust::Pan, Size::Small);
        pizza.add_topping(Topping::Onion).unwrap();
        let mut order = Order::new(1);

        order.add_pizzas(&pizza, 3);
        order.pizzas_mut()[0].add_topping(Topping::Ham).unwrap();

        assert_eq!(3, order.len());
        assert_eq!(2, order.pizzas()[0].toppings().len());
        assert_eq!(1, order.pizzas()[1].toppings().len());
        assert_eq!(1, pizza.toppings().len());
    }

    #[test]
    fn should_filter_pizzas_by_kind() {
        let mut order = Order::new(1);
        order.add_pizza(Pizza::deluxe(Crust::DeepDish, Size::Small));
        order.add_pizza(Pizza::meatzza(Crust::HandTossed, Size::Large));
        order.add_pizza(Pizza::deluxe(Crust::Brooklyn, Size::Medium));

        assert_eq!(2, order.pizzas_of_kind(PizzaKind::Deluxe).len());
        assert_eq!(0, order.pizzas_of_kind(PizzaKind::BbqChicken).len());
    }

    #[test]
    fn should_display_number_and_pizzas() {
        let mut order = Order::new(7);
        order.add_pizza(Pizza::build_your_own(Crust::Pan, Size::Small));

        assert_eq!(
            "Order number: 7\nSize: Small, Crust: Pan, Toppings: []\n",
            order.to_string()
        );
    }
}
