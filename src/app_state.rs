//! Estado compartido de la aplicacion. Un unico `OrderManager` por ejecucion,
//! pasado a quien lo necesite en lugar de un singleton global.
use std::sync::{Arc, Mutex};

use crate::{errors::PizzeriaError, order_manager::OrderManager};

#[derive(Clone, Default)]
pub struct AppState {
    order_manager: Arc<Mutex<OrderManager>>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            order_manager: Arc::new(Mutex::new(OrderManager::new())),
        }
    }

    /// Ejecuta `action` con el lock del manager tomado, de modo que cada operacion
    /// (agregar, realizar, cancelar) es atomica aunque el estado se comparta entre hilos.
    pub fn with_manager<R>(
        &self,
        action: impl FnOnce(&mut OrderManager) -> R,
    ) -> Result<R, PizzeriaError> {
        let mut manager = self.order_manager.lock()?;
        Ok(action(&mut manager))
    }
}

#[cfg(test)]
mod tests {
    use std::thread::{self, JoinHandle};

    use super::*;
    use crate::{pizza_factory::{NyPizza, PizzaFactory}, size::Size};

    #[test]
    fn should_share_the_same_manager_between_clones() {
        let state = AppState::new();
        let other = state.clone();

        other
            .with_manager(|manager| {
                manager.add_to_current_order(NyPizza::new(Size::Small).create_meatzza());
                manager.place_current_order()
            })
            .unwrap();

        let orders = state.with_manager(|manager| manager.all_orders().len()).unwrap();
        assert_eq!(1, orders);
    }

    #[test]
    fn should_place_orders_from_several_threads_without_repeating_numbers() {
        let state = AppState::new();

        let handles: Vec<JoinHandle<i32>> = (0..8)
            .map(|_| {
                let state_clone = state.clone();
                thread::spawn(move || {
                    state_clone
                        .with_manager(|manager| {
                            manager.add_to_current_order(NyPizza::new(Size::Large).create_deluxe());
                            manager.place_current_order()
                        })
                        .unwrap()
                })
            })
            .collect();

        let mut placed: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        placed.sort();

        assert_eq!((1..=8).collect::<Vec<i32>>(), placed);
        let current = state.with_manager(|manager| manager.current_order().number()).unwrap();
        assert_eq!(9, current);
    }

    #[test]
    fn should_fail_with_lock_error_when_poisoned() {
        let state = AppState::new();
        let state_clone = state.clone();

        let _ = thread::spawn(move || {
            let _ = state_clone.with_manager(|_| panic!("poison the lock"));
        })
        .join();

        let result = state.with_manager(|manager| manager.all_orders().len());
        assert!(matches!(result, Err(PizzeriaError::LockError)));
    }
}
