pub mod cashier;
pub mod merchant;
pub mod observer;
pub mod order;
pub mod order_item;
pub mod transaction;
