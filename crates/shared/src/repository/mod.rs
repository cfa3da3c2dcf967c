pub mod cashier;
pub mod merchant;
pub mod order;
pub mod order_item;
pub mod transaction;
