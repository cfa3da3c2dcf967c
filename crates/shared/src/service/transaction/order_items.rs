use crate::{
    abstract_trait::order_item::repository::query::DynOrderItemQueryRepository,
    errors::TransactionError, model::order_item::OrderItemModel,
};
use tracing::{info, warn};

/// Priced line consumed by the tax calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub order_item_id: i32,
    pub price: i64,
    pub quantity: i64,
}

pub struct OrderItemAggregator {
    order_item_query: DynOrderItemQueryRepository,
}

impl OrderItemAggregator {
    pub fn new(order_item_query: DynOrderItemQueryRepository) -> Self {
        Self { order_item_query }
    }

    pub async fn aggregate(&self, order_id: i32) -> Result<Vec<OrderLine>, TransactionError> {
        let items = self
            .order_item_query
            .find_order_item_by_order(order_id)
            .await
            .map_err(TransactionError::Persistence)?;

        let lines = validate_order_items(order_id, &items)?;
        info!("Aggregated {} order items for order {order_id}", lines.len());

        Ok(lines)
    }
}

/// Checks every item before any line is returned. All offending items are
/// reported, not only the first one.
pub fn validate_order_items(
    order_id: i32,
    items: &[OrderItemModel],
) -> Result<Vec<OrderLine>, TransactionError> {
    if items.is_empty() {
        warn!("Order {order_id} has no items");
        return Err(TransactionError::EmptyOrderItems(order_id));
    }

    let invalid: Vec<i32> = items
        .iter()
        .filter(|item| item.quantity <= 0)
        .map(|item| item.order_item_id)
        .collect();

    if !invalid.is_empty() {
        warn!("Order {order_id} has items with non-positive quantity: {invalid:?}");
        return Err(TransactionError::InvalidOrderItemQuantity {
            order_id,
            order_item_ids: invalid,
        });
    }

    Ok(items
        .iter()
        .map(|item| OrderLine {
            order_item_id: item.order_item_id,
            price: i64::from(item.price),
            quantity: i64::from(item.quantity),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(order_item_id: i32, quantity: i32, price: i32) -> OrderItemModel {
        OrderItemModel {
            order_item_id,
            order_id: 1,
            product_id: order_item_id * 10,
            quantity,
            price,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = validate_order_items(1, &[]).unwrap_err();
        assert!(matches!(err, TransactionError::EmptyOrderItems(1)));
    }

    #[test]
    fn every_non_positive_quantity_is_reported() {
        let items = [item(1, 2, 100), item(2, 0, 100), item(3, 1, 50), item(4, -3, 10)];

        let err = validate_order_items(1, &items).unwrap_err();
        match err {
            TransactionError::InvalidOrderItemQuantity {
                order_id,
                order_item_ids,
            } => {
                assert_eq!(order_id, 1);
                assert_eq!(order_item_ids, vec![2, 4]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn valid_items_keep_their_order() {
        let lines = validate_order_items(1, &[item(7, 2, 10_000), item(3, 1, 5_000)]).unwrap();

        assert_eq!(
            lines,
            vec![
                OrderLine {
                    order_item_id: 7,
                    price: 10_000,
                    quantity: 2
                },
                OrderLine {
                    order_item_id: 3,
                    price: 5_000,
                    quantity: 1
                },
            ]
        );
    }
}
