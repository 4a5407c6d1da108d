use crate::errors::DispatchError;
use crate::types::ids::{OrderId, ProductId, RestaurantId};
use crate::types::order_status::{OrderStatus, PaymentType};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product line of a placed order, with the price it had when ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub product_price: Decimal,
}

impl OrderLine {
    pub fn cost(&self) -> Decimal {
        self.product_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id, assigned by the storage.
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    /// Delivery address.
    pub address: String,
    pub status: OrderStatus,
    pub payment_type: Option<PaymentType>,
    pub comment: String,
    /// Restaurant chosen by an operator to cook the order.
    pub processing_restaurant: Option<RestaurantId>,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Local>,
}

impl Order {
    /// Product ids of every line, duplicates included.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.lines.iter().map(|line| line.product_id).collect()
    }

    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(OrderLine::cost).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFormLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An order as submitted by a customer, before it is checked and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub comment: String,
    pub lines: Vec<OrderFormLine>,
}

impl OrderForm {
    /// Checks the form on its own, without looking at the catalog.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let required = [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("phonenumber", &self.phonenumber),
            ("address", &self.address),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(DispatchError::MissingField(*field));
        }
        if self.lines.is_empty() {
            return Err(DispatchError::EmptyOrder);
        }
        if let Some(line) = self.lines.iter().find(|line| line.quantity == 0) {
            return Err(DispatchError::InvalidQuantity {
                product_id: line.product_id,
                quantity: line.quantity,
            });
        }
        Ok(())
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        self.lines.iter().map(|line| line.product_id).collect()
    }
}

/// Orders grouped by their board position, keeping arrival order inside
/// each group.
pub fn sort_orders_by_status(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|order| order.status.board_rank());
    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> OrderForm {
        OrderForm {
            firstname: "Ivan".to_string(),
            lastname: "Petrov".to_string(),
            phonenumber: "+79001234567".to_string(),
            address: "Moscow, Tverskaya 1".to_string(),
            payment_type: Some(PaymentType::Cash),
            comment: String::new(),
            lines: vec![OrderFormLine {
                product_id: 1,
                quantity: 2,
            }],
        }
    }

    fn order(id: OrderId, status: OrderStatus) -> Order {
        Order {
            id,
            firstname: "Ivan".to_string(),
            lastname: "Petrov".to_string(),
            phonenumber: "+79001234567".to_string(),
            address: "Moscow, Tverskaya 1".to_string(),
            status,
            payment_type: None,
            comment: String::new(),
            processing_restaurant: None,
            lines: vec![],
            created_at: Local::now(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_form_without_lines_is_rejected() {
        let mut form = form();
        form.lines.clear();
        assert!(matches!(form.validate(), Err(DispatchError::EmptyOrder)));
    }

    #[test]
    fn test_form_with_blank_address_is_rejected() {
        let mut form = form();
        form.address = "   ".to_string();
        assert!(matches!(
            form.validate(),
            Err(DispatchError::MissingField("address"))
        ));
    }

    #[test]
    fn test_form_with_zero_quantity_is_rejected() {
        let mut form = form();
        form.lines.push(OrderFormLine {
            product_id: 7,
            quantity: 0,
        });
        assert!(matches!(
            form.validate(),
            Err(DispatchError::InvalidQuantity {
                product_id: 7,
                quantity: 0
            })
        ));
    }

    #[test]
    fn test_total_price_multiplies_by_quantity() {
        let mut order = order(1, OrderStatus::Processing);
        order.lines = vec![
            OrderLine {
                product_id: 1,
                quantity: 2,
                product_price: Decimal::new(35050, 2),
            },
            OrderLine {
                product_id: 2,
                quantity: 1,
                product_price: Decimal::new(9900, 2),
            },
        ];
        assert_eq!(order.total_price(), Decimal::new(80000, 2));
    }

    #[test]
    fn test_total_price_of_empty_order_is_zero() {
        assert_eq!(order(1, OrderStatus::Processing).total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_sort_orders_by_status_groups_in_board_order() {
        let orders = vec![
            order(1, OrderStatus::Completed),
            order(2, OrderStatus::Cooking),
            order(3, OrderStatus::Processing),
            order(4, OrderStatus::Delivering),
            order(5, OrderStatus::Processing),
        ];
        let ids: Vec<OrderId> = sort_orders_by_status(orders)
            .iter()
            .map(|order| order.id)
            .collect();
        assert_eq!(ids, vec![3, 5, 4, 2, 1]);
    }
}
