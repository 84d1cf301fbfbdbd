//! Order Model

use serde::{Deserialize, Serialize};

use super::cart::CartLine;

/// Order status
///
/// A free-form admin-settable field, not a strict state machine: any
/// status may be assigned at any time (a delivered order can be reverted).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Delivered,
}

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

/// Message author
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageAuthor {
    Customer,
    Admin,
}

/// One message in an order's thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique within its order (thread length + 1 at append time)
    pub id: i64,
    pub author: MessageAuthor,
    pub content: String,
    pub created_at: i64,
    pub read: bool,
}

/// Delivery information captured at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryInfo {
    pub address: String,
    pub neighborhood: String,
    /// Free-form directions, e.g. "casa azul, entre calle X y Y"
    #[serde(default)]
    pub notes: String,
}

/// Order entity
///
/// An immutable snapshot of a submitted cart plus delivery, payment, and
/// messaging data. Append-only except for `status` (admin-settable),
/// `messages` (append-only by either party), and message `read` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Customer email (session identity)
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    /// Snapshot of the cart lines at submission time
    pub lines: Vec<CartLine>,
    pub delivery: DeliveryInfo,
    pub payment_method: PaymentMethod,
    /// Opaque image payload; present iff payment_method is Transfer
    pub transfer_proof: Option<String>,
    pub messages: Vec<Message>,
    /// Total in currency unit: subtotal + shipping fee
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: i64,
}

/// Checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub delivery: DeliveryInfo,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub transfer_proof: Option<String>,
    /// Optional note to staff; becomes the order's first customer message
    #[serde(default)]
    pub note: Option<String>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Post message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub content: String,
}

/// Admin order listing entry: the order plus its unread badge count
///
/// Only the admin view carries an unread count; there is deliberately no
/// customer-facing equivalent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderView {
    pub order: Order,
    /// Unread messages authored by the customer
    pub unread_customer_messages: usize,
}
