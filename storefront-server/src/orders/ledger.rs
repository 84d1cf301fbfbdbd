//! OrderLedger - order submission, status, and messaging
//!
//! # Mutation flow
//!
//! ```text
//! submit(customer, lines, checkout)
//!     ├─ 1. Validate (empty cart, delivery fields, transfer proof)
//!     ├─ 2. Derive totals from the cart lines
//!     ├─ 3. Seed the thread from the optional checkout note
//!     ├─ 4. Assign id = ledger length + 1 (under the write lock)
//!     └─ 5. Append and return the stored order
//! ```
//!
//! Orders are never deleted, so length+1 behaves as a monotonic counter
//! and ids stay dense in submission order.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::models::{
    AdminOrderView, CartLine, CheckoutRequest, DeliveryInfo, Message, MessageAuthor, Order,
    OrderStatus, PaymentMethod,
};
use shared::util::now_millis;

use crate::auth::CurrentUser;
use crate::cart;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// In-memory ledger of submitted orders
///
/// Process-wide state owned by the application root.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a new order from a cart snapshot.
    ///
    /// Hard validation failures, each leaving prior state untouched:
    /// empty cart; blank delivery address or neighborhood; Transfer
    /// payment with no proof attached. A Cash order drops any supplied
    /// proof. The optional note becomes the order's first customer
    /// message, unread.
    pub fn submit(
        &self,
        customer: &CurrentUser,
        lines: Vec<CartLine>,
        checkout: CheckoutRequest,
    ) -> AppResult<Order> {
        // 1. Validate
        if lines.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmptyCart));
        }
        if checkout.delivery.address.trim().is_empty() {
            return Err(AppError::new(ErrorCode::DeliveryAddressRequired));
        }
        if checkout.delivery.neighborhood.trim().is_empty() {
            return Err(AppError::new(ErrorCode::DeliveryNeighborhoodRequired));
        }
        validate_required_text(&checkout.delivery.address, "address", MAX_ADDRESS_LEN)?;
        validate_required_text(
            &checkout.delivery.neighborhood,
            "neighborhood",
            MAX_SHORT_TEXT_LEN,
        )?;
        if checkout.delivery.notes.len() > MAX_NOTE_LEN {
            return Err(AppError::validation("delivery notes are too long"));
        }
        validate_optional_text(&checkout.note, "note", MAX_NOTE_LEN)?;

        let transfer_proof = match checkout.payment_method {
            PaymentMethod::Transfer => {
                let proof = checkout
                    .transfer_proof
                    .filter(|p| !p.trim().is_empty())
                    .ok_or_else(|| AppError::new(ErrorCode::TransferProofRequired))?;
                Some(proof)
            }
            // Proof is meaningless for cash orders
            PaymentMethod::Cash => None,
        };

        // 2. Derive totals
        let totals = cart::totals(&lines);
        let now = now_millis();

        // 3. Seed the thread from the optional note
        let mut messages = Vec::new();
        if let Some(note) = &checkout.note
            && !note.trim().is_empty()
        {
            messages.push(Message {
                id: 1,
                author: MessageAuthor::Customer,
                content: note.clone(),
                created_at: now,
                read: false,
            });
        }

        // 4-5. Assign the next id and append, all under the write lock
        let mut orders = self.orders.write();
        let order = Order {
            id: orders.len() as i64 + 1,
            customer_id: customer.email.clone(),
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            lines,
            delivery: DeliveryInfo {
                address: checkout.delivery.address,
                neighborhood: checkout.delivery.neighborhood,
                notes: checkout.delivery.notes,
            },
            payment_method: checkout.payment_method,
            transfer_proof,
            messages,
            total: totals.total,
            status: OrderStatus::Pending,
            created_at: now,
        };
        orders.push(order.clone());

        tracing::info!(
            order_id = order.id,
            customer_id = %order.customer_id,
            total = order.total,
            payment_method = ?order.payment_method,
            "Order submitted"
        );

        Ok(order)
    }

    /// Set an order's status.
    ///
    /// The status is a free-form field: any target is accepted at any
    /// time, including reverting a delivered order to pending.
    pub fn set_status(&self, order_id: i64, status: OrderStatus) -> AppResult<Order> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", order_id),
                )
            })?;

        let previous = order.status;
        order.status = status;

        tracing::info!(
            order_id,
            from = ?previous,
            to = ?status,
            "Order status updated"
        );

        Ok(order.clone())
    }

    /// Append a message to an order's thread.
    ///
    /// Silently ignored (logged at debug only) when the order id is
    /// unknown or the content is blank.
    pub fn post_message(
        &self,
        order_id: i64,
        author: MessageAuthor,
        content: &str,
    ) -> Option<Message> {
        if content.trim().is_empty() {
            tracing::debug!(order_id, "Ignoring blank message");
            return None;
        }

        let mut orders = self.orders.write();
        let Some(order) = orders.iter_mut().find(|o| o.id == order_id) else {
            tracing::debug!(order_id, "Ignoring message for unknown order");
            return None;
        };

        let message = Message {
            id: order.messages.len() as i64 + 1,
            author,
            content: content.to_string(),
            created_at: now_millis(),
            read: false,
        };
        order.messages.push(message.clone());

        tracing::info!(
            order_id,
            message_id = message.id,
            author = ?author,
            "Message posted"
        );

        Some(message)
    }

    /// Mark every message in an order's thread as read, regardless of
    /// author. Invoked when a party opens the order's detail view; this
    /// is a blunt mark-all-read, not a per-message acknowledgment.
    pub fn mark_thread_read(&self, order_id: i64) {
        let mut orders = self.orders.write();
        let Some(order) = orders.iter_mut().find(|o| o.id == order_id) else {
            tracing::debug!(order_id, "Ignoring mark-read for unknown order");
            return;
        };

        for message in &mut order.messages {
            message.read = true;
        }
    }

    /// Unread messages authored by the customer.
    ///
    /// Feeds the admin badge; there is deliberately no customer-facing
    /// equivalent.
    pub fn unread_from_customer(order: &Order) -> usize {
        order
            .messages
            .iter()
            .filter(|m| !m.read && m.author == MessageAuthor::Customer)
            .count()
    }

    // ========== Queries ==========

    /// Snapshot of every order, oldest first
    pub fn all(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    /// Admin listing: every order with its unread badge count
    pub fn admin_views(&self) -> Vec<AdminOrderView> {
        self.orders
            .read()
            .iter()
            .map(|order| AdminOrderView {
                unread_customer_messages: Self::unread_from_customer(order),
                order: order.clone(),
            })
            .collect()
    }

    /// Look up a single order
    pub fn get(&self, order_id: i64) -> Option<Order> {
        self.orders.read().iter().find(|o| o.id == order_id).cloned()
    }

    /// Orders submitted by one customer
    pub fn for_customer(&self, customer_id: &str) -> Vec<Order> {
        self.orders
            .read()
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// Number of submitted orders
    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}
