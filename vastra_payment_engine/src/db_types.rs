use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;
pub use vpg_common::Rupees;

//--------------------------------------   OrderStatus     ---------------------------------------------------------
/// The fulfilment status of an order. Any transition between statuses is permitted; status changes are a manual
/// admin action and admins are trusted to move orders backwards when correcting mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// The order has been recorded but fulfilment has not started.
    Pending,
    /// The order is being picked and packed.
    Processing,
    /// The order has been handed to the courier.
    Shipped,
    /// The courier has delivered the order.
    Delivered,
    /// The order has been cancelled by the user or an admin.
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct InvalidStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            s => Err(InvalidStatusError(s.to_string())),
        }
    }
}

//--------------------------------------  PaymentStatus    ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

//--------------------------------------    ProductRef     ---------------------------------------------------------
/// A reference to a catalog product as stored on a cart line.
///
/// Product identifiers in cart lines are polymorphic: older clients store the human-assigned SKU, newer ones the
/// catalog row id. Parsing tags the reference so that resolution can try the right lookups, and
/// the catalog lookup accepts either kind through a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductRef {
    /// The catalog's internal row id
    CatalogId(i64),
    /// The human-assigned product code
    Sku(String),
}

impl ProductRef {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(id) => Self::CatalogId(id),
            Err(_) => Self::Sku(raw.to_string()),
        }
    }
}

impl Display for ProductRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductRef::CatalogId(id) => write!(f, "{id}"),
            ProductRef::Sku(sku) => write!(f, "{sku}"),
        }
    }
}

impl From<&str> for ProductRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

//--------------------------------------      Product      ---------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    /// The human-assigned product code, unique across the catalog
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    /// The current catalog price. This is the price that checkout charges, regardless of what a cart line captured
    /// at add-to-cart time.
    pub price: Rupees,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Rupees,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl NewProduct {
    pub fn new<S: Into<String>>(sku: S, name: S, price: Rupees) -> Self {
        Self { sku: sku.into(), name: name.into(), description: None, price, image_url: None, in_stock: true }
    }
}

//--------------------------------------     CartItem      ---------------------------------------------------------
/// One product/size/color/quantity entry in a user's pending cart.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub user_id: String,
    /// Polymorphic product reference (catalog id or SKU). See [`ProductRef`].
    pub product_id: String,
    /// The product name captured when the line was added
    pub product_name: String,
    /// The catalog price captured when the line was added. Display only; checkout re-reads the catalog.
    pub unit_price: Rupees,
    pub image_url: Option<String>,
    pub quantity: i64,
    pub size: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A request to add a line to a cart. The product name, price and image are snapshotted from the catalog when the
/// line is inserted, so callers only supply the reference and the choices the user made.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_id: String,
    pub product_id: String,
    pub quantity: i64,
    pub size: String,
    pub color: String,
}

impl NewCartItem {
    pub fn new(user_id: &str, product_id: &str, quantity: i64, size: &str, color: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            product_id: product_id.to_string(),
            quantity,
            size: size.to_string(),
            color: color.to_string(),
        }
    }

    pub fn product_ref(&self) -> ProductRef {
        ProductRef::parse(&self.product_id)
    }
}

//--------------------------------------      Address      ---------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub user_id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub user_id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// The shipping address fields copied onto an order at checkout time. A snapshot, not a reference: editing the
/// stored address later must not retroactively alter order history.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl From<&Address> for ShippingAddress {
    fn from(a: &Address) -> Self {
        Self {
            street: a.street.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            postal_code: a.postal_code.clone(),
            country: a.country.clone(),
        }
    }
}

//--------------------------------------       Order       ---------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// The human-facing display id, e.g. `ORD-100042`
    pub order_number: String,
    pub user_id: String,
    pub total_amount: Rupees,
    #[sqlx(flatten)]
    pub shipping_address: ShippingAddress,
    pub status: OrderStatus,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub order_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An immutable snapshot of a cart line captured at checkout time. Must never change, even if the catalog product
/// later changes price or is deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    /// The catalog price at checkout time
    pub unit_price: Rupees,
    /// `unit_price * quantity`
    pub line_total: Rupees,
    pub size: String,
    pub color: String,
}

/// An order together with its line items. This is the unit the rest of the system (tracking, admin views) operates
/// on once checkout has completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullOrder {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// The fields of a new order row. Built inside the checkout flow once the totals have been reconciled.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: String,
    pub total_amount: Rupees,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
}

/// An order line ready for insertion, with the checkout-time price already applied.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Rupees,
    pub line_total: Rupees,
    pub size: String,
    pub color: String,
}

impl NewOrderItem {
    /// Prices a cart line with the current catalog price.
    pub fn from_cart_line(line: &CartItem, product: &Product) -> Self {
        Self {
            product_id: line.product_id.clone(),
            product_name: product.name.clone(),
            quantity: line.quantity,
            unit_price: product.price,
            line_total: product.price * line.quantity,
            size: line.size.clone(),
            color: line.color.clone(),
        }
    }
}

//--------------------------------------  CheckoutRequest  ---------------------------------------------------------
/// Everything the checkout flow needs to turn a cart into an order. The claimed total is a client-supplied
/// double-check value, never the source of truth; the flow recomputes the total from the catalog and rejects the
/// request if the two disagree by more than a paisa.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub user_id: String,
    pub claimed_total: Rupees,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub shipping_address_id: i64,
    pub payment_method: String,
}

impl CheckoutRequest {
    pub fn new(
        user_id: &str,
        claimed_total: Rupees,
        razorpay_order_id: &str,
        razorpay_payment_id: &str,
        shipping_address_id: i64,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            claimed_total,
            razorpay_order_id: razorpay_order_id.to_string(),
            razorpay_payment_id: razorpay_payment_id.to_string(),
            shipping_address_id,
            payment_method: "razorpay".to_string(),
        }
    }
}
