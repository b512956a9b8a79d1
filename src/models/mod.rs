// src/models/mod.rs

//! Data structures shared between the cart, the services, and the wire.

pub mod cart_item;
pub mod order;
pub mod payment_method;
pub mod shipping_address;
pub mod user;

pub use cart_item::CartItem;
pub use order::Order;
pub use payment_method::PaymentMethod;
pub use shipping_address::ShippingAddress;
pub use user::User;
