//! Client side of the catalog: the add-product form, the HTTP gateway to the
//! catalog API and the basket.

pub mod basket;
pub mod client;
pub mod error;
pub mod flows;
pub mod form;
pub mod gateway;
pub mod product;
