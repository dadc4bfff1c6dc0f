//! 类型模块：定义目录条目的摘要与详情类型。
//!
//! # Types Module
//!
//! Typed records produced by the catalog lookups.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SummaryItem`] | One row of a filter listing (id, name, thumbnail) |
//! | [`DetailItem`] | Full record from a lookup, including instructions |
//! | [`DrinksEnvelope`] | The `{"drinks": ...}` wrapper both endpoints answer with |

pub mod envelope;
pub mod item;

pub use envelope::DrinksEnvelope;
pub use item::{DetailItem, SummaryItem};
