use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Category;

/// Sparse product constraints derived from one free-text message.
///
/// Rebuilt on every turn; the conversational carry-over happens in
/// [`FilterState::merged_over`], never through hidden shared state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<Category>,
    pub style: Option<String>,
    pub occasion: Option<String>,
    pub color: Option<String>,
    pub max_price: Option<Decimal>,
    pub size: Option<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.style.is_none()
            && self.occasion.is_none()
            && self.color.is_none()
            && self.max_price.is_none()
            && self.size.is_none()
    }

    /// Overlay this (newer) extraction on filters carried from earlier turns.
    /// Fields present here win; absent fields keep the carried value.
    pub fn merged_over(&self, carried: &FilterState) -> FilterState {
        FilterState {
            category: self.category.or(carried.category),
            style: self.style.clone().or_else(|| carried.style.clone()),
            occasion: self.occasion.clone().or_else(|| carried.occasion.clone()),
            color: self.color.clone().or_else(|| carried.color.clone()),
            max_price: self.max_price.or(carried.max_price),
            size: self.size.clone().or_else(|| carried.size.clone()),
        }
    }
}
