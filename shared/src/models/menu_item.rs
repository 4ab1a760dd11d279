//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Purchasable product with its remaining stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Remaining stock
    pub quantity: u32,
    /// Image file name
    pub image: String,
}

impl MenuItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            image: image.into(),
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }
}

/// Fixed menu loaded at process start
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            1,
            "Chicken Burger",
            "Fried chicken burger with lettuce and mayonnaise",
            24.0,
            40,
            "cb.jpg",
        ),
        MenuItem::new(
            2,
            "Beef Burger",
            "Beef burger with cheese and tomato",
            30.0,
            20,
            "vb.jpg",
        ),
        MenuItem::new(3, "Ice Cream", "Ice cream cone", 28.0, 30, "ic.jpg"),
        MenuItem::new(
            4,
            "French Fries",
            "French fries with green sauce",
            123.0,
            100,
            "chips.jpg",
        ),
    ]
}
