//! Search payload decoding.
//!
//! The search endpoint answers with a JSON array of products (or `null` when
//! nothing matches). Ids arrive as numbers or strings and prices as decimal
//! strings or numbers; both are normalized here.

use discount_core::catalog::{CatalogProduct, ProductImage, Variant};
use discount_core::money::{Currency, Money};
use serde::Deserialize;
use tracing::warn;

use crate::client::FetchError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct WireImage {
    src: String,
}

#[derive(Debug, Deserialize)]
struct WireVariant {
    id: WireId,
    #[serde(default)]
    product_id: Option<WireId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    price: Option<WirePrice>,
    #[serde(default)]
    inventory_quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WireProduct {
    id: WireId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: Option<WireImage>,
    #[serde(default)]
    variants: Option<Vec<WireVariant>>,
}

fn price(raw: Option<WirePrice>, variant: &str) -> Money {
    let parsed = match raw {
        Some(WirePrice::Number(n)) if n.is_finite() => Some(Money::from_decimal(n, Currency::USD)),
        Some(WirePrice::Text(s)) => Money::parse_decimal(&s, Currency::USD),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        warn!(variant, "Unreadable variant price, using zero");
        Money::zero(Currency::USD)
    })
}

impl WireProduct {
    fn into_product(self) -> CatalogProduct {
        let product_id = self.id.into_string();
        let variants = self
            .variants
            .unwrap_or_default()
            .into_iter()
            .map(|v| {
                let id = v.id.into_string();
                let owner = v.product_id.map(WireId::into_string).unwrap_or_else(|| product_id.clone());
                let price = price(v.price, &id);
                let mut variant = Variant::new(id, owner, v.title, price);
                variant.availability = v.inventory_quantity;
                variant
            })
            .collect();

        CatalogProduct {
            id: product_id.into(),
            title: self.title,
            image: self.image.map(|i| ProductImage { src: i.src }),
            variants,
        }
    }
}

/// Decode a search response body.
pub fn decode_products(bytes: &[u8]) -> Result<Vec<CatalogProduct>, FetchError> {
    let raw: Option<Vec<WireProduct>> =
        serde_json::from_slice(bytes).map_err(|e| FetchError::Deserialization(e.to_string()))?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(WireProduct::into_product)
        .collect())
}
