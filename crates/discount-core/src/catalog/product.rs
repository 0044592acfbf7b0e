//! Catalog product and variant types.

use crate::discount::DiscountType;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// URL of the image.
    pub src: String,
}

impl ProductImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// A purchasable option of a product (e.g. a size/color combination).
///
/// Variants sourced from the catalog carry no discount. Once copied into a
/// row, `discount` and `discount_type` hold explicit per-variant overrides;
/// `None` means "inherit from the row".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Variant identifier, unique within its product.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Variant title (e.g., "S / White").
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Units available, when the catalog reports it.
    #[serde(default)]
    pub availability: Option<i64>,
    /// Explicit discount value override.
    #[serde(default)]
    pub discount: Option<f64>,
    /// Explicit discount type override.
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
}

impl Variant {
    /// Create a catalog variant with no discount override.
    pub fn new(
        id: impl Into<VariantId>,
        product_id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            title: title.into(),
            price,
            availability: None,
            discount: None,
            discount_type: None,
        }
    }

    /// Set the reported availability.
    pub fn with_availability(mut self, available: i64) -> Self {
        self.availability = Some(available);
        self
    }

    /// Set an explicit discount override.
    pub fn with_discount(mut self, value: f64, discount_type: DiscountType) -> Self {
        self.discount = Some(value);
        self.discount_type = Some(discount_type);
        self
    }

    /// Whether either discount field is overridden.
    pub fn has_override(&self) -> bool {
        self.discount.is_some() || self.discount_type.is_some()
    }

    /// Copy of this variant with both overrides removed.
    pub fn without_overrides(&self) -> Self {
        Self {
            discount: None,
            discount_type: None,
            ..self.clone()
        }
    }
}

/// A product as returned by the catalog. Never mutated; copied into rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    /// Product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Primary image.
    #[serde(default)]
    pub image: Option<ProductImage>,
    /// Variants in catalog order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl CatalogProduct {
    /// Create a product with no variants.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            variants: Vec::new(),
        }
    }

    /// Set the product image.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(ProductImage::new(src));
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Number of variants in the catalog record.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}
