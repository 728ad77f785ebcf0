use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::{ProductId, normalize_price};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
}

/// Fields an edit may replace. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub seller: Option<String>,
    pub price: Option<BigDecimal>,
    pub quantity: Option<i32>,
    pub image_url: Option<String>,
}

impl Product {
    /// Builds a product that has not been stored yet; its id is unset until
    /// the repository assigns one.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_text(&props.title, &props.description, &props.seller, &props.image_url)?;
        let price = normalize_price(props.price)?;
        if props.quantity < 1 {
            return Err(ProductError::QuantityTooLow);
        }

        let now = Utc::now();
        Ok(Self {
            id: ProductId::UNSET,
            owner_id: props.owner_id,
            title: props.title,
            description: props.description,
            seller: props.seller,
            price,
            quantity: props.quantity,
            image_url: props.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        owner_id: UserId,
        title: String,
        description: String,
        seller: String,
        price: BigDecimal,
        quantity: i32,
        image_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title,
            description,
            seller,
            price,
            quantity,
            image_url,
            created_at,
            updated_at,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    /// Returns the edited product. Identity, owner and creation time never
    /// change; a sold-out product may be edited with quantity 0.
    pub fn apply_changes(&self, changes: ProductChanges) -> Result<Product, ProductError> {
        let mut updated = Product {
            id: self.id,
            owner_id: self.owner_id.clone(),
            title: changes.title.unwrap_or_else(|| self.title.clone()),
            description: changes
                .description
                .unwrap_or_else(|| self.description.clone()),
            seller: changes.seller.unwrap_or_else(|| self.seller.clone()),
            price: changes.price.unwrap_or_else(|| self.price.clone()),
            quantity: changes.quantity.unwrap_or(self.quantity),
            image_url: changes.image_url.unwrap_or_else(|| self.image_url.clone()),
            created_at: self.created_at,
            updated_at: Utc::now(),
        };

        validate_text(
            &updated.title,
            &updated.description,
            &updated.seller,
            &updated.image_url,
        )?;
        updated.price = normalize_price(updated.price)?;
        if updated.quantity < 0 {
            return Err(ProductError::QuantityTooLow);
        }
        Ok(updated)
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

fn validate_text(
    title: &str,
    description: &str,
    seller: &str,
    image_url: &str,
) -> Result<(), ProductError> {
    if title.trim().is_empty() {
        return Err(ProductError::TitleEmpty);
    }
    if description.trim().is_empty() {
        return Err(ProductError::DescriptionEmpty);
    }
    if seller.trim().is_empty() {
        return Err(ProductError::SellerEmpty);
    }
    if image_url.trim().is_empty() {
        return Err(ProductError::ImageUrlEmpty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::parse_price;
    use proptest::prelude::*;

    fn props() -> NewProductProps {
        NewProductProps {
            owner_id: UserId::new("alice"),
            title: "Walnut desk".to_string(),
            description: "Solid walnut, 120cm".to_string(),
            seller: "Woodworks".to_string(),
            price: parse_price("249.90").unwrap(),
            quantity: 3,
            image_url: "/images/desk.png".to_string(),
        }
    }

    #[test]
    fn should_create_product_with_unset_id() {
        let product = Product::new(props()).unwrap();
        assert!(product.id.is_unset());
        assert!(product.is_owned_by(&UserId::new("alice")));
        assert!(product.is_in_stock());
    }

    #[test]
    fn should_reject_blank_fields() {
        let mut blank_title = props();
        blank_title.title = "   ".to_string();
        assert!(matches!(
            Product::new(blank_title),
            Err(ProductError::TitleEmpty)
        ));

        let mut blank_seller = props();
        blank_seller.seller = String::new();
        assert!(matches!(
            Product::new(blank_seller),
            Err(ProductError::SellerEmpty)
        ));

        let mut blank_image = props();
        blank_image.image_url = String::new();
        assert!(matches!(
            Product::new(blank_image),
            Err(ProductError::ImageUrlEmpty)
        ));
    }

    #[test]
    fn should_reject_zero_quantity_at_creation() {
        let mut zero = props();
        zero.quantity = 0;
        assert!(matches!(
            Product::new(zero),
            Err(ProductError::QuantityTooLow)
        ));
    }

    #[test]
    fn should_apply_only_supplied_changes() {
        let product = Product::new(props()).unwrap().with_id(ProductId::new(7));

        let updated = product
            .apply_changes(ProductChanges {
                title: Some("Oak desk".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.id, ProductId::new(7));
        assert_eq!(updated.title, "Oak desk");
        assert_eq!(updated.description, product.description);
        assert_eq!(updated.price, product.price);
        assert_eq!(updated.owner_id, product.owner_id);
        assert_eq!(updated.created_at, product.created_at);
    }

    #[test]
    fn should_allow_sold_out_quantity_when_editing() {
        let product = Product::new(props()).unwrap();
        let updated = product
            .apply_changes(ProductChanges {
                quantity: Some(0),
                ..Default::default()
            })
            .unwrap();
        assert!(!updated.is_in_stock());

        assert!(matches!(
            product.apply_changes(ProductChanges {
                quantity: Some(-1),
                ..Default::default()
            }),
            Err(ProductError::QuantityTooLow)
        ));
    }

    #[test]
    fn should_store_price_rounded_to_cents() {
        let mut sub_cent = props();
        sub_cent.price = parse_price("4.005").unwrap();
        let product = Product::new(sub_cent).unwrap();
        assert_eq!(product.price.to_string(), "4.01");

        let edited = product.apply_changes(ProductChanges {
            price: Some(parse_price("0.004").unwrap()),
            ..Default::default()
        });
        assert!(matches!(edited, Err(ProductError::PriceNotPositive)));
    }

    proptest! {
        #[test]
        fn any_positive_price_and_quantity_is_accepted(cents in 1i64..10_000_000, quantity in 1i32..100_000) {
            let mut valid = props();
            valid.price = BigDecimal::new(cents.into(), 2);
            valid.quantity = quantity;
            prop_assert!(Product::new(valid).is_ok());
        }

        #[test]
        fn non_positive_price_is_rejected(cents in -10_000_000i64..=0) {
            let mut invalid = props();
            invalid.price = BigDecimal::new(cents.into(), 2);
            prop_assert!(matches!(Product::new(invalid), Err(ProductError::PriceNotPositive)));
        }
    }
}
