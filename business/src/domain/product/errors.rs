#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.seller_empty")]
    SellerEmpty,
    #[error("product.image_url_empty")]
    ImageUrlEmpty,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.quantity_too_low")]
    QuantityTooLow,
    #[error("product.quantity_invalid")]
    QuantityInvalid,
    #[error("product.id_must_be_unset")]
    IdMustBeUnset,
    #[error("product.id_mismatch")]
    IdMismatch,
    /// The store refused the product even though domain validation passed.
    #[error("product.rejected")]
    Rejected,
    #[error("product.not_found")]
    NotFound,
    #[error("product.forbidden")]
    Forbidden,
    #[error("product.out_of_stock")]
    OutOfStock,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True for every variant a client can fix by correcting its input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ProductError::TitleEmpty
                | ProductError::DescriptionEmpty
                | ProductError::SellerEmpty
                | ProductError::ImageUrlEmpty
                | ProductError::PriceNotPositive
                | ProductError::PriceInvalid
                | ProductError::QuantityTooLow
                | ProductError::QuantityInvalid
                | ProductError::IdMustBeUnset
                | ProductError::IdMismatch
                | ProductError::Rejected
        )
    }
}
