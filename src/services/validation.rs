use crate::domain::product::{Product, ProductDraft};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?(\d+(\.\d*)?|\.\d+)$").expect("price pattern"));

static STOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d+$").expect("stock pattern"));

/// Size limits for form inputs
pub struct SizeLimits;

impl SizeLimits {
    pub const MIN_NAME_LENGTH: usize = 3;
    pub const MAX_NAME_LENGTH: usize = 100;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Price,
    Stock,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Stock => "stock",
        }
    }
}

/// At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Price => self.price.as_deref(),
            FormField::Stock => self.stock.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
        };
        *slot = Some(message.into());
    }

    /// Drop a field's error once the user edits that field.
    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Price => self.price = None,
            FormField::Stock => self.stock = None,
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = (FormField, &str)> {
        [FormField::Name, FormField::Price, FormField::Stock]
            .into_iter()
            .filter_map(|f| self.get(f).map(|m| (f, m)))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .messages()
            .map(|(_, m)| m)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for FormErrors {}

/// Raw text inputs of the add/edit product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    /// Pre-fill the edit form from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
        }
    }

    /// Replace a field's text and clear its pending error.
    pub fn update_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
        errors: &mut FormErrors,
    ) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Stock => self.stock = value,
        }
        errors.clear(field);
    }

    pub fn validate(&self) -> Result<ProductDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let name = validate_name(&self.name).map_err(|m| errors.set(FormField::Name, m));
        let price = validate_price(&self.price).map_err(|m| errors.set(FormField::Price, m));
        let stock = validate_stock(&self.stock).map_err(|m| errors.set(FormField::Stock, m));

        match (name, price, stock) {
            (Ok(name), Ok(price), Ok(stock)) => Ok(ProductDraft { name, price, stock }),
            _ => Err(errors),
        }
    }
}

pub fn validate_name(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err("Product name is required".to_string());
    }

    let length = trimmed.chars().count();
    if length < SizeLimits::MIN_NAME_LENGTH {
        return Err(format!(
            "Product name must be at least {} characters",
            SizeLimits::MIN_NAME_LENGTH
        ));
    }
    if length > SizeLimits::MAX_NAME_LENGTH {
        return Err(format!(
            "Product name cannot exceed {} characters",
            SizeLimits::MAX_NAME_LENGTH
        ));
    }

    Ok(trimmed.to_string())
}

pub fn validate_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err("Price is required".to_string());
    }

    let invalid = || "Price must be a positive number".to_string();
    if !PRICE_PATTERN.is_match(trimmed) {
        return Err(invalid());
    }

    match trimmed.trim_start_matches('+').parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(invalid()),
    }
}

pub fn validate_stock(raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err("Stock is required".to_string());
    }

    let invalid = || "Stock must be a non-negative number".to_string();
    if !STOCK_PATTERN.is_match(trimmed) {
        return Err(invalid());
    }

    trimmed
        .trim_start_matches('+')
        .parse::<u32>()
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_form_produces_trimmed_draft() {
        let form = ProductForm::new("  Kopi Susu  ", "18500", "12");
        let draft = form.validate().unwrap();

        assert_eq!(draft.name, "Kopi Susu");
        assert_eq!(draft.price, 18_500.0);
        assert_eq!(draft.stock, 12);
    }

    #[rstest]
    #[case("", "Product name is required")]
    #[case("    ", "Product name is required")]
    #[case("ab", "Product name must be at least 3 characters")]
    #[case(" ab ", "Product name must be at least 3 characters")]
    fn test_name_errors(#[case] name: &str, #[case] message: &str) {
        assert_eq!(validate_name(name).unwrap_err(), message);
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(validate_name("Kue").is_ok());
        assert!(validate_name("é外😀").is_ok());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[rstest]
    #[case("1", 1.0)]
    #[case("0.5", 0.5)]
    #[case(".25", 0.25)]
    #[case("12.", 12.0)]
    #[case(" 15000 ", 15000.0)]
    fn test_valid_prices(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(validate_price(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("", "Price is required")]
    #[case("0", "Price must be a positive number")]
    #[case("0.00", "Price must be a positive number")]
    #[case("-5", "Price must be a positive number")]
    #[case("abc", "Price must be a positive number")]
    #[case("12abc", "Price must be a positive number")]
    #[case("NaN", "Price must be a positive number")]
    #[case("inf", "Price must be a positive number")]
    fn test_invalid_prices(#[case] raw: &str, #[case] message: &str) {
        assert_eq!(validate_price(raw).unwrap_err(), message);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("7", 7)]
    #[case(" 42 ", 42)]
    fn test_valid_stock(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(validate_stock(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("", "Stock is required")]
    #[case("-1", "Stock must be a non-negative number")]
    #[case("2.5", "Stock must be a non-negative number")]
    #[case("ten", "Stock must be a non-negative number")]
    #[case("99999999999", "Stock must be a non-negative number")]
    fn test_invalid_stock(#[case] raw: &str, #[case] message: &str) {
        assert_eq!(validate_stock(raw).unwrap_err(), message);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = ProductForm::default().validate().unwrap_err();

        assert_eq!(errors.get(FormField::Name), Some("Product name is required"));
        assert_eq!(errors.get(FormField::Price), Some("Price is required"));
        assert_eq!(errors.get(FormField::Stock), Some("Stock is required"));
        assert_eq!(
            errors.to_string(),
            "Product name is required; Price is required; Stock is required"
        );
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut form = ProductForm::new("x", "-1", "3");
        let mut errors = form.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.price.is_some());
        assert!(errors.stock.is_none());

        form.update_field(FormField::Name, "Roti Tawar", &mut errors);

        assert_eq!(form.name, "Roti Tawar");
        assert!(errors.name.is_none());
        assert!(errors.price.is_some());
    }

    #[test]
    fn test_from_product_round_trips_through_validation() {
        let product = Product::new(3, "Mie Instan", 3_500.0, 0);
        let form = ProductForm::from_product(&product);

        assert_eq!(form.price, "3500");
        assert_eq!(form.stock, "0");
        assert_eq!(form.validate().unwrap(), product.to_draft());
    }
}
