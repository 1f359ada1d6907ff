use std::borrow::Cow;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem_openapi::registry::{MetaSchema, MetaSchemaRef};
use poem_openapi::types::{ParseError, ParseFromJSON, ParseResult, ToJSON, Type};
use poem_openapi::{Enum, Object};
use serde_json::{Number, Value};

use business::domain::product::model::Product;
use business::domain::product::value_objects::Category;
use business::domain::product::view::ProductView;

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum CategoryDto {
    #[oai(rename = "SNACK")]
    Snack,
    #[oai(rename = "SIDE_DISH")]
    SideDish,
    #[oai(rename = "DRINK")]
    Drink,
    #[oai(rename = "DESSERT")]
    Dessert,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Snack => CategoryDto::Snack,
            Category::SideDish => CategoryDto::SideDish,
            Category::Drink => CategoryDto::Drink,
            Category::Dessert => CategoryDto::Dessert,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Snack => Category::Snack,
            CategoryDto::SideDish => Category::SideDish,
            CategoryDto::Drink => Category::Drink,
            CategoryDto::Dessert => Category::Dessert,
        }
    }
}

/// Decimal price carried as a JSON number.
///
/// serde_json runs with `arbitrary_precision`, so the number keeps the digits the
/// client sent and is parsed straight into a `BigDecimal` without passing through `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Price(pub BigDecimal);

impl Type for Price {
    const IS_REQUIRED: bool = true;

    type RawValueType = Self;

    type RawElementValueType = Self;

    fn name() -> Cow<'static, str> {
        "number(decimal)".into()
    }

    fn schema_ref() -> MetaSchemaRef {
        MetaSchemaRef::Inline(Box::new(MetaSchema::new_with_format("number", "decimal")))
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(self)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl ParseFromJSON for Price {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        let value = value.unwrap_or_default();
        match &value {
            Value::Number(number) => BigDecimal::from_str(&number.to_string())
                .map(Price)
                .map_err(|_| ParseError::custom("product.invalid_price")),
            _ => Err(ParseError::expected_type(value)),
        }
    }
}

impl ToJSON for Price {
    fn to_json(&self) -> Option<Value> {
        let text = self.0.to_string();
        match Number::from_str(&text) {
            Ok(number) => Some(Value::Number(number)),
            Err(_) => Some(Value::String(text)),
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: Price,
    /// Category name (SNACK, SIDE_DISH, DRINK, DESSERT)
    pub category: CategoryDto,
    /// Image location
    #[oai(rename = "imageURL")]
    pub image_url: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: Price,
    /// Category code
    pub category: i32,
    /// Image location
    #[oai(rename = "imageURL")]
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price: Price(product.price),
            category: product.category.code(),
            name: product.name,
            description: product.description,
            image_url: product.image_url,
        }
    }
}

impl From<ProductView> for ProductResponse {
    fn from(view: ProductView) -> Self {
        Self {
            id: view.id.to_string(),
            price: Price(view.price),
            category: view.category.code(),
            name: view.name,
            description: view.description,
            image_url: view.image_url,
        }
    }
}
