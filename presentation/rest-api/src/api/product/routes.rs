use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CategoryDto, ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_category_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::bad_request("product.invalid_id"))
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting products.
#[OpenApi(prefix_path = "/api")]
impl ProductApi {
    /// Create a new product
    ///
    /// Stores a new product and returns it with its assigned id.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price.0,
            category: body.0.category.into(),
            image_url: body.0.image_url,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// List products of a category
    ///
    /// Returns an empty list when the category has no products.
    #[oai(path = "/products/category", method = "get", tag = "ApiTags::Products")]
    async fn get_products_by_category(
        &self,
        name: Query<CategoryDto>,
    ) -> GetProductsByCategoryResponse {
        match self
            .get_by_category_use_case
            .execute(GetProductsByCategoryParams {
                category: name.0.into(),
            })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductsByCategoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsByCategoryResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(view) => GetProductByIdResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product. The id in the path is kept.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price.0,
            category: body.0.category.into(),
            image_url: body.0.image_url,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(ErrorResponse::from_request_error(&err))
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "get_by_category_bad_request")]
pub enum GetProductsByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_by_category_bad_request(err: poem::Error) -> GetProductsByCategoryResponse {
    GetProductsByCategoryResponse::BadRequest(ErrorResponse::from_request_error(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "get_by_id_bad_request")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_by_id_bad_request(err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(ErrorResponse::from_request_error(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(ErrorResponse::from_request_error(&err))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "delete_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn delete_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(ErrorResponse::from_request_error(&err))
}
