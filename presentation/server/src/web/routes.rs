use std::sync::Arc;

use poem::http::{StatusCode, header::LOCATION};
use poem::web::{Data, Form, Path};
use poem::{Request, Response, Route, get, handler};

use business::domain::product::authorization::ProductOperation;
use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::authorize::{
    AuthorizeProductParams, AuthorizeProductUseCase,
};
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::security::PrincipalResolver;

use super::forms::ProductFormData;
use super::views::{
    DeleteTemplate, DetailsTemplate, FormTemplate, IndexTemplate, ProductView, StatusTemplate,
    render,
};

/// Use cases behind the HTML pages. Shared with handlers through `Data`.
pub struct ProductPages {
    pub get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    pub get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
    pub authorize_use_case: Arc<dyn AuthorizeProductUseCase>,
    pub principals: PrincipalResolver,
}

/// HTML pages under `/products`. Mutating pages need the `X-User-Id` header,
/// see [`USER_ID_HEADER`](crate::api::security::USER_ID_HEADER); deploy them
/// behind a proxy that sets it.
pub fn routes() -> Route {
    Route::new()
        .at("/products", get(index))
        .at("/products/create", get(create_page).post(create_submit))
        .at("/products/:id", get(details))
        .at("/products/:id/edit", get(edit_page).post(edit_submit))
        .at("/products/:id/delete", get(delete_page).post(delete_submit))
}

fn redirect(location: String) -> Response {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, location)
        .finish()
}

fn failure_page(err: ProductError) -> Response {
    match err {
        ProductError::NotFound => render(&StatusTemplate::not_found(), StatusCode::NOT_FOUND),
        ProductError::Forbidden => render(&StatusTemplate::forbidden(), StatusCode::FORBIDDEN),
        err if err.is_invalid_input() => {
            render(&StatusTemplate::error(err.to_string()), StatusCode::BAD_REQUEST)
        }
        err => render(
            &StatusTemplate::error(err.to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    }
}

fn form_page(
    heading: &str,
    action: String,
    form: ProductFormData,
    error: Option<ProductError>,
) -> Response {
    let status = if error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    render(
        &FormTemplate {
            heading: heading.to_string(),
            action,
            form,
            error: error.map(|e| e.to_string()),
        },
        status,
    )
}

#[handler]
async fn index(Data(pages): Data<&Arc<ProductPages>>) -> Response {
    match pages.get_all_use_case.execute().await {
        Ok(products) => render(
            &IndexTemplate {
                products: products.iter().map(ProductView::from).collect(),
            },
            StatusCode::OK,
        ),
        Err(err) => failure_page(err),
    }
}

#[handler]
async fn details(Data(pages): Data<&Arc<ProductPages>>, Path(id): Path<i32>) -> Response {
    match pages
        .get_by_id_use_case
        .execute(GetProductByIdParams {
            id: ProductId::new(id),
        })
        .await
    {
        Ok(product) => render(
            &DetailsTemplate {
                product: ProductView::from(&product),
            },
            StatusCode::OK,
        ),
        Err(err) => failure_page(err),
    }
}

#[handler]
async fn create_page() -> Response {
    form_page(
        "New product",
        "/products/create".to_string(),
        ProductFormData::default(),
        None,
    )
}

/// Numeric fields that do not parse are reported like any other invalid
/// input, before the use case runs.
#[handler]
async fn create_submit(
    Data(pages): Data<&Arc<ProductPages>>,
    req: &Request,
    Form(form): Form<ProductFormData>,
) -> Response {
    let principal = pages.principals.resolve_request(req);
    let result = match form.parse() {
        Ok(parsed) => {
            pages
                .create_use_case
                .execute(parsed.into_create_params(principal))
                .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(product) => redirect(format!("/products/{}", product.id)),
        Err(err) if err.is_invalid_input() => form_page(
            "New product",
            "/products/create".to_string(),
            form,
            Some(err),
        ),
        Err(err) => failure_page(err),
    }
}

#[handler]
async fn edit_page(
    Data(pages): Data<&Arc<ProductPages>>,
    req: &Request,
    Path(id): Path<i32>,
) -> Response {
    let params = AuthorizeProductParams {
        principal: pages.principals.resolve_request(req),
        id: ProductId::new(id),
        operation: ProductOperation::Update,
    };

    match pages.authorize_use_case.execute(params).await {
        Ok(product) => form_page(
            &format!("Edit {}", product.title),
            format!("/products/{}/edit", product.id),
            ProductFormData::from_product(&product),
            None,
        ),
        Err(err) => failure_page(err),
    }
}

#[handler]
async fn edit_submit(
    Data(pages): Data<&Arc<ProductPages>>,
    req: &Request,
    Path(id): Path<i32>,
    Form(form): Form<ProductFormData>,
) -> Response {
    let principal = pages.principals.resolve_request(req);
    let id = ProductId::new(id);

    // Unknown ids and foreign products are refused before the form is read.
    let authorized = pages
        .authorize_use_case
        .execute(AuthorizeProductParams {
            principal: principal.clone(),
            id,
            operation: ProductOperation::Update,
        })
        .await;
    if let Err(err) = authorized {
        return failure_page(err);
    }

    let result = match form.parse() {
        Ok(parsed) => {
            pages
                .update_use_case
                .execute(UpdateProductParams {
                    principal,
                    id,
                    body_id: None,
                    changes: parsed.into_changes(),
                })
                .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(product) => redirect(format!("/products/{}", product.id)),
        Err(err) if err.is_invalid_input() => form_page(
            "Edit product",
            format!("/products/{}/edit", id),
            form,
            Some(err),
        ),
        Err(err) => failure_page(err),
    }
}

#[handler]
async fn delete_page(
    Data(pages): Data<&Arc<ProductPages>>,
    req: &Request,
    Path(id): Path<i32>,
) -> Response {
    let params = AuthorizeProductParams {
        principal: pages.principals.resolve_request(req),
        id: ProductId::new(id),
        operation: ProductOperation::Delete,
    };

    match pages.authorize_use_case.execute(params).await {
        Ok(product) => render(
            &DeleteTemplate {
                product: ProductView::from(&product),
            },
            StatusCode::OK,
        ),
        Err(err) => failure_page(err),
    }
}

#[handler]
async fn delete_submit(
    Data(pages): Data<&Arc<ProductPages>>,
    req: &Request,
    Path(id): Path<i32>,
) -> Response {
    let params = DeleteProductParams {
        principal: pages.principals.resolve_request(req),
        id: ProductId::new(id),
    };

    match pages.delete_use_case.execute(params).await {
        Ok(()) => redirect("/products".to_string()),
        Err(err) => failure_page(err),
    }
}
