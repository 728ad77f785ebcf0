use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

use crate::client::CatalogClient;
use crate::error::ClientError;
use crate::product::Product;

/// Access to the catalog API.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
    async fn get_product(&self, id: i32) -> Result<Product, ClientError>;
    /// Returns the stored product with its assigned id.
    async fn add_product(&self, product: &Product) -> Result<Product, ClientError>;
    async fn buy_product(&self, id: i32) -> Result<Product, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct HttpProductGateway {
    client: CatalogClient,
}

impl HttpProductGateway {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

/// Turns a failure status into `ClientError::Status`, keeping the API's
/// error code when the body carries one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    tracing::warn!("Catalog API answered {}: {}", status, message);
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self
            .client
            .identify(self.client.client.get(self.client.products_url()))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn get_product(&self, id: i32) -> Result<Product, ClientError> {
        let response = self
            .client
            .identify(self.client.client.get(self.client.product_url(id)))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn add_product(&self, product: &Product) -> Result<Product, ClientError> {
        let response = self
            .client
            .identify(self.client.client.post(self.client.products_url()))
            .json(product)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn buy_product(&self, id: i32) -> Result<Product, ClientError> {
        let response = self
            .client
            .identify(self.client.client.post(self.client.buy_url(id)))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::listener::{Acceptor, Listener, TcpListener};
    use poem::web::{Json, Path};
    use poem::{Request, Route, Server, get, handler, post};
    use serde_json::{Value, json};

    use super::*;
    use crate::client::USER_ID_HEADER;

    fn mug(id: i32, quantity: i32) -> Value {
        json!({
            "productId": id,
            "title": "Mug",
            "description": "Stoneware",
            "seller": "Pottery Studio",
            "price": 12.5,
            "quantity": quantity,
            "imageUrl": "/images/mug.png",
            "ownerId": "alice"
        })
    }

    #[handler]
    async fn list() -> Json<Value> {
        Json(json!([mug(1, 3), mug(2, 0)]))
    }

    #[handler]
    async fn create(req: &Request, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if req.header(USER_ID_HEADER).is_none() {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "name": "Forbidden", "message": "product.forbidden" })),
            );
        }
        let mut created = body;
        created["productId"] = json!(7);
        (StatusCode::CREATED, Json(created))
    }

    #[handler]
    async fn details() -> (StatusCode, &'static str) {
        (StatusCode::BAD_GATEWAY, "upstream unavailable")
    }

    #[handler]
    async fn buy(Path(id): Path<i32>) -> (StatusCode, Json<Value>) {
        if id == 2 {
            return (
                StatusCode::CONFLICT,
                Json(json!({ "name": "Conflict", "message": "product.out_of_stock" })),
            );
        }
        (StatusCode::OK, Json(mug(id, 2)))
    }

    /// Starts a catalog stand-in on a free port and returns its API root.
    async fn serve() -> String {
        let app = Route::new()
            .at("/api/products", get(list).post(create))
            .at("/api/products/:id", get(details))
            .at("/api/products/:id/buy", post(buy));
        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .unwrap();
        let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
        tokio::spawn(Server::new_with_acceptor(acceptor).run(app));
        format!("http://{}/api", addr)
    }

    fn draft() -> Product {
        Product {
            product_id: 0,
            title: "Mug".to_string(),
            description: "Stoneware".to_string(),
            seller: "Pottery Studio".to_string(),
            price: 12.5,
            quantity: 1,
            image_url: "/images/mug.png".to_string(),
        }
    }

    #[tokio::test]
    async fn should_decode_created_product() {
        let gateway = HttpProductGateway::new(CatalogClient::new(serve().await).with_user("alice"));

        let created = gateway.add_product(&draft()).await.unwrap();

        assert_eq!(created.product_id, 7);
        assert_eq!(created.title, "Mug");
        assert_eq!(created.price, 12.5);
    }

    #[tokio::test]
    async fn should_keep_api_error_code_on_refusal() {
        let gateway = HttpProductGateway::new(CatalogClient::new(serve().await));

        let result = gateway.add_product(&draft()).await;

        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "product.forbidden");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_fall_back_to_status_text_for_non_json_error() {
        let gateway = HttpProductGateway::new(CatalogClient::new(serve().await));

        let result = gateway.get_product(5).await;

        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "502 Bad Gateway");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_list_and_buy_products() {
        let gateway = HttpProductGateway::new(CatalogClient::new(serve().await));

        let products = gateway.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].quantity, 0);

        let bought = gateway.buy_product(1).await.unwrap();
        assert_eq!(bought.quantity, 2);

        assert!(matches!(
            gateway.buy_product(2).await,
            Err(ClientError::Status { status: 409, .. })
        ));
    }
}
