use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::authorize::AuthorizeProductUseCaseImpl;
use business::application::product::buy::BuyProductUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::service::ProductServiceImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::authorization::OwnershipPolicy;
use business::domain::product::repository::ProductRepository;

use crate::api::security::PrincipalResolver;
use crate::config::auth_config::AuthConfig;
use crate::web::routes::ProductPages;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub product_pages: Arc<ProductPages>,
}

impl DependencyContainer {
    pub fn new(repository: Arc<dyn ProductRepository>, auth: &AuthConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("products"));
        let principals = PrincipalResolver::new(auth);

        // Domain services
        let service = Arc::new(ProductServiceImpl {
            repository,
            logger: logger.clone(),
        });
        let authorizer = Arc::new(OwnershipPolicy);

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            service: service.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            service: service.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            service: service.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            service: service.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            service: service.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let buy_use_case = Arc::new(BuyProductUseCaseImpl {
            service: service.clone(),
            logger: logger.clone(),
        });
        let authorize_use_case = Arc::new(AuthorizeProductUseCaseImpl {
            service,
            authorizer,
            logger,
        });

        let health_api = crate::api::health::routes::HealthApi::new(get_all_use_case.clone());
        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case.clone(),
            get_all_use_case.clone(),
            get_by_id_use_case.clone(),
            update_use_case.clone(),
            delete_use_case.clone(),
            buy_use_case,
            principals.clone(),
        );

        let product_pages = Arc::new(ProductPages {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            authorize_use_case,
            principals,
        });

        Self {
            health_api,
            product_api,
            product_pages,
        }
    }
}
