use std::sync::Arc;

use logger::TracingLogger;
use persistence::price::in_memory::InMemoryPriceRepository;
use persistence::price::repository::PriceRepositoryPostgres;

use business::application::price::get_applicable::GetApplicablePriceUseCaseImpl;
use business::domain::price::repository::PriceRepository;

use crate::config::catalog_config::{CatalogConfig, init_database};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub price_api: crate::api::price::routes::PriceApi,
}

impl DependencyContainer {
    pub async fn new(catalog: &CatalogConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let price_repository: Arc<dyn PriceRepository> = match catalog {
            CatalogConfig::Postgres {
                database_url,
                migrations_path,
                max_connections,
            } => {
                let pool = init_database(database_url, migrations_path, *max_connections).await?;
                tracing::info!("Using PostgreSQL price catalog");
                Arc::new(PriceRepositoryPostgres::new(pool))
            }
            CatalogConfig::InMemory => {
                tracing::info!("DATABASE_URL not set, using in-memory price catalog");
                Arc::new(InMemoryPriceRepository::seeded()?)
            }
        };

        // Price use cases
        let get_applicable_use_case = Arc::new(GetApplicablePriceUseCaseImpl {
            repository: price_repository,
            logger,
        });

        let price_api = crate::api::price::routes::PriceApi::new(get_applicable_use_case);

        Ok(Self {
            health_api,
            price_api,
        })
    }
}
