use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::{routes, views::Views};
use crate::contract::client::UsersPetsApi;
use crate::domain::service::Service;
use crate::gateways::local::UsersPetsLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmUsersRepository;

/// The users/pets module: repository, service, views and the in-process client.
#[derive(Clone)]
pub struct UsersPets {
    service: Arc<Service>,
    views: Arc<Views>,
    client: Arc<dyn UsersPetsApi>,
}

impl UsersPets {
    /// Wire the module on top of an open (and migrated) database connection.
    pub fn new(db: DatabaseConnection) -> anyhow::Result<Self> {
        info!("Initializing users_pets module");

        let repo = SeaOrmUsersRepository::new(db);
        let service = Arc::new(Service::new(Arc::new(repo)));
        let views = Arc::new(Views::new()?);
        let client: Arc<dyn UsersPetsApi> = Arc::new(UsersPetsLocalClient::new(service.clone()));

        Ok(Self {
            service,
            views,
            client,
        })
    }

    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running users_pets database migrations");
        Migrator::up(db, None).await?;
        info!("users_pets database migrations completed successfully");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn client(&self) -> Arc<dyn UsersPetsApi> {
        self.client.clone()
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering users_pets routes");
        routes::register_routes(router, self.service.clone(), self.views.clone())
    }
}
