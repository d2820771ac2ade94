use sea_orm_migration::prelude::*;

mod m20150611_062411_create_users;
mod m20150611_063909_create_pets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20150611_062411_create_users::Migration),
            Box::new(m20150611_063909_create_pets::Migration),
        ]
    }
}
