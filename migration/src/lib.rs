pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_core_tables;
mod m20240915_000002_create_gamification_tables;
mod m20241002_000003_create_session_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_core_tables::Migration),
            Box::new(m20240915_000002_create_gamification_tables::Migration),
            Box::new(m20241002_000003_create_session_tables::Migration),
        ]
    }
}
