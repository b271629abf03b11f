pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_core_tables;
mod m20250608_000002_create_group_activity_tables;
mod m20250614_000003_create_course_resource_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_core_tables::Migration),
            Box::new(m20250608_000002_create_group_activity_tables::Migration),
            Box::new(m20250614_000003_create_course_resource_tables::Migration),
        ]
    }
}
