use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Labs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Labs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Labs::Name).string().not_null())
                    .col(ColumnDef::new(Labs::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Labs::LabDay).string().not_null())
                    .col(ColumnDef::new(Labs::StartTime).string().not_null())
                    .col(ColumnDef::new(Labs::EndTime).string().not_null())
                    .col(ColumnDef::new(Labs::Location).string().null())
                    .col(ColumnDef::new(Labs::Capacity).integer().null())
                    .col(ColumnDef::new(Labs::Section).string().null())
                    .col(ColumnDef::new(Labs::CreatedById).uuid().null())
                    .col(ColumnDef::new(Labs::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Labs::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labs_course")
                            .from(Labs::Table, Labs::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Exams::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Exams::Title).string().not_null())
                    .col(ColumnDef::new(Exams::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Exams::ExamDate).timestamp().not_null())
                    .col(ColumnDef::new(Exams::ExamType).string().not_null())
                    .col(ColumnDef::new(Exams::Duration).integer().null())
                    .col(ColumnDef::new(Exams::Location).string().null())
                    .col(ColumnDef::new(Exams::Section).string().null())
                    .col(ColumnDef::new(Exams::Notes).string().null())
                    .col(ColumnDef::new(Exams::CreatedById).uuid().null())
                    .col(ColumnDef::new(Exams::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Exams::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exams_course")
                            .from(Exams::Table, Exams::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeachingMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeachingMaterials::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeachingMaterials::Title).string().not_null())
                    .col(ColumnDef::new(TeachingMaterials::CourseId).uuid().not_null())
                    .col(ColumnDef::new(TeachingMaterials::Type).string().not_null())
                    .col(
                        ColumnDef::new(TeachingMaterials::Description)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(TeachingMaterials::FileUrl).string().null())
                    .col(
                        ColumnDef::new(TeachingMaterials::ExternalUrl)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(TeachingMaterials::Section).string().null())
                    .col(ColumnDef::new(TeachingMaterials::CreatedById).uuid().null())
                    .col(
                        ColumnDef::new(TeachingMaterials::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeachingMaterials::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_materials_course")
                            .from(TeachingMaterials::Table, TeachingMaterials::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeachingMaterials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Labs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Labs {
    Table,
    Id,
    Name,
    CourseId,
    LabDay,
    StartTime,
    EndTime,
    Location,
    Capacity,
    Section,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    Table,
    Id,
    Title,
    CourseId,
    ExamDate,
    ExamType,
    Duration,
    Location,
    Section,
    Notes,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeachingMaterials {
    Table,
    Id,
    Title,
    CourseId,
    Type,
    Description,
    FileUrl,
    ExternalUrl,
    Section,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
