use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub rank: String,
    pub department: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub updated_by_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedule_assignment::Entity")]
    ScheduleAssignments,
}

impl Related<super::schedule_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
