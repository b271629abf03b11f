use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub hours: i32,
    pub year: String,
    pub semester: i32,
    pub section: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub updated_by_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedule_assignment::Entity")]
    ScheduleAssignments,
    #[sea_orm(has_many = "super::lab::Entity")]
    Labs,
    #[sea_orm(has_many = "super::exam::Entity")]
    Exams,
    #[sea_orm(has_many = "super::teaching_material::Entity")]
    TeachingMaterials,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activities,
    #[sea_orm(has_many = "super::student_group::Entity")]
    StudentGroups,
}

impl Related<super::schedule_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleAssignments.def()
    }
}

impl Related<super::lab::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Labs.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exams.def()
    }
}

impl Related<super::teaching_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeachingMaterials.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::student_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
