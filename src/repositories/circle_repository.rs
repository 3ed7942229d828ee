use crate::entities::sea_orm_active_enums::{CircleRole, CircleStatus};
use crate::entities::{circle_member, student_profile, study_circle, user};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

pub struct CircleRepository;

impl CircleRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self, course_id: Option<Uuid>) -> Result<Vec<study_circle::Model>> {
        let db = self.get_connection();
        let mut query = study_circle::Entity::find();
        if let Some(course_id) = course_id {
            query = query.filter(study_circle::Column::CourseId.eq(course_id));
        }
        let circles = query
            .order_by_asc(study_circle::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(circles)
    }

    pub async fn find_by_id(&self, circle_id: Uuid) -> Result<Option<study_circle::Model>> {
        let db = self.get_connection();
        let circle = study_circle::Entity::find_by_id(circle_id).one(db).await?;
        Ok(circle)
    }

    /// Active circles for a course, oldest first, so matching fills the
    /// earliest circle before spilling into newer ones.
    pub async fn find_active_by_course(&self, course_id: Uuid) -> Result<Vec<study_circle::Model>> {
        let db = self.get_connection();
        let circles = study_circle::Entity::find()
            .filter(study_circle::Column::CourseId.eq(course_id))
            .filter(study_circle::Column::Status.eq(CircleStatus::Active))
            .order_by_asc(study_circle::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(circles)
    }

    pub async fn member_count(&self, circle_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let count = circle_member::Entity::find()
            .filter(circle_member::Column::CircleId.eq(circle_id))
            .count(db)
            .await?;
        Ok(count)
    }

    pub async fn find_membership(
        &self,
        circle_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<circle_member::Model>> {
        let db = self.get_connection();
        let membership = circle_member::Entity::find()
            .filter(circle_member::Column::CircleId.eq(circle_id))
            .filter(circle_member::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(membership)
    }

    pub async fn memberships_for_user(&self, user_id: Uuid) -> Result<Vec<circle_member::Model>> {
        let db = self.get_connection();
        let memberships = circle_member::Entity::find()
            .filter(circle_member::Column::UserId.eq(user_id))
            .all(db)
            .await?;
        Ok(memberships)
    }

    /// Takes the connection explicitly so joins can share a transaction with
    /// the points award they trigger.
    pub async fn add_member<C: ConnectionTrait>(
        conn: &C,
        circle_id: Uuid,
        user_id: Uuid,
        role: CircleRole,
        now: chrono::NaiveDateTime,
    ) -> Result<circle_member::Model> {
        let member = circle_member::ActiveModel {
            member_id: Set(Uuid::new_v4()),
            circle_id: Set(circle_id),
            user_id: Set(user_id),
            role: Set(role),
            participation_score: Set(0.0),
            joined_at: Set(now),
        }
        .insert(conn)
        .await?;
        Ok(member)
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        name: String,
        sprint_id: Option<String>,
        now: chrono::NaiveDateTime,
    ) -> Result<study_circle::Model> {
        let circle = study_circle::ActiveModel {
            circle_id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            name: Set(name),
            sprint_id: Set(sprint_id),
            status: Set(CircleStatus::Active),
            max_members: Set(5),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;
        Ok(circle)
    }

    pub async fn members_with_profiles(
        &self,
        circle_id: Uuid,
    ) -> Result<Vec<(circle_member::Model, Option<user::Model>, Option<student_profile::Model>)>>
    {
        let db = self.get_connection();
        let members = circle_member::Entity::find()
            .filter(circle_member::Column::CircleId.eq(circle_id))
            .order_by_asc(circle_member::Column::JoinedAt)
            .all(db)
            .await?;

        let mut result = Vec::with_capacity(members.len());
        for member in members {
            let user = user::Entity::find_by_id(member.user_id).one(db).await?;
            let profile = student_profile::Entity::find()
                .filter(student_profile::Column::UserId.eq(member.user_id))
                .one(db)
                .await?;
            result.push((member, user, profile));
        }
        Ok(result)
    }

    pub async fn count_active(&self) -> Result<u64> {
        let db = self.get_connection();
        let count = study_circle::Entity::find()
            .filter(study_circle::Column::Status.eq(CircleStatus::Active))
            .count(db)
            .await?;
        Ok(count)
    }
}
