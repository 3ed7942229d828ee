use crate::entities::{comment, community_post, user};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct PostRepository;

impl PostRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_recent(
        &self,
        category: Option<String>,
        limit: u64,
    ) -> Result<Vec<(community_post::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let mut query = community_post::Entity::find().find_also_related(user::Entity);
        if let Some(category) = category {
            query = query.filter(community_post::Column::Category.eq(category));
        }
        let posts = query
            .order_by_desc(community_post::Column::CreatedAt)
            .limit(limit)
            .all(db)
            .await?;
        Ok(posts)
    }

    pub async fn find_by_id(&self, post_id: Uuid) -> Result<Option<community_post::Model>> {
        let db = self.get_connection();
        let post = community_post::Entity::find_by_id(post_id).one(db).await?;
        Ok(post)
    }

    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        author_id: Uuid,
        title: String,
        content: String,
        category: Option<String>,
        now: NaiveDateTime,
    ) -> Result<community_post::Model> {
        let post = community_post::ActiveModel {
            post_id: Set(Uuid::new_v4()),
            author_id: Set(author_id),
            title: Set(title),
            content: Set(content),
            category: Set(category),
            likes_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await?;
        Ok(post)
    }

    pub async fn increment_likes<C: ConnectionTrait>(
        conn: &C,
        post: community_post::Model,
    ) -> Result<community_post::Model> {
        let likes = post.likes_count + 1;
        let mut active: community_post::ActiveModel = post.into();
        active.likes_count = Set(likes);
        let updated = active.update(conn).await?;
        Ok(updated)
    }

    pub async fn insert_comment<C: ConnectionTrait>(
        conn: &C,
        post_id: Uuid,
        author_id: Uuid,
        content: String,
        now: NaiveDateTime,
    ) -> Result<comment::Model> {
        let comment = comment::ActiveModel {
            comment_id: Set(Uuid::new_v4()),
            post_id: Set(post_id),
            author_id: Set(author_id),
            content: Set(content),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;
        Ok(comment)
    }

    pub async fn count_since(&self, since: NaiveDateTime) -> Result<u64> {
        let db = self.get_connection();
        let count = community_post::Entity::find()
            .filter(community_post::Column::CreatedAt.gte(since))
            .count(db)
            .await?;
        Ok(count)
    }
}
