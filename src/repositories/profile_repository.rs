use crate::entities::student_profile;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::Value;
use uuid::Uuid;

pub struct ProfileRepository;

impl ProfileRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<student_profile::Model>> {
        let db = self.get_connection();
        let profile = student_profile::Entity::find()
            .filter(student_profile::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(profile)
    }

    /// Empty profile created at registration for students.
    pub async fn create_default(
        &self,
        user_id: Uuid,
        full_name: String,
        student_code: Option<String>,
    ) -> Result<student_profile::Model> {
        let db = self.get_connection();
        let profile = student_profile::ActiveModel {
            profile_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            full_name: Set(full_name),
            student_code: Set(student_code),
            nationality: Set(None),
            native_language: Set(None),
            program: Set(None),
            year: Set(None),
            bio: Set(None),
            interests: Set(None),
            study_preferences: Set(None),
            avatar_emoji: Set("🎓".to_string()),
        }
        .insert(db)
        .await?;
        Ok(profile)
    }

    pub async fn upsert(
        &self,
        user_id: Uuid,
        updates: ProfileUpdate,
    ) -> Result<student_profile::Model> {
        let db = self.get_connection();
        let existing = self.find_by_user(user_id).await?;

        let profile = match existing {
            Some(profile) => {
                let mut active: student_profile::ActiveModel = profile.into();
                if let Some(full_name) = updates.full_name {
                    active.full_name = Set(full_name);
                }
                if let Some(nationality) = updates.nationality {
                    active.nationality = Set(Some(nationality));
                }
                if let Some(native_language) = updates.native_language {
                    active.native_language = Set(Some(native_language));
                }
                if let Some(program) = updates.program {
                    active.program = Set(Some(program));
                }
                if let Some(year) = updates.year {
                    active.year = Set(Some(year));
                }
                if let Some(bio) = updates.bio {
                    active.bio = Set(Some(bio));
                }
                if let Some(interests) = updates.interests {
                    active.interests = Set(Some(interests));
                }
                if let Some(study_preferences) = updates.study_preferences {
                    active.study_preferences = Set(Some(study_preferences));
                }
                if let Some(avatar_emoji) = updates.avatar_emoji {
                    active.avatar_emoji = Set(avatar_emoji);
                }
                active.update(db).await?
            }
            None => {
                student_profile::ActiveModel {
                    profile_id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    full_name: Set(updates.full_name.unwrap_or_default()),
                    student_code: Set(None),
                    nationality: Set(updates.nationality),
                    native_language: Set(updates.native_language),
                    program: Set(updates.program),
                    year: Set(updates.year),
                    bio: Set(updates.bio),
                    interests: Set(updates.interests),
                    study_preferences: Set(updates.study_preferences),
                    avatar_emoji: Set(updates.avatar_emoji.unwrap_or_else(|| "🎓".to_string())),
                }
                .insert(db)
                .await?
            }
        };
        Ok(profile)
    }
}

#[derive(Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub nationality: Option<String>,
    pub native_language: Option<String>,
    pub program: Option<String>,
    pub year: Option<i32>,
    pub bio: Option<String>,
    pub interests: Option<Value>,
    pub study_preferences: Option<Value>,
    pub avatar_emoji: Option<String>,
}
