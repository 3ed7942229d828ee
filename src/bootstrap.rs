use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::{badge, sea_orm_active_enums::RoleEnum, user};
use crate::gamification::badges::default_badges;

pub async fn initialize_admin_user(db: &DatabaseConnection) -> Result<()> {
    let admin_email: &str = &APP_CONFIG.admin_email;
    let default_password: &str = &APP_CONFIG.admin_password;

    let existing_admin = user::Entity::find()
        .filter(user::Column::Email.eq(admin_email))
        .one(db)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let hashed_password = bcrypt::hash(default_password, bcrypt::DEFAULT_COST)
        .context("Failed to hash admin password")?;

    let admin_user = user::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        email: Set(admin_email.to_string()),
        username: Set("admin".to_string()),
        password: Set(hashed_password),
        role: Set(RoleEnum::Admin),
        is_active: Set(true),
        created_at: Set(Utc::now().naive_utc()),
    };

    admin_user
        .insert(db)
        .await
        .context("Failed to insert admin user")?;

    tracing::info!("✅ Admin user created successfully!");
    tracing::info!("  Email: {}", admin_email);
    tracing::warn!("⚠️  Please change the default password after first login!");

    Ok(())
}

/// Seeds the badge catalog. Existing badges (matched by name) are left
/// untouched, so this is safe to run on every startup.
pub async fn initialize_badges(db: &DatabaseConnection) -> Result<()> {
    let now = Utc::now().naive_utc();
    let mut created = 0usize;

    for seed in default_badges() {
        let existing = badge::Entity::find()
            .filter(badge::Column::Name.eq(seed.name))
            .one(db)
            .await
            .context("Failed to check existing badge")?;
        if existing.is_some() {
            continue;
        }

        badge::ActiveModel {
            badge_id: Set(Uuid::new_v4()),
            name: Set(seed.name.to_string()),
            description: Set(Some(seed.description.to_string())),
            icon: Set(Some(seed.icon.to_string())),
            category: Set(Some(seed.category.to_string())),
            points_required: Set(seed.points_required),
            criteria: Set(seed.criteria),
            rarity: Set(seed.rarity),
            created_at: Set(now),
        }
        .insert(db)
        .await
        .context("Failed to insert badge")?;
        created += 1;
    }

    if created > 0 {
        tracing::info!("Seeded {} badge(s)", created);
    }
    Ok(())
}
