use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create gamification_points table (one ledger row per user)
        manager
            .create_table(
                Table::create()
                    .table(GamificationPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GamificationPoints::PointsId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(
                        ColumnDef::new(GamificationPoints::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(GamificationPoints::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamificationPoints::Level)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(GamificationPoints::TotalPointsEarned)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamificationPoints::StreakDays)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(GamificationPoints::LastActivity).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gamification_points_user")
                            .from(GamificationPoints::Table, GamificationPoints::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create points_transactions table (append-only award log)
        manager
            .create_table(
                Table::create()
                    .table(PointsTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PointsTransactions::TransactionId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(PointsTransactions::UserId).uuid().not_null())
                    .col(ColumnDef::new(PointsTransactions::Points).integer().not_null())
                    .col(ColumnDef::new(PointsTransactions::ActionType).string().not_null())
                    .col(ColumnDef::new(PointsTransactions::Description).string().null())
                    .col(
                        ColumnDef::new(PointsTransactions::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_points_transactions_user")
                            .from(PointsTransactions::Table, PointsTransactions::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create badges table (static catalog, seeded at bootstrap)
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badges::BadgeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Badges::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Badges::Description).text().null())
                    .col(ColumnDef::new(Badges::Icon).string().null())
                    .col(ColumnDef::new(Badges::Category).string().null())
                    .col(
                        ColumnDef::new(Badges::PointsRequired)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Badges::Criteria).json().not_null())
                    .col(
                        ColumnDef::new(Badges::Rarity)
                            .string()
                            .not_null()
                            .default("common"),
                    )
                    .col(
                        ColumnDef::new(Badges::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create user_badges table
        manager
            .create_table(
                Table::create()
                    .table(UserBadges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserBadges::UserBadgeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(UserBadges::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserBadges::BadgeId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserBadges::EarnedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(UserBadges::Progress)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badges_user")
                            .from(UserBadges::Table, UserBadges::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badges_badge")
                            .from(UserBadges::Table, UserBadges::BadgeId)
                            .to(Badges::Table, Badges::BadgeId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create notifications table
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::NotificationId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Notifications::UserId).uuid().not_null())
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::NotificationType).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Notifications::ActionUrl).string().null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifications_user")
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserBadges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PointsTransactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GamificationPoints::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum GamificationPoints {
    Table,
    PointsId,
    UserId,
    Points,
    Level,
    TotalPointsEarned,
    StreakDays,
    LastActivity,
}

#[derive(DeriveIden)]
enum PointsTransactions {
    Table,
    TransactionId,
    UserId,
    Points,
    ActionType,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Badges {
    Table,
    BadgeId,
    Name,
    Description,
    Icon,
    Category,
    PointsRequired,
    Criteria,
    Rarity,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserBadges {
    Table,
    UserBadgeId,
    UserId,
    BadgeId,
    EarnedAt,
    Progress,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    NotificationId,
    UserId,
    Title,
    Message,
    NotificationType,
    IsRead,
    ActionUrl,
    CreatedAt,
}
