use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create pomodoro_sessions table
        manager
            .create_table(
                Table::create()
                    .table(PomodoroSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PomodoroSessions::SessionId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(PomodoroSessions::UserId).uuid().not_null())
                    .col(ColumnDef::new(PomodoroSessions::CircleId).uuid().null())
                    .col(
                        ColumnDef::new(PomodoroSessions::DurationMinutes)
                            .integer()
                            .not_null()
                            .default(25),
                    )
                    .col(
                        ColumnDef::new(PomodoroSessions::BreakMinutes)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(ColumnDef::new(PomodoroSessions::StartedAt).timestamp().not_null())
                    .col(ColumnDef::new(PomodoroSessions::EndedAt).timestamp().null())
                    .col(
                        ColumnDef::new(PomodoroSessions::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PomodoroSessions::IsGroupSession)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pomodoro_sessions_user")
                            .from(PomodoroSessions::Table, PomodoroSessions::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pomodoro_sessions_circle")
                            .from(PomodoroSessions::Table, PomodoroSessions::CircleId)
                            .to(StudyCircles::Table, StudyCircles::CircleId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create study_sessions table
        manager
            .create_table(
                Table::create()
                    .table(StudySessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudySessions::SessionId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(StudySessions::UserId).uuid().not_null())
                    .col(ColumnDef::new(StudySessions::CircleId).uuid().null())
                    .col(ColumnDef::new(StudySessions::CourseId).uuid().null())
                    .col(
                        ColumnDef::new(StudySessions::StartedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(ColumnDef::new(StudySessions::EndedAt).timestamp().null())
                    .col(ColumnDef::new(StudySessions::DurationMinutes).integer().null())
                    .col(ColumnDef::new(StudySessions::SessionType).string().null())
                    .col(ColumnDef::new(StudySessions::Notes).text().null())
                    .col(ColumnDef::new(StudySessions::ProductivityRating).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_sessions_user")
                            .from(StudySessions::Table, StudySessions::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create video_rooms table
        manager
            .create_table(
                Table::create()
                    .table(VideoRooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VideoRooms::RoomId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(VideoRooms::CircleId).uuid().not_null())
                    .col(ColumnDef::new(VideoRooms::RoomName).string().not_null().unique_key())
                    .col(ColumnDef::new(VideoRooms::JitsiRoomId).string().null().unique_key())
                    .col(ColumnDef::new(VideoRooms::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(VideoRooms::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(VideoRooms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(VideoRooms::LastUsed).timestamp().null())
                    .col(
                        ColumnDef::new(VideoRooms::ParticipantCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_rooms_circle")
                            .from(VideoRooms::Table, VideoRooms::CircleId)
                            .to(StudyCircles::Table, StudyCircles::CircleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_rooms_creator")
                            .from(VideoRooms::Table, VideoRooms::CreatedBy)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoRooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudySessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PomodoroSessions::Table).to_owned())
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
enum StudyCircles {
    Table,
    CircleId,
}

#[derive(DeriveIden)]
enum PomodoroSessions {
    Table,
    SessionId,
    UserId,
    CircleId,
    DurationMinutes,
    BreakMinutes,
    StartedAt,
    EndedAt,
    Completed,
    IsGroupSession,
}

#[derive(DeriveIden)]
enum StudySessions {
    Table,
    SessionId,
    UserId,
    CircleId,
    CourseId,
    StartedAt,
    EndedAt,
    DurationMinutes,
    SessionType,
    Notes,
    ProductivityRating,
}

#[derive(DeriveIden)]
enum VideoRooms {
    Table,
    RoomId,
    CircleId,
    RoomName,
    JitsiRoomId,
    CreatedBy,
    CreatedAt,
    IsActive,
    LastUsed,
    ParticipantCount,
}
