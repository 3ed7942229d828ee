use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("student"),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_profiles table
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::ProfileId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::FullName).string().not_null())
                    .col(ColumnDef::new(StudentProfiles::StudentCode).string().null())
                    .col(ColumnDef::new(StudentProfiles::Nationality).string().null())
                    .col(ColumnDef::new(StudentProfiles::NativeLanguage).string().null())
                    .col(ColumnDef::new(StudentProfiles::Program).string().null())
                    .col(ColumnDef::new(StudentProfiles::Year).integer().null())
                    .col(ColumnDef::new(StudentProfiles::Bio).text().null())
                    .col(ColumnDef::new(StudentProfiles::Interests).json().null())
                    .col(ColumnDef::new(StudentProfiles::StudyPreferences).json().null())
                    .col(
                        ColumnDef::new(StudentProfiles::AvatarEmoji)
                            .string()
                            .not_null()
                            .default("🎓"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_profiles_user")
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::CourseId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::SprintNumber).integer().null())
                    .col(ColumnDef::new(Courses::AcademicYear).string().null())
                    .col(ColumnDef::new(Courses::StartDate).timestamp().null())
                    .col(ColumnDef::new(Courses::EndDate).timestamp().null())
                    .to_owned(),
            )
            .await?;

        // Create study_circles table
        manager
            .create_table(
                Table::create()
                    .table(StudyCircles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyCircles::CircleId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(StudyCircles::CourseId).uuid().not_null())
                    .col(ColumnDef::new(StudyCircles::Name).string().not_null())
                    .col(ColumnDef::new(StudyCircles::SprintId).string().null())
                    .col(
                        ColumnDef::new(StudyCircles::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(StudyCircles::MaxMembers)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(StudyCircles::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_circles_course")
                            .from(StudyCircles::Table, StudyCircles::CourseId)
                            .to(Courses::Table, Courses::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create circle_members table
        manager
            .create_table(
                Table::create()
                    .table(CircleMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CircleMembers::MemberId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(CircleMembers::CircleId).uuid().not_null())
                    .col(ColumnDef::new(CircleMembers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CircleMembers::Role)
                            .string()
                            .not_null()
                            .default("member"),
                    )
                    .col(
                        ColumnDef::new(CircleMembers::ParticipationScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CircleMembers::JoinedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_circle_members_circle")
                            .from(CircleMembers::Table, CircleMembers::CircleId)
                            .to(StudyCircles::Table, StudyCircles::CircleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_circle_members_user")
                            .from(CircleMembers::Table, CircleMembers::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create wellness_checkins table
        manager
            .create_table(
                Table::create()
                    .table(WellnessCheckins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WellnessCheckins::CheckinId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(WellnessCheckins::UserId).uuid().not_null())
                    .col(ColumnDef::new(WellnessCheckins::MoodEmoji).string().not_null())
                    .col(ColumnDef::new(WellnessCheckins::MoodScore).integer().not_null())
                    .col(ColumnDef::new(WellnessCheckins::Note).text().null())
                    .col(ColumnDef::new(WellnessCheckins::SprintWeek).string().null())
                    .col(
                        ColumnDef::new(WellnessCheckins::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wellness_checkins_user")
                            .from(WellnessCheckins::Table, WellnessCheckins::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create community_posts table
        manager
            .create_table(
                Table::create()
                    .table(CommunityPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommunityPosts::PostId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(CommunityPosts::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(CommunityPosts::Title).string().not_null())
                    .col(ColumnDef::new(CommunityPosts::Content).text().not_null())
                    .col(ColumnDef::new(CommunityPosts::Category).string().null())
                    .col(
                        ColumnDef::new(CommunityPosts::LikesCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CommunityPosts::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(CommunityPosts::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_community_posts_author")
                            .from(CommunityPosts::Table, CommunityPosts::AuthorId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create comments table
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::CommentId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Comments::PostId).uuid().not_null())
                    .col(ColumnDef::new(Comments::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post")
                            .from(Comments::Table, Comments::PostId)
                            .to(CommunityPosts::Table, CommunityPosts::PostId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author")
                            .from(Comments::Table, Comments::AuthorId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create events table
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::EventId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Events::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Description).text().null())
                    .col(ColumnDef::new(Events::Location).string().null())
                    .col(ColumnDef::new(Events::EventDate).timestamp().not_null())
                    .col(
                        ColumnDef::new(Events::AttendeeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Events::MaxAttendees).integer().null())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_creator")
                            .from(Events::Table, Events::CreatorId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create event_attendees table
        manager
            .create_table(
                Table::create()
                    .table(EventAttendees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventAttendees::AttendeeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(EventAttendees::EventId).uuid().not_null())
                    .col(ColumnDef::new(EventAttendees::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventAttendees::RsvpAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendees_event")
                            .from(EventAttendees::Table, EventAttendees::EventId)
                            .to(Events::Table, Events::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendees_user")
                            .from(EventAttendees::Table, EventAttendees::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventAttendees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CommunityPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WellnessCheckins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CircleMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudyCircles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    Email,
    Username,
    Password,
    Role,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    Table,
    ProfileId,
    UserId,
    FullName,
    StudentCode,
    Nationality,
    NativeLanguage,
    Program,
    Year,
    Bio,
    Interests,
    StudyPreferences,
    AvatarEmoji,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    CourseId,
    Code,
    Title,
    SprintNumber,
    AcademicYear,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum StudyCircles {
    Table,
    CircleId,
    CourseId,
    Name,
    SprintId,
    Status,
    MaxMembers,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CircleMembers {
    Table,
    MemberId,
    CircleId,
    UserId,
    Role,
    ParticipationScore,
    JoinedAt,
}

#[derive(DeriveIden)]
enum WellnessCheckins {
    Table,
    CheckinId,
    UserId,
    MoodEmoji,
    MoodScore,
    Note,
    SprintWeek,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CommunityPosts {
    Table,
    PostId,
    AuthorId,
    Title,
    Content,
    Category,
    LikesCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    CommentId,
    PostId,
    AuthorId,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    EventId,
    CreatorId,
    Title,
    Description,
    Location,
    EventDate,
    AttendeeCount,
    MaxAttendees,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventAttendees {
    Table,
    AttendeeId,
    EventId,
    UserId,
    RsvpAt,
}
