use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::video_room;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVideoRoomRequest {
    pub circle_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoRoomResponse {
    pub room: video_room::Model,
    pub jitsi_url: String,
    pub room_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoRoomLookupResponse {
    pub exists: bool,
    pub room: Option<video_room::Model>,
    pub jitsi_url: Option<String>,
}
