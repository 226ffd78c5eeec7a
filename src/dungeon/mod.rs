// src/dungeon/mod.rs

// Prozedurale Dungeon-Generierung aus den Algorithmen in `math`
pub mod builder;
pub mod config;
pub mod layout;
pub mod room;

pub use self::builder::MapGenerator;
pub use self::config::{MINIMUM_GENERATION, MINIMUM_ROOM_COUNT, MapGenerationConfig};
pub use self::layout::{LayoutDiagnostics, LayoutStage, MapLayout};
pub use self::room::{Direction, Room, RoomConnection, RoomId, RoomType};
