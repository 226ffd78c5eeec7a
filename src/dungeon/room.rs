// src/dungeon/room.rs

//! Rooms and the typed connections between them.

use crate::math::types::{Point, Rect};
use std::collections::BTreeMap;
use std::fmt;

/// Index of a room in its [`MapLayout`](super::layout::MapLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoomType {
    #[default]
    Normal,
    Start,
    BossEntry,
    Boss,
    Chest,
    Shop,
}

impl RoomType {
    /// Start, BossEntry und Boss zählen nie als Sackgasse.
    pub fn is_special(&self) -> bool {
        matches!(self, RoomType::Start | RoomType::BossEntry | RoomType::Boss)
    }
}

/// Side of a room through which a connection leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of the dominant axis of `offset`. Equal magnitudes
    /// resolve to the vertical axis.
    pub fn from_offset(offset: Point) -> Direction {
        if offset.y.abs() >= offset.x.abs() {
            if offset.y > 0.0 {
                Direction::Up
            } else {
                Direction::Down
            }
        } else if offset.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// Rotation around the vertical axis, clockwise from `Up`.
    pub fn yaw_degrees(&self) -> f64 {
        match self {
            Direction::Up => 0.0,
            Direction::Right => 90.0,
            Direction::Down => 180.0,
            Direction::Left => 270.0,
        }
    }

    pub fn unit_offset(&self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, 1.0),
            Direction::Down => Point::new(0.0, -1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
        }
    }

    /// [`unit_offset`](Self::unit_offset) turned a quarter clockwise. Used to
    /// place paired objects (e.g. portals) side by side on a wall.
    pub fn clockwise_offset(&self) -> Point {
        match self {
            Direction::Up => Point::new(1.0, 0.0),
            Direction::Down => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(0.0, -1.0),
            Direction::Left => Point::new(0.0, 1.0),
        }
    }
}

/// One side of a connection, stored in the room it leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomConnection {
    pub target: RoomId,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub center: Point,
    /// The partition cell the room was placed in.
    pub space: Rect,
    pub room_type: RoomType,
    pub connections: BTreeMap<RoomId, RoomConnection>,
}

impl Room {
    pub fn new(id: RoomId, space: Rect) -> Self {
        Self {
            id,
            center: space.center(),
            space,
            room_type: RoomType::Normal,
            connections: BTreeMap::new(),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains_key(&other)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.connections.keys().copied()
    }

    pub fn is_dead_end(&self) -> bool {
        self.connections.len() == 1 && !self.room_type.is_special()
    }

    /// Mitte der Wand in Richtung `direction`.
    pub fn door_position(&self, direction: Direction) -> Point {
        let offset = direction.unit_offset();
        self.center
            + Point::new(
                offset.x * self.space.width / 2.0,
                offset.y * self.space.height / 2.0,
            )
    }
}
