// src/dungeon/layout.rs

//! # Map Layout
//!
//! The result of a [`MapGenerator`](super::builder::MapGenerator) run: the
//! rooms with their connections, the special rooms, and the intermediate
//! geometry of every pipeline step for debugging.

use super::room::{Room, RoomId};
use crate::debug::visualization::{Color, DebugSink};
use crate::math::{
    algorithms::{CaliperPair, GraphDistance},
    error::MathResult,
    structures::{UnorderedPair, WeightGraph},
    types::{Edge, Point, Rect},
};
use std::collections::HashMap;

/// Zwischenergebnisse der Pipeline.
#[derive(Debug, Clone)]
pub struct LayoutDiagnostics {
    /// All BSP leaves, breadth-first.
    pub partitions: Vec<Rect>,
    /// The leaves that became rooms, largest first.
    pub selected_spaces: Vec<Rect>,
    pub triangulation_edges: Vec<Edge>,
    pub spanning_tree_edges: Vec<Edge>,
    /// Convex hull of the room centers, CCW.
    pub hull: Vec<Point>,
    pub caliper_pair: CaliperPair,
    /// Rooms that had a single connection before extra connections were added.
    pub dead_ends: Vec<RoomId>,
}

/// Pipeline step to visualize with [`MapLayout::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutStage {
    Partitions,
    SelectedSpaces,
    RoomPoints,
    Triangulation,
    SpanningTree,
    Hull,
    SpecialRooms,
    DeadEnds,
    FinalEdges,
}

impl LayoutStage {
    pub const ALL: [LayoutStage; 9] = [
        LayoutStage::Partitions,
        LayoutStage::SelectedSpaces,
        LayoutStage::RoomPoints,
        LayoutStage::Triangulation,
        LayoutStage::SpanningTree,
        LayoutStage::Hull,
        LayoutStage::SpecialRooms,
        LayoutStage::DeadEnds,
        LayoutStage::FinalEdges,
    ];
}

#[derive(Debug, Clone)]
pub struct MapLayout {
    pub(super) rooms: Vec<Room>,
    pub(super) room_positions: Vec<Point>,
    pub(super) start_room: RoomId,
    pub(super) boss_entry_room: RoomId,
    pub(super) boss_room: Option<RoomId>,
    pub(super) connections: Vec<UnorderedPair<RoomId>>,
    pub(super) edges: Vec<Edge>,
    pub(super) diagnostics: LayoutDiagnostics,
}

impl MapLayout {
    /// Rooms indexed by their [`RoomId`].
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_at(&self, position: Point) -> Option<&Room> {
        self.rooms.iter().find(|room| room.center == position)
    }

    /// Room centers, in room id order.
    pub fn room_positions(&self) -> &[Point] {
        &self.room_positions
    }

    pub fn start_room(&self) -> &Room {
        &self.rooms[self.start_room.0]
    }

    pub fn boss_entry_room(&self) -> &Room {
        &self.rooms[self.boss_entry_room.0]
    }

    /// Reserved; the generator never assigns a boss room.
    pub fn boss_room(&self) -> Option<&Room> {
        self.boss_room.and_then(|id| self.room(id))
    }

    /// Each connection exactly once.
    pub fn connections(&self) -> &[UnorderedPair<RoomId>] {
        &self.connections
    }

    /// Connections as segments between room centers.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn diagnostics(&self) -> &LayoutDiagnostics {
        &self.diagnostics
    }

    pub fn dead_end_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.diagnostics.dead_ends.iter().filter_map(|&id| self.room(id))
    }

    /// Room graph weighted by the distance between room centers. Every room
    /// is a node, even without connections.
    pub fn connection_graph(&self) -> WeightGraph<RoomId, f64> {
        let mut graph = WeightGraph::new();
        for room in &self.rooms {
            graph.add_node(room.id);
        }
        for pair in &self.connections {
            let distance = self.rooms[pair.first.0]
                .center
                .distance_to(self.rooms[pair.second.0].center);
            graph.add_edge(pair.first, pair.second, distance);
        }
        graph
    }

    /// Hop count from the start room to every reachable room.
    pub fn distances_from_start(&self) -> MathResult<HashMap<RoomId, u32>> {
        GraphDistance::new(&self.connection_graph(), self.start_room).run()
    }

    pub fn is_connected(&self) -> bool {
        self.distances_from_start()
            .map(|distances| distances.len() == self.rooms.len())
            .unwrap_or(false)
    }

    /// Replays every stage up to and including `stage` into `sink`.
    pub fn draw<S: DebugSink + ?Sized>(&self, sink: &mut S, stage: LayoutStage) {
        for current in LayoutStage::ALL.into_iter().filter(|s| *s <= stage) {
            self.draw_stage(sink, current);
        }
    }

    /// Draws only `stage`.
    pub fn draw_single<S: DebugSink + ?Sized>(&self, sink: &mut S, stage: LayoutStage) {
        self.draw_stage(sink, stage);
    }

    fn draw_stage<S: DebugSink + ?Sized>(&self, sink: &mut S, stage: LayoutStage) {
        let diagnostics = &self.diagnostics;
        match stage {
            LayoutStage::Partitions => {
                for rect in &diagnostics.partitions {
                    sink.draw_rect(rect, Color::GREEN.with_alpha(96), None);
                }
            }
            LayoutStage::SelectedSpaces => {
                for rect in &diagnostics.selected_spaces {
                    sink.draw_rect(rect, Color::GREEN, None);
                }
            }
            LayoutStage::RoomPoints => sink.draw_points(&self.room_positions, Color::GREEN, None),
            LayoutStage::Triangulation => {
                sink.draw_edges(&diagnostics.triangulation_edges, Color::BLUE, None)
            }
            LayoutStage::SpanningTree => {
                sink.draw_edges(&diagnostics.spanning_tree_edges, Color::RED, None)
            }
            LayoutStage::Hull => {
                sink.draw_polygon(&diagnostics.hull, Color::MAGENTA, None);
                let pair = diagnostics.caliper_pair;
                sink.draw_edges(&[Edge::new(pair.p1, pair.p2)], Color::YELLOW, None);
            }
            LayoutStage::SpecialRooms => {
                sink.draw_point(self.start_room().center, Color::GRAY, None);
                sink.draw_point(self.boss_entry_room().center, Color::YELLOW, None);
            }
            LayoutStage::DeadEnds => {
                let points: Vec<Point> = self.dead_end_rooms().map(|room| room.center).collect();
                sink.draw_points(&points, Color::MAGENTA, None);
            }
            LayoutStage::FinalEdges => sink.draw_edges(&self.edges, Color::GREEN, None),
        }
    }
}
