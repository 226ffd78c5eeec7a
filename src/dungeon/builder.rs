// src/dungeon/builder.rs
use super::config::MapGenerationConfig;
use super::layout::{LayoutDiagnostics, MapLayout};
use super::room::{Direction, Room, RoomConnection, RoomId, RoomType};
use crate::math::{
    algorithms::{
        BinarySpacePartition, ConvexHull, MinimumSpanningTree, PerpendicularFilter,
        RotatingCalipers, Triangulation,
    },
    error::{MathError, MathResult},
    probability::SeedResource,
    structures::{UnionFind, UnorderedPair, WeightGraph},
    types::{Edge, Point, Rect},
};
use crate::{next_random_bool, next_random_ratio};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

pub struct MapGenerator {
    config: MapGenerationConfig,
}

/// Verbindungen, die während der Generierung entstehen.
#[derive(Default)]
struct ConnectionSet {
    pairs: Vec<UnorderedPair<RoomId>>,
    seen: HashSet<UnorderedPair<RoomId>>,
    edges: Vec<Edge>,
}

impl MapGenerator {
    pub fn new(config: MapGenerationConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MapGenerationConfig {
        &self.config
    }

    /// Generates a layout with the random source of the configuration
    /// (see [`MapGenerationConfig::seed_resource`]).
    pub fn generate_seeded(&self) -> MathResult<MapLayout> {
        let mut seed_resource = self.config.seed_resource();
        self.generate(&mut seed_resource)
    }

    pub fn generate(&self, seed_resource: &mut SeedResource) -> MathResult<MapLayout> {
        // 1. Raum aufteilen
        let bounds = Rect::from_size(self.config.width, self.config.height)?;
        let partition = BinarySpacePartition::new(bounds, self.config.generation)
            .with_random_range(self.config.partitioning_range)
            .run(seed_resource)?;
        let partitions = partition.leaves();

        // 2. Größte Zellen als Räume wählen
        let selected_spaces = self.select_largest_spaces(&partitions);
        let mut rooms: Vec<Room> = selected_spaces
            .iter()
            .enumerate()
            .map(|(i, space)| Room::new(RoomId(i), *space))
            .collect();
        let room_positions: Vec<Point> = rooms.iter().map(|room| room.center).collect();
        let position_table: HashMap<Point, RoomId> =
            rooms.iter().map(|room| (room.center, room.id)).collect();
        debug!(
            "MapGenerator: selected {} of {} partitions",
            rooms.len(),
            partitions.len()
        );

        // 3. Triangulieren
        let triangulation = Triangulation::new(room_positions.clone()).run()?;
        let mut triangulated_graph = WeightGraph::from_edges(&triangulation.edges);
        for &position in &room_positions {
            triangulated_graph.add_node(position);
        }

        // 4. Minimaler Spannbaum
        let spanning_tree = MinimumSpanningTree::new(&triangulated_graph).run()?;
        let spanning_tree_edges = spanning_tree.to_edges();

        // 5. Räume verbinden
        let mut connections = ConnectionSet::default();
        for edge in &spanning_tree_edges {
            let a = lookup(&position_table, edge.start)?;
            let b = lookup(&position_table, edge.end)?;
            connect_rooms(&mut rooms, &mut connections, a, b);
        }
        connect_components(&mut rooms, &mut connections);

        // 6. Konvexe Hülle und Durchmesser
        let hull = ConvexHull::new(room_positions.clone()).run()?;
        let caliper_pair = RotatingCalipers::new(hull.clone()).run()?;

        // 7. Start und Bosseingang an den Enden des Durchmessers
        let (start_position, boss_entry_position) = if next_random_bool!(seed_resource) {
            (caliper_pair.p1, caliper_pair.p2)
        } else {
            (caliper_pair.p2, caliper_pair.p1)
        };
        let start_room = lookup(&position_table, start_position)?;
        let boss_entry_room = lookup(&position_table, boss_entry_position)?;
        rooms[start_room.0].room_type = RoomType::Start;
        rooms[boss_entry_room.0].room_type = RoomType::BossEntry;
        debug!(
            "MapGenerator: start {} at {}, boss entry {} at {} (distance {:.3})",
            start_room,
            start_position,
            boss_entry_room,
            boss_entry_position,
            caliper_pair.distance
        );

        // 8. Sackgassen mit ihrem einzigen Nachbarn erfassen
        let dead_ends: Vec<(RoomId, RoomId)> = rooms
            .iter()
            .filter(|room| room.is_dead_end())
            .filter_map(|room| room.neighbors().next().map(|neighbor| (room.id, neighbor)))
            .collect();

        // 9. Zusätzliche Verbindungen
        let mut extra_connections = 0;
        for &(room_id, neighbor_id) in &dead_ends {
            if !next_random_ratio!(seed_resource, self.config.connection_random_range) {
                continue;
            }
            if let Some(target) = self.extra_connection_target(&rooms, room_id, neighbor_id)? {
                if connect_rooms(&mut rooms, &mut connections, room_id, target) {
                    extra_connections += 1;
                }
            }
        }

        info!(
            "MapGenerator: {} rooms, {} connections ({} extra), {} dead ends",
            rooms.len(),
            connections.pairs.len(),
            extra_connections,
            dead_ends.len()
        );

        Ok(MapLayout {
            rooms,
            room_positions,
            start_room,
            boss_entry_room,
            boss_room: None,
            connections: connections.pairs,
            edges: connections.edges,
            diagnostics: LayoutDiagnostics {
                partitions,
                selected_spaces,
                triangulation_edges: triangulation.edges,
                spanning_tree_edges,
                hull,
                caliper_pair,
                dead_ends: dead_ends.into_iter().map(|(id, _)| id).collect(),
            },
        })
    }

    /// The `room_count` largest partitions by area. Equal areas keep their
    /// breadth-first order.
    fn select_largest_spaces(&self, partitions: &[Rect]) -> Vec<Rect> {
        let mut spaces = partitions.to_vec();
        if self.config.room_count > spaces.len() {
            warn!(
                "Room count {} is larger than the number of partitions. The maximum in generation {} is {}; the room count is clamped to {}.",
                self.config.room_count,
                self.config.generation,
                spaces.len(),
                spaces.len()
            );
        }
        spaces.sort_by(|a, b| b.area().partial_cmp(&a.area()).unwrap_or(Ordering::Equal));
        spaces.truncate(self.config.room_count);
        spaces
    }

    /// Nearest room ahead of a dead end, seen from its only neighbor. Rooms
    /// that are already connected to the dead end are skipped.
    fn extra_connection_target(
        &self,
        rooms: &[Room],
        room_id: RoomId,
        neighbor_id: RoomId,
    ) -> MathResult<Option<RoomId>> {
        let room = &rooms[room_id.0];
        let candidates: Vec<Point> = rooms
            .iter()
            .filter(|other| other.id != room_id)
            .map(|other| other.center)
            .collect();
        let excluded: Vec<Point> = room.neighbors().map(|id| rooms[id.0].center).collect();

        let eligible = PerpendicularFilter::new(room.center, rooms[neighbor_id.0].center)
            .with_candidates(candidates)
            .with_excluded(excluded)
            .run()?;

        let nearest = eligible.into_iter().min_by(|a, b| {
            room.center
                .distance_squared_to(*a)
                .partial_cmp(&room.center.distance_squared_to(*b))
                .unwrap_or(Ordering::Equal)
        });

        Ok(nearest.and_then(|point| room_at(rooms, point)))
    }
}

fn lookup(position_table: &HashMap<Point, RoomId>, position: Point) -> MathResult<RoomId> {
    position_table
        .get(&position)
        .copied()
        .ok_or(MathError::invalid_argument("MapGenerator", "room_positions"))
}

fn room_at(rooms: &[Room], position: Point) -> Option<RoomId> {
    rooms
        .iter()
        .find(|room| room.center == position)
        .map(|room| room.id)
}

/// Connects `a` and `b` in both directions. Returns `false` if they were
/// already connected.
fn connect_rooms(rooms: &mut [Room], connections: &mut ConnectionSet, a: RoomId, b: RoomId) -> bool {
    let pair = UnorderedPair::new(a, b);
    if a == b || !connections.seen.insert(pair) {
        return false;
    }

    let from = rooms[a.0].center;
    let to = rooms[b.0].center;
    let direction = Direction::from_offset(to - from);

    rooms[a.0].connections.insert(
        b,
        RoomConnection {
            target: b,
            direction,
        },
    );
    rooms[b.0].connections.insert(
        a,
        RoomConnection {
            target: a,
            direction: direction.reverse(),
        },
    );

    connections.pairs.push(pair);
    connections.edges.push(Edge::new(from, to));
    true
}

/// Links the components of the current connection forest through their
/// closest room pairs until a single component is left.
fn connect_components(rooms: &mut [Room], connections: &mut ConnectionSet) {
    let mut sets = UnionFind::new(rooms.len());
    for pair in &connections.pairs {
        sets.union(pair.first.0, pair.second.0);
    }

    while sets.set_count() > 1 {
        let mut closest: Option<(usize, usize, f64)> = None;
        for i in 0..rooms.len() {
            for j in (i + 1)..rooms.len() {
                if sets.connected(i, j) {
                    continue;
                }
                let distance = rooms[i].center.distance_squared_to(rooms[j].center);
                if closest.is_none_or(|(_, _, best)| distance < best) {
                    closest = Some((i, j, distance));
                }
            }
        }

        let Some((i, j, distance)) = closest else {
            break;
        };
        warn!(
            "Room graph is disconnected ({} components); linking {} and {} (distance {:.3}).",
            sets.set_count(),
            RoomId(i),
            RoomId(j),
            distance.sqrt()
        );
        sets.union(i, j);
        connect_rooms(rooms, connections, RoomId(i), RoomId(j));
    }
}
