use bitflags::bitflags;
use std::iter::FromIterator;

/// One of the four taxicab directions between adjacent cells.
///
/// `Up` is towards `y = 0` and `Left` is towards `x = 0`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The order in which neighbours are discovered by both the walk and the hunt.
    /// Every tie-break in maze carving depends on it.
    pub const DISCOVERY_ORDER: [Direction; 4] = [Direction::Left,
                                                 Direction::Up,
                                                 Direction::Down,
                                                 Direction::Right];

    /// Unit offset on the integer lattice as `(dx, dy)`.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The passage flag for the side of a cell facing `self`.
    #[inline]
    pub fn passage(self) -> Passages {
        match self {
            Direction::Up => Passages::UP,
            Direction::Down => Passages::DOWN,
            Direction::Left => Passages::LEFT,
            Direction::Right => Passages::RIGHT,
        }
    }
}

bitflags! {
    /// The set of open sides of one grid cell.
    ///
    /// An empty set means the cell has not been visited by maze carving yet; there is no
    /// other visited flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Passages: u8 {
        const UP    = 0b0001;
        const DOWN  = 0b0010;
        const LEFT  = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl Passages {
    /// Open the side in `direction`.
    #[inline]
    pub fn open(&mut self, direction: Direction) {
        self.insert(direction.passage());
    }

    #[inline]
    pub fn is_open(self, direction: Direction) -> bool {
        self.contains(direction.passage())
    }

    #[inline]
    pub fn is_visited(self) -> bool {
        !self.is_empty()
    }

    /// The open directions, in discovery order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        let order: &'static [Direction; 4] = &Direction::DISCOVERY_ORDER;
        order
            .iter()
            .cloned()
            .filter(move |dir| self.is_open(*dir))
    }
}

impl From<Direction> for Passages {
    fn from(direction: Direction) -> Passages {
        direction.passage()
    }
}

impl FromIterator<Direction> for Passages {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Passages {
        iter.into_iter().map(Direction::passage).collect()
    }
}

/// Position of a cell on the abstract maze grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}

impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    /// The coordinate one step away in `direction`, if it is representable.
    /// It is not bounds checked against any particular grid.
    pub fn offset(self, direction: Direction) -> Option<GridCoordinate> {
        let (dx, dy) = direction.offset();
        let x = i64::from(self.x) + dx;
        let y = i64::from(self.y) + dy;
        if x < 0 || y < 0 || x > i64::from(u32::MAX) || y > i64::from(u32::MAX) {
            None
        } else {
            Some(GridCoordinate::new(x as u32, y as u32))
        }
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(x_y_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// Position of a tile on the display grid that walls are projected onto.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct TileCoordinate {
    pub x: u32,
    pub y: u32,
}

impl TileCoordinate {
    pub fn new(x: u32, y: u32) -> TileCoordinate {
        TileCoordinate { x, y }
    }
}

impl From<(u32, u32)> for TileCoordinate {
    fn from(x_y_pair: (u32, u32)) -> TileCoordinate {
        TileCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_are_involutive() {
        for dir in Direction::DISCOVERY_ORDER.iter().cloned() {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn empty_passages_are_unvisited() {
        let p = Passages::empty();
        assert!(!p.is_visited());
        assert!(p.is_empty());
        for dir in Direction::DISCOVERY_ORDER.iter().cloned() {
            assert!(!p.is_open(dir));
        }
    }

    #[test]
    fn opening_directions() {
        let mut p = Passages::empty();
        p.open(Direction::Down);
        assert!(p.is_visited());
        assert!(p.is_open(Direction::Down));
        assert!(!p.is_open(Direction::Up));

        p.open(Direction::Down);
        assert_eq!(p, Passages::DOWN);

        p.open(Direction::Left);
        assert_eq!(p.directions().collect::<Vec<_>>(), vec![Direction::Left, Direction::Down]);
    }

    #[test]
    fn all_passages() {
        let p = Passages::all();
        assert!(p.is_all());
        assert_eq!(p.directions().collect::<Vec<_>>(), Direction::DISCOVERY_ORDER.to_vec());
        assert_eq!(p, Direction::DISCOVERY_ORDER.iter().cloned().collect::<Passages>());
    }

    #[test]
    fn direction_flags_are_distinct_and_opposites_pair_up() {
        for dir in Direction::DISCOVERY_ORDER.iter().cloned() {
            assert_eq!(dir.passage().bits().count_ones(), 1);
            assert!(!dir.passage().intersects(dir.opposite().passage()));
        }
        assert_eq!(Passages::from(Direction::Up) | Passages::from(Direction::Down),
                   Passages::UP | Passages::DOWN);
    }

    #[test]
    fn bits_round_trip_masks_unknown_bits() {
        let p = Passages::RIGHT | Passages::UP;
        assert_eq!(Passages::from_bits(p.bits()), Some(p));
        assert_eq!(Passages::from_bits(0xff), None);
        assert_eq!(Passages::from_bits_truncate(0xff), Passages::all());
    }

    #[test]
    fn coordinate_offsets() {
        let origin = GridCoordinate::new(0, 0);
        assert_eq!(origin.offset(Direction::Left), None);
        assert_eq!(origin.offset(Direction::Up), None);
        assert_eq!(origin.offset(Direction::Right), Some(GridCoordinate::new(1, 0)));
        assert_eq!(origin.offset(Direction::Down), Some(GridCoordinate::new(0, 1)));

        let far = GridCoordinate::new(u32::MAX, u32::MAX);
        assert_eq!(far.offset(Direction::Right), None);
        assert_eq!(far.offset(Direction::Down), None);
        assert_eq!(far.offset(Direction::Left), Some(GridCoordinate::new(u32::MAX - 1, u32::MAX)));
    }
}
