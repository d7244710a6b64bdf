// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::iproduct;
use crate::valley::{Dir, Valley};


/// Blocked-cell table unrolled over one full blizzard period.
pub(crate) struct Table {
	/// Number of unrolled time slices; occupancy repeats after this many steps.
	pub(crate) period: usize,
	/// West-east grid length (incl. walls); same as the source valley's.
	pub(crate) stride: usize,
	pub(crate) area: usize,
	/// Flat `[period * area]` buffer, indexed `time * area + pos`.
	blocked: Vec<bool>,
}

impl Table {
	/// Unrolls blizzard occupancy over `lcm(interior_height, interior_width)`
	/// time slices, marking each slice's blizzard positions and then advancing
	/// every blizzard one wrapping step. Walls are blocked in every slice; the
	/// entrance and exit gaps are open in every slice.
	pub(crate) fn new(valley: &Valley) -> Self {
		let [dx, dy] = valley.interior();
		let period = lcm(dx, dy);
		let (stride, area) = (valley.stride, valley.area());

		let mut base = vec![false; area];
		for (y, x) in iproduct!(0..valley.rows, 0..stride) {
			let pos = y * stride + x;
			if (y == 0 || y == valley.rows - 1 || x == 0 || x == stride - 1)
				&& pos != valley.entrance && pos != valley.exit
			{ base[pos] = true }
		}
		let mut blocked = base.repeat(period);

		// Working copy; the parsed valley stays untouched.
		let mut blizzards = valley.blizzards.clone();
		for t in 0..period {
			let slice = &mut blocked[t * area..(t + 1) * area];
			for positions in &blizzards {
				for &pos in positions { slice[pos] = true }
			}
			for (dir, positions) in Dir::ALL.into_iter().zip(&mut blizzards) {
				for pos in positions.iter_mut() {
					*pos = advanced(*pos, dir, stride, [dx, dy]);
				}
			}
		}

		Table { period, stride, area, blocked }
	}

	/// Whether `pos` is passable at `time`, for any `time >= 0`.
	pub(crate) fn is_open(&self, time: usize, pos: usize) -> bool {
		!self.blocked[time % self.period * self.area + pos]
	}

	#[cfg(LOGGING)]
	pub(crate) fn render(&self, time: usize) -> String {
		let mut s = String::new();
		for y in 0..self.area / self.stride {
			for x in 0..self.stride {
				s.push(if self.is_open(time, y * self.stride + x) { '.' } else { '#' });
			}
			s.push('\n');
		}
		s
	}
}

/// One blizzard step from `pos`, wrapping on the interior bounds.
fn advanced(pos: usize, dir: Dir, stride: usize, [dx, dy]: [usize; 2]) -> usize {
	let [x, y] = [pos % stride, pos / stride];
	let [x, y] = match dir {
		Dir::North => [x, if y == 1 { dy } else { y - 1 }],
		Dir::East => [if x == dx { 1 } else { x + 1 }, y],
		Dir::South => [x, if y == dy { 1 } else { y + 1 }],
		Dir::West => [if x == 1 { dx } else { x - 1 }, y],
	};
	y * stride + x
}

fn lcm(a: usize, b: usize) -> usize {
	let mut r = [a, b];
	while r[1] != 0 { r = [r[1], r[0] % r[1]] }
	a / r[0] * b
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.#####
		#.....#
		#>....#
		#.....#
		#...v.#
		#.....#
		#####.#
	" };
	let valley = INPUT.parse::<Valley>().unwrap();
	let table = Table::new(&valley);
	assert_eq!(table.period, 5);
	assert_eq!(table.stride, 7);
	assert_eq!(table.area, 49);

	// The east blizzard sweeps row 2, the south one column 4.
	let row2 = |x: usize| 2 * 7 + x;
	assert!(!table.is_open(0, row2(1)));
	assert!(table.is_open(0, row2(2)));
	assert!(!table.is_open(1, row2(2)));
	assert!(table.is_open(1, row2(1)));
	assert!(!table.is_open(4, row2(5)));
	let col4 = |y: usize| y * 7 + 4;
	assert!(!table.is_open(0, col4(4)));
	assert!(!table.is_open(1, col4(5)));
	assert!(!table.is_open(2, col4(1)));

	// Periodic: wrapping brings both blizzards back to their starts.
	for (t, pos) in iproduct!(0..2 * table.period, 0..table.area) {
		assert_eq!(table.is_open(t, pos), table.is_open(t % table.period, pos));
	}
	assert!(!table.is_open(5, row2(1)));
	assert!(!table.is_open(5, col4(4)));

	// Walls stay blocked, the two gaps stay open, at every time.
	for t in 0..2 * table.period {
		assert!(table.is_open(t, valley.entrance));
		assert!(table.is_open(t, valley.exit));
		for x in 0..7 {
			assert!(!table.is_open(t, x) || x == 1);
			assert!(!table.is_open(t, 6 * 7 + x) || x == 5);
		}
		for y in 0..7 {
			assert!(!table.is_open(t, y * 7));
			assert!(!table.is_open(t, y * 7 + 6));
		}
	}

	// Non-square interior, one blizzard per direction.
	const WIDE: &str = indoc::indoc! { "
		#.####
		#...^#
		#.<..#
		#.v.>#
		####.#
	" };
	let table = Table::new(&WIDE.parse::<Valley>().unwrap());
	assert_eq!(table.period, 12);
}
