// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
pub(crate) enum Dir { North, East, South, West }

impl Dir {
	pub(crate) const ALL: [Dir; 4] = {
		use Dir::*;
		[North, East, South, West]
	};
}

/// Walled valley with its initial blizzard snapshot. Positions are flat
/// row-major indices over the full grid, walls included.
pub(crate) struct Valley {
	/// West-east grid length (incl. walls).
	pub(crate) stride: usize,
	/// South-north grid length (incl. walls).
	pub(crate) rows: usize,
	/// Gap in the north wall.
	pub(crate) entrance: usize,
	/// Gap in the south wall.
	pub(crate) exit: usize,
	/// Initial blizzard positions, one list per direction in `Dir::ALL` order.
	pub(crate) blizzards: [Vec<usize>; 4],
}

impl Valley {
	/// West-east & south-north traversable lengths (excl. walls).
	pub(crate) fn interior(&self) -> [usize; 2] {
		[self.stride - 2, self.rows - 2]
	}

	pub(crate) fn area(&self) -> usize {
		self.stride * self.rows
	}
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::{Dir, Valley};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum ValleyError {
		Empty,
		LineLen { line: usize, len: Option<usize>, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		NoGap { line: usize },
		DuplicateGap { line: usize, column: usize },
		NoInterior,
	}

	/// Column of the single gap in a wall row.
	fn wall_gap(l: usize, line: &str) -> Result<usize, ValleyError> {
		use ValleyError as E;
		let mut gap = None;
		for (c, b) in line.bytes().enumerate() {
			match b {
				b'#' => (),
				b'.' if c > 0 && c < line.len() - 1 => match gap {
					None => gap = Some(c),
					Some(_) => return Err(E::DuplicateGap { line: l + 1, column: c + 1 }),
				}
				found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found }),
			}
		}
		gap.ok_or(E::NoGap { line: l + 1 })
	}

	impl FromStr for Valley {
		type Err = ValleyError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ValleyError as E;

			let lines = s.lines().collect::<Vec<_>>();
			let [first, interior @ .., last] = lines.as_slice() else {
				return Err(if lines.is_empty() { E::Empty } else { E::NoInterior })
			};

			let stride = first.len();
			if stride < 3 { return Err(E::LineLen { line: 1, len: None, found: stride }) }
			if interior.is_empty() { return Err(E::NoInterior) }

			macro_rules! check_len { ( $l:expr, $line:expr ) => {
				if $line.len() != stride { return Err(E::LineLen {
					line: $l + 1, len: Some(stride), found: $line.len() }) }
			} }

			let entrance = wall_gap(0, first)?;
			check_len!(lines.len() - 1, last);
			let exit = (lines.len() - 1) * stride + wall_gap(lines.len() - 1, last)?;

			let mut blizzards: [Vec<usize>; 4] = Default::default();
			for (l, line) in interior.iter().enumerate() {
				let l = l + 1;
				check_len!(l, line);
				for (c, b) in line.bytes().enumerate() {
					let edge = c == 0 || c == stride - 1;
					let dir = match b {
						b'#' if edge => continue,
						b'.' if !edge => continue,
						b'^' if !edge => Dir::North,
						b'>' if !edge => Dir::East,
						b'v' if !edge => Dir::South,
						b'<' if !edge => Dir::West,
						found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found }),
					};
					blizzards[dir as usize].push(l * stride + c);
				}
			}

			Ok(Valley { stride, rows: lines.len(), entrance, exit, blizzards })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.######
		#>>.<^<#
		#.<..<<#
		#>v.><>#
		#<^v^^>#
		######.#
	" };
	let valley = INPUT.parse::<Valley>().unwrap();
	assert_eq!(valley.stride, 8);
	assert_eq!(valley.rows, 6);
	assert_eq!(valley.interior(), [6, 4]);
	assert_eq!(valley.area(), 48);
	assert_eq!(valley.entrance, 1);
	assert_eq!(valley.exit, 46);
	assert_eq!(valley.blizzards.iter().map(Vec::len).collect::<Vec<_>>(), [4, 6, 2, 7]);

	use parsing::ValleyError as E;
	assert!(matches!("".parse::<Valley>(), Err(E::Empty)));
	assert!(matches!("#.#\n#.#".parse::<Valley>(), Err(E::NoInterior)));
	assert!(matches!("####\n#..#\n##.#".parse::<Valley>(),
		Err(E::NoGap { line: 1 })));
	assert!(matches!("#.#\n#x#\n#.#".parse::<Valley>(),
		Err(E::InvalidByte { line: 2, column: 2, found: b'x' })));
	assert!(matches!("#.##\n#..#\n#.#\n##.#".parse::<Valley>(),
		Err(E::LineLen { line: 3, len: Some(4), found: 3 })));
	assert!(matches!("#..#\n#..#\n##.#".parse::<Valley>(),
		Err(E::DuplicateGap { line: 1, column: 3 })));
}
