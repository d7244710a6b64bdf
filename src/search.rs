// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use either::Either;
use crate::occupancy::Table;


/// Minimum number of steps from `from` at `start_time` until standing on
/// `to`, moving orthogonally or waiting, only ever onto cells open at the
/// arrival time. Branch-and-bound over an explicit work-list: a state is
/// dropped once it cannot beat the best arrival found so far, and a
/// `(time mod period, position)` key is revisited only when reached
/// strictly earlier than recorded.
pub(crate) fn fastest(table: &Table, from: usize, to: usize, start_time: usize) -> usize {
	let (stride, area) = (table.stride, table.area);

	// Goal-ward moves are pushed last so the stack explores them first;
	// return legs run the candidate order the other way around.
	let reverse = to < from;

	let mut stack = vec![(start_time, from)];
	let mut best = vec![usize::MAX; table.period * area];
	best[start_time % table.period * area + from] = start_time;

	let mut arrival = usize::MAX;

	while let Some((time, pos)) = stack.pop() {
		let time = time + 1;
		if time >= arrival { continue }

		#[cfg(LOGGING)]
		println!("{},{} @ {}", pos % stride, pos / stride, time - 1);

		let steps = [
			(pos % stride > 0).then(|| pos - 1),
			(pos >= stride).then(|| pos - stride),
			Some(pos),
			(pos + stride < area).then(|| pos + stride),
			(pos % stride < stride - 1).then(|| pos + 1),
		];
		let steps = if reverse { Either::Left(steps.into_iter().rev()) }
			else { Either::Right(steps.into_iter()) };

		for next in steps.flatten() {
			if next == to {
				arrival = time;
				#[cfg(LOGGING)]
				println!("arrived @ {arrival}:\n{}", table.render(arrival));
				break
			}
			if !table.is_open(time, next) { continue }
			let known = &mut best[time % table.period * area + next];
			if time < *known {
				*known = time;
				stack.push((time, next));
			}
		}
	}

	if arrival == usize::MAX { panic!("Could not find path") }
	arrival - start_time
}


/// Steps for each leg of the trip there, back again, and there once more,
/// each relative to its own start; the round trip takes their sum. Passing
/// a known first-leg time skips recomputing it. Both `from` and `to` must
/// be cells no blizzard ever occupies (the wall gaps are), so that a leg
/// may start by waiting in place indefinitely.
pub(crate) fn round_trip(table: &Table, from: usize, to: usize, first: Option<usize>)
-> [usize; 3] {
	let there = first.unwrap_or_else(|| fastest(table, from, to, 0));
	let back = fastest(table, to, from, there);
	let again = fastest(table, from, to, there + back);
	[there, back, again]
}


#[cfg(test)]
mod tests {
	use {indoc::indoc, test_case::test_case};
	use {super::*, crate::valley::Valley};

	const QUIET: &str = indoc! { "
		#.#####
		#.....#
		#>....#
		#.....#
		#...v.#
		#.....#
		#####.#
	" };
	const PUBLISHED: &str = indoc! { "
		#.######
		#>>.<^<#
		#.<..<<#
		#>v.><>#
		#<^v^^>#
		######.#
	" };

	fn valley_and_table(s: &str) -> (Valley, Table) {
		let valley = s.parse::<Valley>().unwrap();
		let table = Table::new(&valley);
		(valley, table)
	}

	#[test_case(QUIET => 10; "quiet valley")]
	#[test_case(PUBLISHED => 18; "published example")]
	fn first_leg(s: &str) -> usize {
		let (valley, table) = valley_and_table(s);
		fastest(&table, valley.entrance, valley.exit, 0)
	}

	#[test_case(QUIET => 30; "quiet valley")]
	#[test_case(PUBLISHED => 54; "published example")]
	fn full_trip(s: &str) -> usize {
		let (valley, table) = valley_and_table(s);
		round_trip(&table, valley.entrance, valley.exit, None).into_iter().sum()
	}

	#[test]
	fn legs() {
		let (valley, table) = valley_and_table(PUBLISHED);
		let legs = round_trip(&table, valley.entrance, valley.exit, Some(18));
		assert_eq!(legs, [18, 23, 13]);

		// Same searches, same answers.
		assert_eq!(
			round_trip(&table, valley.entrance, valley.exit, None),
			legs,
		);
		assert_eq!(fastest(&table, valley.exit, valley.entrance, 18), 23);
	}

	#[test]
	fn unobstructed_manhattan() {
		// The single blizzard never meets the straight walk to the exit, so
		// the walk takes exactly the Manhattan distance between the gaps.
		const INPUT: &str = indoc! { "
			#.###
			#...#
			#...#
			#<..#
			###.#
		" };
		let (valley, table) = valley_and_table(INPUT);
		assert_eq!(fastest(&table, valley.entrance, valley.exit, 0), 6);
	}
}
