// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod valley;
mod occupancy;
mod search;

use clap::Parser;

const PUZZLE_INPUT_PATH: &str = "inputs/puzzle.txt";
const EXAMPLE_INPUT_PATH: &str = "inputs/example.txt";

/// Finds the fastest trips across a blizzard-swept valley.
#[derive(Parser)]
struct Args {
	/// With no arguments the puzzle input is used, with one the example
	/// input, and with two or more the second is taken as a literal path.
	file_name: Vec<String>,
}

impl Args {
	fn path(&self) -> &str {
		match self.file_name.as_slice() {
			[] => PUZZLE_INPUT_PATH,
			[_] => EXAMPLE_INPUT_PATH,
			[_, path, ..] => path,
		}
	}
}

fn main() {
	let args = Args::parse();
	let path = args.path();
	let input = std::fs::read_to_string(path).unwrap_or_else(|e| {
		eprintln!("Could not read input file {path}: {e}");
		std::process::exit(1)
	});

	let valley = input.trim_end_matches('\n').parse::<valley::Valley>().unwrap();
	let table = occupancy::Table::new(&valley);

	let there = search::fastest(&table, valley.entrance, valley.exit, 0);
	println!("Reaching the goal requires a minimum of {there} minutes");

	let [there, back, again] =
		search::round_trip(&table, valley.entrance, valley.exit, Some(there));
	println!("The full trip requires {} minutes \
		({there} to the goal, {back} back to the start, {again} to the goal again)",
		there + back + again);
}


#[test]
fn args() {
	let path = |args: &[&str]| Args::parse_from(args).path().to_owned();
	assert_eq!(path(&["basin"]), PUZZLE_INPUT_PATH);
	assert_eq!(path(&["basin", "example"]), EXAMPLE_INPUT_PATH);
	assert_eq!(path(&["basin", "path", "inputs/other.txt"]), "inputs/other.txt");
	assert_eq!(path(&["basin", "path", "inputs/other.txt", "extra"]), "inputs/other.txt");
}
