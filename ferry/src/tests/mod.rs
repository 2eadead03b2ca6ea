
// Location and river tests
mod locations;


// Puzzle file tests
mod parsing;

mod error;
