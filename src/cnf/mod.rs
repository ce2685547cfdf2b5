pub mod cnf;
pub mod dimacs;
pub mod generate;
