// Unit tests for wire-format behaviour of the domain models

mod date;
mod responses;
mod transaction;
