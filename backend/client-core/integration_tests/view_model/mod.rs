mod budget;
mod transaction;
