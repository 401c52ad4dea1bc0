mod error;
mod output;
