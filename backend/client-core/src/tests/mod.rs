mod config;
mod endpoints;
mod view_state;
