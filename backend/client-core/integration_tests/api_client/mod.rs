mod base_url;
mod create;
mod errors;
mod fetch;
