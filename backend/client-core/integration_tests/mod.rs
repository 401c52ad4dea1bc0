mod api_client;
mod helpers;
mod view_model;
