mod error_shape;
mod start_game;
