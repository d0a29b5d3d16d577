pub mod hello_world_rest_controller;
