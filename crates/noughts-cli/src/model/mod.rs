pub mod network_model;
