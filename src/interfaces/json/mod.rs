pub mod network_config;
