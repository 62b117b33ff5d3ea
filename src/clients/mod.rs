pub mod log_gateway;
