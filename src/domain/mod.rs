// Domain layer: schema types, protocol/mode enums and ports.

pub mod conn_mode;
pub mod instparam;
pub mod ports;
pub mod protocol;
pub mod stability;
