pub mod room_info;
pub mod sensor_info;
