pub mod augment_stream_use_case;
pub mod detection_slot;
pub mod infrastructure;
pub mod pipeline_driver;
pub mod pipeline_logger;
