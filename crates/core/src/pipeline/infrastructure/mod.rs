pub mod threaded_pipeline_driver;
