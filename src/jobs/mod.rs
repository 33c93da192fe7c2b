// Job variants shipped with this sample extension

pub mod api_update;
pub mod inventory;
pub mod sample;

pub use api_update::ApiUpdateJob;
pub use inventory::InventoryParameterJob;
pub use sample::SampleParameterJob;
