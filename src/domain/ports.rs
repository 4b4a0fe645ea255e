use crate::domain::model::{ExportFormat, TripRequest};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn trip_request(&self) -> TripRequest;
    fn output_path(&self) -> &str;
    fn export_formats(&self) -> Vec<ExportFormat>;
}
