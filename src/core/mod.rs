pub mod driver;
pub mod fetcher;
pub mod link;
pub mod projector;

pub use crate::domain::model::{
    DateRange, PageRequest, PageResult, PatentRecord, RunReport, MAX_PAGE_SIZE,
};
pub use crate::domain::ports::{ConfigProvider, RecordSink};
pub use crate::utils::error::Result;
