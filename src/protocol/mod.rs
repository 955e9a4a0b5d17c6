pub mod gateway;
pub mod mapper;
pub mod wire;

pub use gateway::{NullGateway, ResourceGateway, ScriptedGateway};
pub use mapper::{JsonResourceMapper, MappedResources, ResourceMapper};
pub use wire::{
    MasterDataEntry, RequestHeader, ResourceEnvelope, ResourceRequest, StatusOption, WireFilter,
    builtin_all_option, parse_resource_details, status_options_from_master_data,
};
