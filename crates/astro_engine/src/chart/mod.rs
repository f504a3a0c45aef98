pub mod assembler;
pub mod types;

pub use assembler::ChartAssembler;
pub use types::{
    BodyPosition, ChartInput, ChartResponse, ChartResult, Unimplemented, ENGINE_DESCRIPTION,
};
