pub mod error;
pub mod estimate;
pub mod population;

pub use error::SimulationError;
pub use estimate::Estimate;
pub use population::Population;
