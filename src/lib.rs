pub mod bench;
pub mod board;
pub mod oracle;
pub mod search;
pub mod sync;
pub mod timer;

pub use board::{BoardSize, BoardSizeError, ColumnSet, Occupancy, Placement};
pub use search::{
    ConfigError, Engine, EngineConfig, ParallelSolver, SearchError, SearchReport, SearchStatus,
    SolutionSink, Solver,
};
pub use sync::StopFlag;
