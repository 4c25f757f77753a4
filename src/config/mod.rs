pub mod model;
pub mod prompt;

pub use model::{ chronex, creator, Capabilities, ChronexConfig, CreatorInfo, CREATOR, VERSION };
