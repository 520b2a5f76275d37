pub mod analysis;
pub mod catalog;
pub mod color_names;
pub mod image_sampler;
pub mod ranker;

pub use analysis::{AnalysisError, AnalysisReport, AnalysisService};
pub use catalog::Catalog;
pub use color_names::ColorNameTable;
pub use image_sampler::{FeatureSamples, Point, SampleError};
pub use ranker::{PaletteRanker, RankError, RankedProduct, ScoreWeights};
