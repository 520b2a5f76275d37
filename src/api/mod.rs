pub mod analyze;
pub mod classify;
pub mod products;
pub mod recommendations;
pub mod tones;

pub use analyze::{handle_analyze, AnalyzeRequest, __path_handle_analyze};
pub use classify::{handle_classify, ClassifyRequest, ClassifyResponse, __path_handle_classify};
pub use products::{handle_product, ProductDetail, __path_handle_product};
pub use recommendations::{
    handle_recommendations, RecommendationsQuery, RecommendationsResponse,
    __path_handle_recommendations,
};
pub use tones::{handle_tones, ToneInfo, __path_handle_tones};
