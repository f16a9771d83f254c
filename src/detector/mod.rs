pub mod error;
pub mod http;
pub mod models;
pub mod reduce;
pub mod replay;
pub mod traits;
pub mod types;

pub use error::{DetectorError, ModelLoadError};
pub use http::HttpDetector;
pub use models::{ModelSet, ModelStore};
pub use reduce::{dominant_emotion, dominant_label};
pub use replay::ReplayDetector;
pub use traits::{CaptureConstraints, ExpressionDetector};
pub use types::{Detection, Expressions, FaceBox, FrameSize};
